pub mod simulator;
mod temperature;

pub use simulator::Simulator;
