pub mod lattice;
pub mod snapshot;

pub use lattice::{Cells, Lattice};
pub use snapshot::Snapshot;
