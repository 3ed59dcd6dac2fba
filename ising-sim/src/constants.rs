/// Boltzmann constant used to scale susceptibility and specific heat.
///
/// Historical value the outputs of this model are calibrated against (note the
/// exponent). Changing it rescales every susceptibility and specific heat.
pub const BOLTZMANN: f64 = 1.38e-27;

/// Physical constants entering the observable normalizations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub boltzmann: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            boltzmann: BOLTZMANN,
        }
    }
}

impl PhysicalConstants {
    /// Reduced units (`k_B = 1`).
    pub fn reduced() -> Self {
        Self { boltzmann: 1.0 }
    }
}
