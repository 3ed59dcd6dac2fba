/// One point of a temperature sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    /// The value `beta` was set to for this point.
    pub temperature: f64,
    /// Susceptibility of the configuration reached after equilibration.
    pub susceptibility: f64,
}

/// Split a sweep into parallel `(temperatures, susceptibilities)` columns, the
/// shape a scatter plot consumes.
pub fn columns(samples: &[SweepSample]) -> (Vec<f64>, Vec<f64>) {
    samples
        .iter()
        .map(|s| (s.temperature, s.susceptibility))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_preserve_order() {
        let samples = [
            SweepSample {
                temperature: 0.1,
                susceptibility: -3.0,
            },
            SweepSample {
                temperature: 0.2,
                susceptibility: -5.0,
            },
        ];
        let (t, chi) = columns(&samples);
        assert_eq!(t, vec![0.1, 0.2]);
        assert_eq!(chi, vec![-3.0, -5.0]);
    }
}
