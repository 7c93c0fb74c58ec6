//! Reactor configuration and validation.
//!
//! [`ReactorConfig`] is the builder-input for constructing a
//! [`Reactor`](crate::Reactor). [`validate()`](ReactorConfig::validate)
//! checks every structural invariant up front so that stepping never
//! has to deal with an empty lattice or a non-finite rate.

use drift_core::ConfigError;
use drift_lattice::Line1D;

/// Complete configuration for a lattice diffusion reactor.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactorConfig {
    /// Number of lattice cells. Must be at least 1. Default: 10.
    pub cells: usize,
    /// Per-particle diffusion rate constant `kD`, applied to each of
    /// the two hop directions. Must be finite and `>= 0`. Default: 0.1.
    pub diffusion_rate: f64,
    /// RNG seed for deterministic simulation. Default: 0.
    pub seed: u64,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            cells: 10,
            diffusion_rate: 0.1,
            seed: 0,
        }
    }
}

impl ReactorConfig {
    /// Configuration with the given lattice width and rate, default seed.
    pub fn new(cells: usize, diffusion_rate: f64) -> Self {
        Self {
            cells,
            diffusion_rate,
            ..Self::default()
        }
    }

    /// Set the lattice width.
    pub fn cells(mut self, cells: usize) -> Self {
        self.cells = cells;
        self
    }

    /// Set the diffusion rate constant.
    pub fn diffusion_rate(mut self, diffusion_rate: f64) -> Self {
        self.diffusion_rate = diffusion_rate;
        self
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells == 0 {
            return Err(ConfigError::EmptyLattice);
        }
        validate_rate(self.diffusion_rate)?;
        Ok(())
    }

    /// Validate and build the lattice this configuration describes.
    pub(crate) fn build_lattice(&self) -> Result<Line1D, ConfigError> {
        self.validate()?;
        Ok(Line1D::new(self.cells)?)
    }
}

/// Check a diffusion rate constant.
pub(crate) fn validate_rate(value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidDiffusionRate { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::LatticeError;

    #[test]
    fn default_config_is_valid() {
        assert!(ReactorConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_cells_rejected() {
        let cfg = ReactorConfig::new(0, 0.1);
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyLattice));
    }

    #[test]
    fn zero_rate_is_valid() {
        assert!(ReactorConfig::new(5, 0.0).validate().is_ok());
    }

    #[test]
    fn negative_rate_rejected() {
        let cfg = ReactorConfig::new(5, -1.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDiffusionRate { value }) if value == -1.0
        ));
    }

    #[test]
    fn non_finite_rates_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let cfg = ReactorConfig::new(5, value);
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidDiffusionRate { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn builder_setters_apply() {
        let cfg = ReactorConfig::default()
            .cells(3)
            .diffusion_rate(0.25)
            .seed(99);
        assert_eq!(cfg.cells, 3);
        assert_eq!(cfg.diffusion_rate, 0.25);
        assert_eq!(cfg.seed, 99);
    }

    #[test]
    fn oversized_lattice_surfaces_lattice_error() {
        let cfg = ReactorConfig::new(Line1D::MAX_LEN + 1, 0.1);
        assert!(matches!(
            cfg.build_lattice(),
            Err(ConfigError::Lattice(LatticeError::TooLarge { .. }))
        ));
    }
}
