use uom::si::f64::Ratio;

use crate::support::constraint::{Constrained, UnitInterval};

/// Vapor quality, the vapor mass fraction of a two-phase mixture.
///
/// Both endpoints are valid: `0` is saturated liquid and `1` is saturated vapor.
pub type Quality = Constrained<Ratio, UnitInterval>;

/// Selects a saturation boundary for a saturation-only state query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saturation {
    /// Saturated liquid, quality zero.
    Liquid,
    /// Saturated vapor, quality one.
    Vapor,
}

impl Saturation {
    /// Returns the vapor quality on this boundary.
    #[must_use]
    pub fn quality(self) -> Quality {
        match self {
            Saturation::Liquid => UnitInterval::zero(),
            Saturation::Vapor => UnitInterval::one(),
        }
    }
}
