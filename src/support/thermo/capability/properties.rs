use uom::si::f64::{Pressure, Ratio};

use crate::support::thermo::{PropertyError, State};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

use super::ThermoModel;

/// Pressure of a resolved state.
///
/// Inside the dome this is the saturation pressure.
pub trait HasPressure: ThermoModel {
    /// Pressure of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the model cannot evaluate it.
    fn pressure(&self, state: &State<Self::Fluid>) -> Result<Pressure, PropertyError>;
}

pub trait HasEnthalpy: ThermoModel {
    /// Specific enthalpy of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the model cannot evaluate it.
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError>;
}

pub trait HasEntropy: ThermoModel {
    /// Specific entropy of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the model cannot evaluate it.
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError>;
}

pub trait HasQuality: ThermoModel {
    /// Returns the vapor quality for the given state.
    ///
    /// Returns `Ok(None)` when the state is single phase (subcooled liquid,
    /// superheated vapor, or supercritical), where quality is undefined.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the phase cannot be determined.
    fn quality(&self, state: &State<Self::Fluid>) -> Result<Option<Ratio>, PropertyError>;
}
