use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::UnitInterval,
    exergy::DeadState,
    thermo::{Quality, Saturation, State},
    units::{SpecificEnthalpy, SpecificEntropy, SpecificExergy},
};

use super::{ComponentError, RankineThermoModel};

/// A fully described state point at a component port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub pressure: Pressure,

    /// Saturation temperature when the point is two phase.
    pub temperature: ThermodynamicTemperature,

    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,

    /// Vapor quality, `None` for single-phase points.
    pub quality: Option<Ratio>,

    /// Specific flow exergy relative to the dead state.
    pub exergy: SpecificExergy,
}

/// Property queries for one component call.
///
/// Wraps every failure with the port (`location`) and query that produced it.
pub(super) struct Resolver<'a, F, M> {
    thermo: &'a M,
    dead_state: &'a DeadState<F>,
}

impl<'a, F, M> Resolver<'a, F, M>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    pub(super) fn new(thermo: &'a M, dead_state: &'a DeadState<F>) -> Self {
        Self { thermo, dead_state }
    }

    fn fluid(&self) -> F {
        self.dead_state.fluid().clone()
    }

    pub(super) fn at_temperature_pressure(
        &self,
        location: &str,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<State<F>, ComponentError> {
        self.thermo
            .state_from((self.fluid(), temperature, pressure))
            .map_err(|err| {
                ComponentError::thermo_failed(
                    format!(
                        "{location}: state_from(T={:.2} °C, p={:.3} kPa)",
                        temperature.get::<degree_celsius>(),
                        pressure.get::<kilopascal>()
                    ),
                    err,
                )
            })
    }

    pub(super) fn at_pressure_quality(
        &self,
        location: &str,
        pressure: Pressure,
        quality: Quality,
    ) -> Result<State<F>, ComponentError> {
        self.thermo
            .state_from((self.fluid(), pressure, quality))
            .map_err(|err| {
                ComponentError::thermo_failed(
                    format!(
                        "{location}: state_from(p={:.3} kPa, x={:.4})",
                        pressure.get::<kilopascal>(),
                        quality.as_ref().get::<ratio>()
                    ),
                    err,
                )
            })
    }

    pub(super) fn saturated(
        &self,
        location: &str,
        pressure: Pressure,
        saturation: Saturation,
    ) -> Result<State<F>, ComponentError> {
        self.thermo
            .state_from((self.fluid(), pressure, saturation))
            .map_err(|err| {
                ComponentError::thermo_failed(
                    format!(
                        "{location}: state_from(p={:.3} kPa, {saturation:?})",
                        pressure.get::<kilopascal>()
                    ),
                    err,
                )
            })
    }

    pub(super) fn at_pressure_entropy(
        &self,
        location: &str,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<State<F>, ComponentError> {
        self.thermo
            .state_from((self.fluid(), pressure, entropy))
            .map_err(|err| {
                ComponentError::thermo_failed(
                    format!(
                        "{location}: state_from(p={:.3} kPa, s={:.5} kJ/kg·K)",
                        pressure.get::<kilopascal>(),
                        entropy.get::<kilojoule_per_kilogram_kelvin>()
                    ),
                    err,
                )
            })
    }

    pub(super) fn at_pressure_enthalpy(
        &self,
        location: &str,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<State<F>, ComponentError> {
        self.thermo
            .state_from((self.fluid(), pressure, enthalpy))
            .map_err(|err| {
                ComponentError::thermo_failed(
                    format!(
                        "{location}: state_from(p={:.3} kPa, h={:.3} kJ/kg)",
                        pressure.get::<kilopascal>(),
                        enthalpy.get::<kilojoule_per_kilogram>()
                    ),
                    err,
                )
            })
    }

    /// Re-resolves a state from `(T, x)` inside the dome or `(T, p)` outside it.
    ///
    /// Properties of a state found from `(p, h)` or `(p, s)` are read only
    /// after settling it.
    pub(super) fn settle(
        &self,
        location: &str,
        state: &State<F>,
        pressure: Pressure,
    ) -> Result<State<F>, ComponentError> {
        match self.quality(location, state)? {
            Some(x) => {
                let quality = UnitInterval::new(x).map_err(|err| {
                    ComponentError::thermo_failed(
                        format!("{location}: quality {:.4} outside [0, 1]", x.get::<ratio>()),
                        err,
                    )
                })?;
                self.at_temperature_quality(location, state.temperature, quality)
            }
            None => self.at_temperature_pressure(location, state.temperature, pressure),
        }
    }

    fn at_temperature_quality(
        &self,
        location: &str,
        temperature: ThermodynamicTemperature,
        quality: Quality,
    ) -> Result<State<F>, ComponentError> {
        self.thermo
            .state_from((self.fluid(), temperature, quality))
            .map_err(|err| {
                ComponentError::thermo_failed(
                    format!(
                        "{location}: state_from(T={:.2} °C, x={:.4})",
                        temperature.get::<degree_celsius>(),
                        quality.as_ref().get::<ratio>()
                    ),
                    err,
                )
            })
    }

    pub(super) fn enthalpy(
        &self,
        location: &str,
        state: &State<F>,
    ) -> Result<SpecificEnthalpy, ComponentError> {
        self.thermo
            .enthalpy(state)
            .map_err(|err| ComponentError::thermo_failed(format!("enthalpy({location})"), err))
    }

    pub(super) fn entropy(
        &self,
        location: &str,
        state: &State<F>,
    ) -> Result<SpecificEntropy, ComponentError> {
        self.thermo
            .entropy(state)
            .map_err(|err| ComponentError::thermo_failed(format!("entropy({location})"), err))
    }

    pub(super) fn quality(
        &self,
        location: &str,
        state: &State<F>,
    ) -> Result<Option<Ratio>, ComponentError> {
        self.thermo
            .quality(state)
            .map_err(|err| ComponentError::thermo_failed(format!("quality({location})"), err))
    }

    /// Builds a [`StatePoint`] reporting `enthalpy` from the energy balance.
    ///
    /// Entropy, quality, and temperature come from `state`.
    pub(super) fn point(
        &self,
        location: &str,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
        state: &State<F>,
    ) -> Result<StatePoint, ComponentError> {
        let entropy = self.entropy(location, state)?;
        let quality = self.quality(location, state)?;
        Ok(StatePoint {
            pressure,
            temperature: state.temperature,
            enthalpy,
            entropy,
            quality,
            exergy: self.dead_state.specific_exergy(enthalpy, entropy),
        })
    }
}
