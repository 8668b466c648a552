//! Condenser model.
//!
//! Condenses a two-phase inlet to saturated or subcooled liquid.
//!
//! A condenser produces nothing useful in exergy terms. The whole exergy drop
//! of the fluid is charged against rejection to the environment, valued at
//! the inlet temperature:
//!
//! ```text
//! exLD = ex_in − ex_out
//! exL  = qc·(1 − T0/T_in)
//! exD  = exLD − exL
//! exp  = 0, eps = 0
//! ```

mod types;

use twine_core::Model;
use uom::{ConstZero, si::f64::TemperatureInterval};

use crate::support::{
    exergy::{DeadState, Environment, ExergyBalance},
    thermo::Saturation,
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{ComponentError, ProcessWarning, RankineThermoModel, resolve::Resolver};

pub use types::{CondenserInput, CondenserOutlet, CondenserResults};

/// Evaluates a condenser's energy and exergy balances.
///
/// A subcooled outlet that is not below the inlet temperature, or any
/// non-positive heat rejection, is reported in
/// [`CondenserResults::warnings`] and the computed values are still returned.
///
/// # Errors
///
/// Returns [`ComponentError::PropertyResolution`] if a state cannot be resolved.
pub fn condenser<F, M>(
    input: &CondenserInput,
    dead_state: &DeadState<F>,
    thermo: &M,
) -> Result<CondenserResults, ComponentError>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    let resolve = Resolver::new(thermo, dead_state);

    let inlet_state =
        resolve.at_pressure_quality("inlet", input.inlet_pressure, input.inlet_quality)?;
    let h_in = resolve.enthalpy("inlet", &inlet_state)?;
    let inlet = resolve.point("inlet", input.inlet_pressure, h_in, &inlet_state)?;

    let outlet_state = match input.outlet {
        CondenserOutlet::SaturatedLiquid => {
            resolve.saturated("outlet", input.outlet_pressure, Saturation::Liquid)?
        }
        CondenserOutlet::Subcooled(temperature) => {
            resolve.at_temperature_pressure("outlet", temperature, input.outlet_pressure)?
        }
    };
    let h_out = resolve.enthalpy("outlet", &outlet_state)?;
    let outlet = resolve.point("outlet", input.outlet_pressure, h_out, &outlet_state)?;

    let heat_rejected = h_in - h_out;
    let temperature_drop = inlet.temperature.minus(outlet.temperature);

    let exergy = ExergyBalance::rejected(
        inlet.exergy - outlet.exergy,
        heat_rejected * dead_state.carnot_factor(inlet.temperature),
    );

    let mut warnings = Vec::new();
    if matches!(input.outlet, CondenserOutlet::Subcooled(_))
        && temperature_drop <= TemperatureInterval::ZERO
    {
        ProcessWarning::OutletNotSubcooled {
            inlet_temperature: inlet.temperature,
            outlet_temperature: outlet.temperature,
        }
        .report(&mut warnings);
    }
    if heat_rejected <= SpecificEnthalpy::ZERO {
        ProcessWarning::NonPositiveHeatRejection {
            heat: heat_rejected,
        }
        .report(&mut warnings);
    }

    Ok(CondenserResults {
        inlet,
        outlet,
        heat_rejected,
        temperature_drop,
        exergy,
        entropy_generation: dead_state.entropy_generation(exergy.destruction),
        warnings,
    })
}

/// Condenser bound to a property model and a dead state.
#[derive(Debug, Clone)]
pub struct Condenser<F, M> {
    thermo: M,
    dead_state: DeadState<F>,
}

impl<F, M> Condenser<F, M>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    /// Resolves the dead state of `fluid` at `environment` and keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::DeadState`] if the dead state cannot be resolved.
    pub fn new(thermo: M, fluid: F, environment: Environment) -> Result<Self, ComponentError> {
        let dead_state = environment.dead_state(fluid, &thermo)?;
        Ok(Self { thermo, dead_state })
    }

    #[must_use]
    pub fn dead_state(&self) -> &DeadState<F> {
        &self.dead_state
    }
}

impl<F, M> Model for Condenser<F, M>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    type Input = CondenserInput;
    type Output = CondenserResults;
    type Error = ComponentError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        condenser(input, &self.dead_state, &self.thermo)
    }
}
