//! Boiler model.
//!
//! Heats a subcooled liquid to saturated or superheated vapor.
//!
//! The heat actually supplied is `qh_ideal / η`, and the difference is lost to
//! the surroundings. Both the supplied heat and the lost heat are valued at
//! the outlet temperature, which stands in for the heat source temperature:
//!
//! ```text
//! exf = qh_actual·(1 − T0/T_out)
//! exp = ex_out − ex_in
//! exL = heat_loss·(1 − T0/T_out)
//! ```

mod types;

use twine_core::Model;
use uom::ConstZero;

use crate::support::{
    exergy::{DeadState, Environment, ExergyBalance},
    thermo::Saturation,
    units::SpecificEnthalpy,
};

use super::{ComponentError, ProcessWarning, RankineThermoModel, resolve::Resolver};

pub use types::{BoilerInput, BoilerOutlet, BoilerResults};

/// Evaluates a boiler's energy and exergy balances.
///
/// # Errors
///
/// - [`ComponentError::PropertyResolution`] if a state cannot be resolved.
/// - [`ComponentError::UndefinedEfficiency`] if the fuel exergy is zero,
///   for example when no heat is added.
pub fn boiler<F, M>(
    input: &BoilerInput,
    dead_state: &DeadState<F>,
    thermo: &M,
) -> Result<BoilerResults, ComponentError>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    let resolve = Resolver::new(thermo, dead_state);

    let inlet_state =
        resolve.at_temperature_pressure("inlet", input.inlet_temperature, input.inlet_pressure)?;
    let h_in = resolve.enthalpy("inlet", &inlet_state)?;
    let inlet = resolve.point("inlet", input.inlet_pressure, h_in, &inlet_state)?;

    let outlet_state = match input.outlet {
        BoilerOutlet::SaturatedVapor => {
            resolve.saturated("outlet", input.outlet_pressure, Saturation::Vapor)?
        }
        BoilerOutlet::Superheated(temperature) => {
            resolve.at_temperature_pressure("outlet", temperature, input.outlet_pressure)?
        }
    };
    let h_out = resolve.enthalpy("outlet", &outlet_state)?;
    let outlet = resolve.point("outlet", input.outlet_pressure, h_out, &outlet_state)?;

    let heat_ideal = h_out - h_in;
    let heat_supplied = heat_ideal / *input.efficiency.as_ref();
    let heat_loss = heat_supplied - heat_ideal;

    let carnot = dead_state.carnot_factor(outlet.temperature);
    let exergy = ExergyBalance::decompose(
        heat_supplied * carnot,
        outlet.exergy - inlet.exergy,
        heat_loss * carnot,
    )?;

    let mut warnings = Vec::new();
    if heat_ideal <= SpecificEnthalpy::ZERO {
        ProcessWarning::NonPositiveHeatInput { heat: heat_ideal }.report(&mut warnings);
    }

    Ok(BoilerResults {
        inlet,
        outlet,
        heat_ideal,
        heat_supplied,
        heat_loss,
        exergy,
        entropy_generation: dead_state.entropy_generation(exergy.destruction),
        warnings,
    })
}

/// Boiler bound to a property model and a dead state.
#[derive(Debug, Clone)]
pub struct Boiler<F, M> {
    thermo: M,
    dead_state: DeadState<F>,
}

impl<F, M> Boiler<F, M>
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

impl<F, M> Model for Boiler<F, M>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    type Input = BoilerInput;
    type Output = BoilerResults;
    type Error = ComponentError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        boiler(input, &self.dead_state, &self.thermo)
    }
}
