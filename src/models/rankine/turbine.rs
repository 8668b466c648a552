//! Turbine model.
//!
//! Expands the working fluid from a known inlet state to the outlet pressure.
//! Work extracted from the fluid passes through mechanical and generator
//! losses before it becomes electrical output:
//!
//! ```text
//! exf = ex_in − ex_out
//! exp = wa            (wa = η_mech·η_gen·w)
//! exL = w − wa
//! ```

mod types;

use twine_core::Model;
use uom::ConstZero;

use crate::support::{
    exergy::{DeadState, Environment, ExergyBalance, UndefinedEfficiency},
    units::SpecificEnthalpy,
};

use super::{ComponentError, ProcessWarning, RankineThermoModel, resolve::Resolver};

pub use types::{TurbineInput, TurbineResults};

/// Evaluates a turbine's energy and exergy balances.
///
/// The isentropic and actual outlets are found from `(p, s)` and `(p, h)`
/// and then re-resolved, so a wet exhaust carries its quality.
///
/// # Errors
///
/// - [`ComponentError::PropertyResolution`] if a state cannot be resolved.
/// - [`ComponentError::UndefinedEfficiency`] if the enthalpy or exergy drop
///   across the turbine is exactly zero. With `p_out == p_in` a property
///   model's round-off usually leaves a tiny nonzero work, and the call
///   returns numbers along with a [`ProcessWarning::PressureNotReduced`].
pub fn turbine<F, M>(
    input: &TurbineInput,
    dead_state: &DeadState<F>,
    thermo: &M,
) -> Result<TurbineResults, ComponentError>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    let resolve = Resolver::new(thermo, dead_state);
    let p_in = input.inlet_pressure;
    let p_out = input.outlet_pressure;

    let inlet_state = resolve.at_temperature_pressure("inlet", input.inlet_temperature, p_in)?;
    let h_in = resolve.enthalpy("inlet", &inlet_state)?;
    let s_in = resolve.entropy("inlet", &inlet_state)?;
    let inlet = resolve.point("inlet", p_in, h_in, &inlet_state)?;

    let ideal = resolve.at_pressure_entropy("isentropic outlet", p_out, s_in)?;
    let ideal = resolve.settle("isentropic outlet", &ideal, p_out)?;
    let work_isentropic = h_in - resolve.enthalpy("isentropic outlet", &ideal)?;

    let work = work_isentropic * *input.isentropic_efficiency.as_ref();
    let h_out = h_in - work;
    let found = resolve.at_pressure_enthalpy("outlet", p_out, h_out)?;
    let outlet_state = resolve.settle("outlet", &found, p_out)?;
    let outlet = resolve.point("outlet", p_out, h_out, &outlet_state)?;

    let shaft_work =
        work * *input.mechanical_efficiency.as_ref() * *input.generator_efficiency.as_ref();

    let enthalpy_drop = h_in - h_out;
    if enthalpy_drop == SpecificEnthalpy::ZERO {
        return Err(UndefinedEfficiency {
            quantity: "turbine energetic efficiency",
        }
        .into());
    }
    let energetic_efficiency = shaft_work / enthalpy_drop;

    let exergy =
        ExergyBalance::decompose(inlet.exergy - outlet.exergy, shaft_work, work - shaft_work)?;

    let mut warnings = Vec::new();
    if p_out >= p_in {
        ProcessWarning::PressureNotReduced {
            inlet: p_in,
            outlet: p_out,
        }
        .report(&mut warnings);
    }

    Ok(TurbineResults {
        inlet,
        outlet,
        work_isentropic,
        work,
        shaft_work,
        energetic_efficiency,
        exergy,
        entropy_generation: dead_state.entropy_generation(exergy.destruction),
        warnings,
    })
}

/// Turbine bound to a property model and a dead state.
#[derive(Debug, Clone)]
pub struct Turbine<F, M> {
    thermo: M,
    dead_state: DeadState<F>,
}

impl<F, M> Turbine<F, M>
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

impl<F, M> Model for Turbine<F, M>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    type Input = TurbineInput;
    type Output = TurbineResults;
    type Error = ComponentError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        turbine(input, &self.dead_state, &self.thermo)
    }
}
