//! Pump model.
//!
//! Raises saturated liquid to the outlet pressure with an isentropic
//! efficiency. All work input is fuel exergy and nothing is lost to the
//! surroundings:
//!
//! ```text
//! exf = w
//! exp = ex_out − ex_in
//! exL = 0
//! ```
//!
//! Near `η_s = 1` the raw loss and destruction can come out slightly negative
//! from property-model rounding. It is floored at zero with an efficiency of
//! one, and [`PumpResults::clamped`] is set.

mod types;

use tracing::debug;
use twine_core::Model;
use uom::{
    ConstZero,
    si::{available_energy::joule_per_kilogram, f64::Ratio, ratio::ratio},
};

use crate::support::{
    exergy::{DeadState, Environment, ExergyBalance, UndefinedEfficiency},
    thermo::Saturation,
    units::{SpecificEnthalpy, SpecificExergy},
};

use super::{ComponentError, ProcessWarning, RankineThermoModel, resolve::Resolver};

pub use types::{PumpInput, PumpResults};

/// Evaluates a pump's energy and exergy balances.
///
/// # Errors
///
/// - [`ComponentError::PropertyResolution`] if a state cannot be resolved.
/// - [`ComponentError::UndefinedEfficiency`] if the pump does no work.
pub fn pump<F, M>(
    input: &PumpInput,
    dead_state: &DeadState<F>,
    thermo: &M,
) -> Result<PumpResults, ComponentError>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    let resolve = Resolver::new(thermo, dead_state);
    let p_in = input.inlet_pressure;
    let p_out = input.outlet_pressure;

    let inlet_state = resolve.saturated("inlet", p_in, Saturation::Liquid)?;
    let h_in = resolve.enthalpy("inlet", &inlet_state)?;
    let s_in = resolve.entropy("inlet", &inlet_state)?;
    let inlet = resolve.point("inlet", p_in, h_in, &inlet_state)?;

    let ideal = resolve.at_pressure_entropy("isentropic outlet", p_out, s_in)?;
    let ideal = resolve.settle("isentropic outlet", &ideal, p_out)?;
    let work_isentropic = resolve.enthalpy("isentropic outlet", &ideal)? - h_in;

    let work = work_isentropic / *input.isentropic_efficiency.as_ref();
    let h_out = h_in + work;
    let found = resolve.at_pressure_enthalpy("outlet", p_out, h_out)?;
    let outlet_state = resolve.settle("outlet", &found, p_out)?;
    let outlet = resolve.point("outlet", p_out, h_out, &outlet_state)?;

    if work == SpecificEnthalpy::ZERO {
        return Err(UndefinedEfficiency {
            quantity: "pump energetic efficiency",
        }
        .into());
    }
    let energetic_efficiency = work_isentropic / work;

    let raw = ExergyBalance::decompose(work, outlet.exergy - inlet.exergy, SpecificExergy::ZERO)?;
    let clamped = raw.loss_and_destruction < SpecificExergy::ZERO;
    let exergy = if clamped { floor(raw) } else { raw };

    let mut warnings = Vec::new();
    if p_out <= p_in {
        ProcessWarning::PressureNotRaised {
            inlet: p_in,
            outlet: p_out,
        }
        .report(&mut warnings);
    }

    Ok(PumpResults {
        inlet,
        outlet,
        work_isentropic,
        work,
        energetic_efficiency,
        exergy,
        clamped,
        entropy_generation: dead_state.entropy_generation(exergy.destruction),
        warnings,
    })
}

/// Floors a negative loss and destruction at zero with unit efficiency.
fn floor(raw: ExergyBalance) -> ExergyBalance {
    debug!(
        ex_ld_j_per_kg = raw.loss_and_destruction.get::<joule_per_kilogram>(),
        eps = raw.efficiency.get::<ratio>(),
        "pump exergy loss and destruction is negative, flooring at zero"
    );
    ExergyBalance {
        loss_and_destruction: SpecificExergy::ZERO,
        destruction: SpecificExergy::ZERO,
        efficiency: Ratio::new::<ratio>(1.0),
        ..raw
    }
}

/// Pump bound to a property model and a dead state.
#[derive(Debug, Clone)]
pub struct Pump<F, M> {
    thermo: M,
    dead_state: DeadState<F>,
}

impl<F, M> Pump<F, M>
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

impl<F, M> Model for Pump<F, M>
where
    F: Clone,
    M: RankineThermoModel<F>,
{
    type Input = PumpInput;
    type Output = PumpResults;
    type Error = ComponentError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        pump(input, &self.dead_state, &self.thermo)
    }
}
