use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::{
    models::rankine::{ProcessWarning, StatePoint},
    support::{
        constraint::{Constrained, UnitIntervalLowerOpen},
        exergy::ExergyBalance,
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

/// Input to the turbine model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineInput {
    pub inlet_pressure: Pressure,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_pressure: Pressure,
    pub isentropic_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
    pub mechanical_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
    pub generator_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
}

/// Results of a turbine evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineResults {
    pub inlet: StatePoint,
    pub outlet: StatePoint,

    /// Ideal specific work `ws = h_in - hs_out`.
    pub work_isentropic: SpecificEnthalpy,

    /// Work extracted from the fluid, `η_s · ws`.
    pub work: SpecificEnthalpy,

    /// Electrical output after mechanical and generator losses.
    pub shaft_work: SpecificEnthalpy,

    /// `shaft_work / (h_in - h_out)`.
    pub energetic_efficiency: Ratio,

    /// Exergy balance with `shaft_work` as product and the mechanical and
    /// generator losses as loss.
    pub exergy: ExergyBalance,

    /// Entropy generation `exD / T0`.
    pub entropy_generation: SpecificEntropy,

    pub warnings: Vec<ProcessWarning>,
}
