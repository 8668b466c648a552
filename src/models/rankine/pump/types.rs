use uom::si::f64::{Pressure, Ratio};

use crate::{
    models::rankine::{ProcessWarning, StatePoint},
    support::{
        constraint::{Constrained, UnitIntervalLowerOpen},
        exergy::ExergyBalance,
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

/// Input to the pump model.
///
/// The inlet is always saturated liquid at `inlet_pressure`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpInput {
    pub inlet_pressure: Pressure,
    pub outlet_pressure: Pressure,
    pub isentropic_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
}

/// Results of a pump evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpResults {
    pub inlet: StatePoint,
    pub outlet: StatePoint,

    /// Ideal specific work `ws = hs_out - h_in`.
    pub work_isentropic: SpecificEnthalpy,

    /// Actual specific work `w = ws / η_s`, all of it fuel exergy.
    pub work: SpecificEnthalpy,

    /// First-law efficiency `ws / w`.
    pub energetic_efficiency: Ratio,

    /// Exergy balance with no ambient loss.
    ///
    /// When `clamped` is set, `loss_and_destruction` and `destruction` are
    /// zero and `efficiency` is one.
    pub exergy: ExergyBalance,

    /// The raw balance gave a negative loss and destruction and was floored.
    pub clamped: bool,

    /// Entropy generation `exD / T0`.
    pub entropy_generation: SpecificEntropy,

    pub warnings: Vec<ProcessWarning>,
}
