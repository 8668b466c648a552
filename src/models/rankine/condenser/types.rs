use uom::si::f64::{Pressure, TemperatureInterval, ThermodynamicTemperature};

use crate::{
    models::rankine::{ProcessWarning, StatePoint},
    support::{
        exergy::ExergyBalance,
        thermo::Quality,
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

/// Condenser outlet condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CondenserOutlet {
    /// Saturated liquid at the outlet pressure.
    SaturatedLiquid,

    /// Subcooled liquid at a given outlet temperature.
    ///
    /// Should be below the inlet (saturation) temperature. A warmer outlet
    /// is reported as a [`ProcessWarning`], not rejected.
    Subcooled(ThermodynamicTemperature),
}

/// Input to the condenser model.
///
/// The inlet is a two-phase mixture, typically a turbine exhaust.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondenserInput {
    pub inlet_pressure: Pressure,
    pub inlet_quality: Quality,
    pub outlet_pressure: Pressure,
    pub outlet: CondenserOutlet,
}

/// Results of a condenser evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CondenserResults {
    pub inlet: StatePoint,
    pub outlet: StatePoint,

    /// Heat rejected by the fluid, `h_in - h_out`.
    pub heat_rejected: SpecificEnthalpy,

    /// Inlet temperature minus outlet temperature.
    pub temperature_drop: TemperatureInterval,

    /// Exergy balance with zero product and zero efficiency.
    pub exergy: ExergyBalance,

    /// Entropy generation `exD / T0`.
    pub entropy_generation: SpecificEntropy,

    pub warnings: Vec<ProcessWarning>,
}
