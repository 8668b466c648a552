use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::{
    models::rankine::{ProcessWarning, StatePoint},
    support::{
        constraint::{Constrained, UnitIntervalLowerOpen},
        exergy::ExergyBalance,
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

/// Boiler outlet condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoilerOutlet {
    /// Saturated vapor at the outlet pressure.
    ///
    /// The outlet temperature is the saturation temperature.
    SaturatedVapor,

    /// Vapor at a given outlet temperature.
    ///
    /// The caller is responsible for choosing a temperature that is actually
    /// superheated at the outlet pressure.
    Superheated(ThermodynamicTemperature),
}

/// Input to the boiler model.
///
/// The inlet is expected to be subcooled liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerInput {
    pub inlet_pressure: Pressure,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_pressure: Pressure,
    pub outlet: BoilerOutlet,

    /// Thermal efficiency, the fraction of supplied heat that reaches the fluid.
    pub efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
}

/// Results of a boiler evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoilerResults {
    pub inlet: StatePoint,
    pub outlet: StatePoint,

    /// Heat absorbed by the fluid, `h_out - h_in`.
    pub heat_ideal: SpecificEnthalpy,

    /// Heat supplied to the boiler, `heat_ideal / efficiency`.
    pub heat_supplied: SpecificEnthalpy,

    /// Heat lost to the surroundings, `heat_supplied - heat_ideal`.
    pub heat_loss: SpecificEnthalpy,

    pub exergy: ExergyBalance,

    /// Entropy generation `exD / T0`.
    pub entropy_generation: SpecificEntropy,

    pub warnings: Vec<ProcessWarning>,
}
