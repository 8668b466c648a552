use std::error::Error as StdError;

use thiserror::Error;
use tracing::warn;
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    pressure::kilopascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    exergy::{DeadStateError, UndefinedEfficiency},
    units::SpecificEnthalpy,
};

/// Errors that can occur while evaluating a Rankine component.
///
/// A failed call has no partial result; nothing needs to be rolled back.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComponentError {
    /// The dead state could not be resolved when building a component.
    #[error(transparent)]
    DeadState(#[from] DeadStateError),

    /// The property model could not resolve a state or a property.
    ///
    /// Property lookups are pure, so these are never retried.
    #[error("property resolution failed: {context}")]
    PropertyResolution {
        /// Which query failed, including its inputs.
        context: String,

        /// Underlying thermodynamic model error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// An efficiency has a zero denominator at this operating point.
    #[error(transparent)]
    UndefinedEfficiency(#[from] UndefinedEfficiency),
}

impl ComponentError {
    /// Creates a property resolution error with context.
    pub(super) fn thermo_failed(
        context: impl Into<String>,
        err: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyResolution {
            context: context.into(),
            source: Box::new(err),
        }
    }
}

/// Inputs that are physically contradictory for the selected branch.
///
/// Warnings never abort a calculation. The (possibly unphysical) numbers are
/// still returned so the caller can inspect them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ProcessWarning {
    /// The boiler adds no heat to the fluid (`qh_ideal ≤ 0`).
    #[error("boiler heat input is not positive ({:.3} kJ/kg)", .heat.get::<kilojoule_per_kilogram>())]
    NonPositiveHeatInput { heat: SpecificEnthalpy },

    /// A subcooled condenser outlet is not below the inlet temperature.
    #[error(
        "condenser outlet ({:.2} °C) is not below the inlet ({:.2} °C)",
        .outlet_temperature.get::<degree_celsius>(),
        .inlet_temperature.get::<degree_celsius>()
    )]
    OutletNotSubcooled {
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
    },

    /// The condenser rejects no heat (`qc ≤ 0`).
    #[error("condenser heat rejection is not positive ({:.3} kJ/kg)", .heat.get::<kilojoule_per_kilogram>())]
    NonPositiveHeatRejection { heat: SpecificEnthalpy },

    /// The pump outlet pressure does not exceed its inlet pressure.
    #[error(
        "pump outlet pressure ({:.3} kPa) does not exceed inlet ({:.3} kPa)",
        .outlet.get::<kilopascal>(),
        .inlet.get::<kilopascal>()
    )]
    PressureNotRaised { inlet: Pressure, outlet: Pressure },

    /// The turbine outlet pressure is not below its inlet pressure.
    #[error(
        "turbine outlet pressure ({:.3} kPa) is not below inlet ({:.3} kPa)",
        .outlet.get::<kilopascal>(),
        .inlet.get::<kilopascal>()
    )]
    PressureNotReduced { inlet: Pressure, outlet: Pressure },
}

impl ProcessWarning {
    /// Logs the warning and appends it to `warnings`.
    pub(super) fn report(self, warnings: &mut Vec<Self>) {
        warn!(warning = %self, "inconsistent process specification");
        warnings.push(self);
    }
}
