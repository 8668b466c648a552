//! Exergy accounting relative to a reference environment.
//!
//! An [`Environment`] fixes the dead-state temperature `T0` and pressure `p0`.
//! Resolving it for a fluid gives a [`DeadState`] holding `h0` and `s0`, from
//! which the specific flow exergy of any state follows:
//!
//! ```text
//! ex = (h - h0) - T0·(s - s0)
//! ```
//!
//! Each component then names its own fuel exergy, product exergy, and ambient
//! loss, and [`ExergyBalance`] splits the difference into loss and
//! destruction.

mod error;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Pressure, Ratio, ThermodynamicTemperature},
        pressure::kilopascal,
        ratio::ratio,
        thermodynamic_temperature::{degree_celsius, kelvin},
    },
};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    thermo::capability::{HasEnthalpy, HasEntropy, StateFrom, ThermoModel},
    units::{SpecificEnthalpy, SpecificEntropy, SpecificExergy},
};

pub use error::{DeadStateError, UndefinedEfficiency};

/// Reference environment for exergy calculations.
///
/// Defaults to 25 °C and 100 kPa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            pressure: Pressure::new::<kilopascal>(100.0),
        }
    }
}

impl Environment {
    /// Creates an environment at the given dead-state temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the absolute temperature or the
    /// pressure is not strictly positive.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, ConstraintError> {
        StrictlyPositive::new(temperature.get::<kelvin>())?;
        StrictlyPositive::new(pressure)?;
        Ok(Self {
            temperature,
            pressure,
        })
    }

    /// Dead-state temperature `T0`.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Dead-state pressure `p0`.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Resolves `h0` and `s0` of `fluid` at this environment.
    ///
    /// # Errors
    ///
    /// Returns [`DeadStateError`] if the property model cannot resolve the
    /// fluid at `(T0, p0)`.
    pub fn dead_state<F, M>(&self, fluid: F, thermo: &M) -> Result<DeadState<F>, DeadStateError>
    where
        F: Clone,
        M: ThermoModel<Fluid = F>
            + HasEnthalpy
            + HasEntropy
            + StateFrom<(F, ThermodynamicTemperature, Pressure)>,
    {
        let state = thermo
            .state_from((fluid.clone(), self.temperature, self.pressure))
            .map_err(|err| {
                DeadStateError::thermo_failed(
                    format!(
                        "state_from(T0={:.2} °C, p0={:.3} kPa)",
                        self.temperature.get::<degree_celsius>(),
                        self.pressure.get::<kilopascal>()
                    ),
                    err,
                )
            })?;
        let enthalpy = thermo
            .enthalpy(&state)
            .map_err(|err| DeadStateError::thermo_failed("enthalpy at dead state", err))?;
        let entropy = thermo
            .entropy(&state)
            .map_err(|err| DeadStateError::thermo_failed("entropy at dead state", err))?;

        debug!(
            t0_k = self.temperature.get::<kelvin>(),
            p0_kpa = self.pressure.get::<kilopascal>(),
            "resolved dead state"
        );

        Ok(DeadState {
            environment: *self,
            enthalpy,
            entropy,
            fluid,
        })
    }
}

/// An [`Environment`] resolved for one working fluid.
///
/// Immutable once created; component models borrow it for every call.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadState<F> {
    environment: Environment,
    enthalpy: SpecificEnthalpy,
    entropy: SpecificEntropy,
    fluid: F,
}

impl<F> DeadState<F> {
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Dead-state enthalpy `h0`.
    #[must_use]
    pub fn enthalpy(&self) -> SpecificEnthalpy {
        self.enthalpy
    }

    /// Dead-state entropy `s0`.
    #[must_use]
    pub fn entropy(&self) -> SpecificEntropy {
        self.entropy
    }

    #[must_use]
    pub fn fluid(&self) -> &F {
        &self.fluid
    }

    /// Specific flow exergy `(h - h0) - T0·(s - s0)` of a resolved state.
    #[must_use]
    pub fn specific_exergy(
        &self,
        enthalpy: SpecificEnthalpy,
        entropy: SpecificEntropy,
    ) -> SpecificExergy {
        (enthalpy - self.enthalpy) - (entropy - self.entropy) * self.environment.temperature
    }

    /// Carnot factor `1 - T0/T` of heat exchanged at temperature `T`.
    #[must_use]
    pub fn carnot_factor(&self, temperature: ThermodynamicTemperature) -> Ratio {
        Ratio::new::<ratio>(1.0) - self.environment.temperature / temperature
    }

    /// Entropy generation `exD / T0` equivalent to an exergy destruction.
    #[must_use]
    pub fn entropy_generation(&self, destruction: SpecificExergy) -> SpecificEntropy {
        destruction / self.environment.temperature
    }
}

/// Decomposition of a component's exergy balance.
///
/// Always `loss_and_destruction = fuel - product` and
/// `destruction = loss_and_destruction - loss`, except where a component
/// documents an explicit floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExergyBalance {
    /// Fuel exergy `exf`, the resource consumed.
    pub fuel: SpecificExergy,
    /// Product exergy `exp`, the useful output.
    pub product: SpecificExergy,
    /// Total loss and destruction `exLD`.
    pub loss_and_destruction: SpecificExergy,
    /// Exergy carried to the environment, `exL`.
    pub loss: SpecificExergy,
    /// Exergy destroyed inside the component, `exD`.
    pub destruction: SpecificExergy,
    /// Exergetic efficiency `eps = exp / exf`.
    pub efficiency: Ratio,
}

impl ExergyBalance {
    /// Splits a balance given fuel, product, and ambient loss.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedEfficiency`] if `fuel` is zero.
    pub fn decompose(
        fuel: SpecificExergy,
        product: SpecificExergy,
        loss: SpecificExergy,
    ) -> Result<Self, UndefinedEfficiency> {
        if fuel == SpecificExergy::ZERO {
            return Err(UndefinedEfficiency {
                quantity: "exergetic efficiency",
            });
        }

        let loss_and_destruction = fuel - product;
        Ok(Self {
            fuel,
            product,
            loss_and_destruction,
            loss,
            destruction: loss_and_destruction - loss,
            efficiency: product / fuel,
        })
    }

    /// Balance of a component whose whole exergy drop is rejected.
    ///
    /// The product is zero by definition, so the efficiency is zero and
    /// nothing is divided.
    #[must_use]
    pub fn rejected(fuel: SpecificExergy, loss: SpecificExergy) -> Self {
        Self {
            fuel,
            product: SpecificExergy::ZERO,
            loss_and_destruction: fuel,
            loss,
            destruction: fuel - loss,
            efficiency: Ratio::ZERO,
        }
    }
}
