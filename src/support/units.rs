//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, pressure,
//! specific energy). Callers construct quantities in whatever unit they like
//! and read results back the same way, so no unit configuration is ever
//! shared between calls.
//!
//! ## Specific quantities
//!
//! [`uom`] has no named quantities for specific enthalpy, entropy, or exergy.
//! The aliases here give those dimensions readable names. Because
//! [`SpecificEnthalpy`] and [`SpecificExergy`] share the dimension of
//! [`AvailableEnergy`](uom::si::f64::AvailableEnergy), use the
//! `uom::si::available_energy` units with them:
//!
//! ```
//! use twine_rankine::support::units::SpecificExergy;
//! use uom::si::available_energy::{joule_per_kilogram, kilojoule_per_kilogram};
//!
//! let ex = SpecificExergy::new::<kilojoule_per_kilogram>(1.5);
//! assert_eq!(ex.get::<joule_per_kilogram>(), 1500.0);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_rankine::support::units::TemperatureDifference;
//!
//! let saturation = ThermodynamicTemperature::new::<degree_celsius>(45.8);
//! let outlet = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let subcooling = saturation.minus(outlet);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificExergy};
pub use temperature_difference::TemperatureDifference;
