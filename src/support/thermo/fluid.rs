//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted. For [`CoolProp`](crate::support::thermo::model::CoolProp) the
//! name maps to a backend and a fluid string; test models may ignore it.

mod r245fa;
mod water;

pub use r245fa::R245fa;
pub use water::Water;
