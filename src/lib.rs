#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Twine Rankine
//!
//! First-law and second-law models of Rankine cycle components for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Each component (boiler, condenser, pump, turbine) resolves its inlet and
//! outlet states through a working-fluid property model, computes the energy
//! transferred as heat or work, and splits the exergy balance into fuel,
//! product, loss, and destruction relative to a dead state.
//!
//! ## Crate layout
//!
//! - [`models`]: Component models, exposed as free functions and as
//!   [`twine_core::Model`] adapters.
//! - [`support`]: Exergy accounting, property model capabilities, numeric
//!   constraints, and unit extensions used by the models.
//!
//! ## Property models
//!
//! Models never compute fluid properties themselves. They require a property
//! model implementing [`models::rankine::RankineThermoModel`]. Enable the
//! `coolprop` feature for a real-fluid implementation backed by `CoolProp`.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
