//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by the system they belong to. [`rankine`] holds the
//! four unit operations of a steam (or organic) Rankine cycle.
//!
//! # Model structure
//!
//! Every model is a free function that does the actual computation, plus a
//! small adapter struct that owns a property model and a dead state and
//! implements [`twine_core::Model`] by delegating to that function.
//! Components never call each other; each one is independently invokable.

pub mod rankine;
