//! Working-fluid property provider interface.
//!
//! Component models never compute fluid properties themselves. They resolve
//! states and read properties through the capability traits in
//! [`capability`], which any property backend can implement.

mod error;
mod phase;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use phase::{Quality, Saturation};
pub use state::State;
