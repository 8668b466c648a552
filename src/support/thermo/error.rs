use thiserror::Error;

/// A property model could not resolve a state or read a property from it.
///
/// Every variant carries a human-readable `context` naming the query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property does not exist at this state, such as saturation above
    /// the critical pressure.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// Inputs lie outside the range the model covers.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The state itself is unphysical (non-positive temperature or density).
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// A flash or other iterative calculation did not converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
