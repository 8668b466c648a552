use thiserror::Error;

/// A dead state could not be resolved for the working fluid.
#[derive(Debug, Error)]
#[error("dead state resolution failed: {context}")]
pub struct DeadStateError {
    /// Which property-model operation failed.
    pub context: String,

    /// Underlying thermodynamic model error.
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl DeadStateError {
    pub(super) fn thermo_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            source: Box::new(err),
        }
    }
}

/// An efficiency would require dividing by a zero energy or exergy term.
///
/// This is a degenerate operating point (for example, zero heat input),
/// not a property-model failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("undefined {quantity}: denominator is zero")]
pub struct UndefinedEfficiency {
    /// Name of the efficiency that could not be computed.
    pub quantity: &'static str,
}
