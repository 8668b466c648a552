use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolProp`](super::CoolProp) model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

type Classifier = fn(String) -> PropertyError;

/// Message fragments checked in order; the first match wins.
const MARKERS: &[(&[&str], Classifier)] = &[
    (&["not defined", "not implemented for"], |context| {
        PropertyError::Undefined { context }
    }),
    (
        &[
            "not in range",
            "out of range",
            "outside the range of validity",
            "must be in range",
            "must be between",
            "quality must be",
            "above the critical",
        ],
        |context| PropertyError::OutOfDomain { context },
    ),
    (
        &["not a valid number", "invalid state", "invalid number"],
        |context| PropertyError::InvalidState { context },
    ),
];

/// Classifies an `rfluids` error message as a [`PropertyError`].
///
/// CoolProp reports failures as free text, so this is best effort.
/// Unrecognized messages become [`PropertyError::Calculation`] with the
/// original text preserved.
fn classify(message: &str) -> PropertyError {
    let lowered = message.to_lowercase();
    let context = message.to_string();

    match MARKERS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
    {
        Some((_, build)) => build(context),
        None => PropertyError::Calculation { context },
    }
}
