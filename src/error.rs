use thiserror::Error;

/// Errors raised when a call is made with invalid arguments.
///
/// The matching engine itself is total over any pair of sequences, so every
/// variant here describes a caller mistake that is detected before any
/// matching work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("n must be > 0")]
    InvalidMaxMatches,

    #[error("cutoff must be in [0.0, 1.0]: {0}")]
    InvalidCutoff(f32),

    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidOptionValue { option: String, value: String },
}

impl Error {
    /// Returns `true` if this is an invalid argument error.
    ///
    /// This is currently the case for all errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidMaxMatches
                | Error::InvalidCutoff(_)
                | Error::UnknownOption(_)
                | Error::InvalidOptionValue { .. }
        )
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(Error::InvalidMaxMatches.to_string(), "n must be > 0");
    assert_eq!(
        Error::InvalidCutoff(1.5).to_string(),
        "cutoff must be in [0.0, 1.0]: 1.5"
    );
    assert_eq!(
        Error::UnknownOption("junk".into()).to_string(),
        "unrecognized option 'junk'"
    );
    assert!(Error::InvalidOptionValue {
        option: "n".into(),
        value: "x".into(),
    }
    .is_invalid_argument());
}
