use thiserror::Error;

/// Errors surfaced by the Nines core and engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NinesError {
    /// A hole's score list does not have one entry per player.
    #[error("expected {expected} scores, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for NinesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for NinesError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<rmp_serde::encode::Error> for NinesError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<std::io::Error> for NinesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let err = NinesError::InvalidInput {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 4 scores, got 3");
    }

    #[test]
    fn json_error_maps_to_decode() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(matches!(NinesError::from(err), NinesError::Decode(_)));
    }
}
