//! Message shape selection for one run.

use std::str::FromStr;

use thiserror::Error;

/// The message shape measured by one run; chosen once and fixed for the whole
/// batch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Variant {
    /// The string payload is a direct field of the message.
    Flat,
    /// The string payload lives inside one level of nested sub-record.
    Wrapper,
}

/// The rejected token was not one of the recognized shape names.
#[derive(Debug, Error)]
#[error("unknown message shape: '{token}' (valid options are: flat, wrapper)")]
pub struct UnknownVariantError {
    token: String,
}

impl FromStr for Variant {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "wrapper" => Ok(Self::Wrapper),
            _ => Err(UnknownVariantError {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn recognized_tokens_parse() {
        assert_eq!("flat".parse::<Variant>().expect("valid token"), Variant::Flat);
        assert_eq!(
            "wrapper".parse::<Variant>().expect("valid token"),
            Variant::Wrapper
        );
    }

    #[test]
    fn unknown_token_is_rejected_and_named() {
        let error = "foo".parse::<Variant>().expect_err("invalid token");

        assert!(error.to_string().contains("'foo'"));
    }

    #[test]
    fn tokens_are_exact_literals() {
        assert!("Flat".parse::<Variant>().is_err());
        assert!("WRAPPER".parse::<Variant>().is_err());
        assert!("".parse::<Variant>().is_err());
        assert!(" flat".parse::<Variant>().is_err());
    }
}
