//! String converters applied to enum tokens on the wire
//!
//! A converter sits between the raw JSON string and the value an enum
//! wraps. The default is the identity; alternate wire encodings are
//! substituted by injecting a different converter into an
//! [`EnumCodec`](crate::codec::EnumCodec).

use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Errors reported by a [`StringConverter`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The token is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(String),

    /// The decoded bytes are not UTF-8
    #[error("decoded payload is not valid UTF-8")]
    NotUtf8,

    /// Failure reported by a user-supplied converter
    #[error("{0}")]
    Custom(String),
}

impl ConvertError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Interprets the string content of a JSON token
pub trait StringConverter: Send + Sync {
    /// Convert the unescaped wire string into the value to wrap
    fn decode(&self, raw: &str) -> Result<String, ConvertError>;

    /// Convert a wrapped value back into its wire string
    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(value)
    }
}

/// Passes strings through untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityConverter;

impl StringConverter for IdentityConverter {
    fn decode(&self, raw: &str) -> Result<String, ConvertError> {
        Ok(raw.to_string())
    }
}

/// Strips leading and trailing whitespace on decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimConverter;

impl StringConverter for TrimConverter {
    fn decode(&self, raw: &str) -> Result<String, ConvertError> {
        Ok(raw.trim().to_string())
    }
}

/// Standard base64 on the wire, plain UTF-8 in memory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Converter;

impl StringConverter for Base64Converter {
    fn decode(&self, raw: &str) -> Result<String, ConvertError> {
        let bytes = STANDARD
            .decode(raw)
            .map_err(|e| ConvertError::Base64(e.to_string()))?;
        String::from_utf8(bytes).map_err(|_| ConvertError::NotUtf8)
    }

    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        Cow::Owned(STANDARD.encode(value))
    }
}

impl<F> StringConverter for F
where
    F: Fn(&str) -> Result<String, ConvertError> + Send + Sync,
{
    fn decode(&self, raw: &str) -> Result<String, ConvertError> {
        self(raw)
    }
}
