//! Codec - JSON encoding and decoding of open enum values
//!
//! Decoding accepts exactly one JSON string token and never checks the
//! content against the family's registry. Encoding always succeeds.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserializer;
use serde::de::{self, Visitor};
use thiserror::Error;

use crate::converter::{ConvertError, IdentityConverter, StringConverter};
use crate::enum_value::OpenEnum;

/// Longest token excerpt carried in an error message
const TOKEN_PREVIEW_LEN: usize = 64;

/// Decode error for open enum values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The input is not a single JSON string token
    #[error("Invalid {family} token `{token}`: {message}")]
    Malformed {
        family: &'static str,
        token: String,
        message: String,
    },

    /// The string converter rejected the token
    #[error("Cannot convert {family} value `{token}`: {source}")]
    Convert {
        family: &'static str,
        token: String,
        #[source]
        source: ConvertError,
    },

    /// A decode error scoped to a named field
    #[error("Field '{field}': {inner}")]
    Field {
        field: String,
        inner: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attach the name of the field being decoded
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            inner: Box::new(self),
        }
    }

    /// Family of the enum that failed to decode
    pub fn family(&self) -> &'static str {
        match self {
            Self::Malformed { family, .. } | Self::Convert { family, .. } => *family,
            Self::Field { inner, .. } => inner.family(),
        }
    }

    /// Excerpt of the offending token
    pub fn token(&self) -> &str {
        match self {
            Self::Malformed { token, .. } | Self::Convert { token, .. } => token,
            Self::Field { inner, .. } => inner.token(),
        }
    }
}

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Encoder/decoder for open enum values with an injected string converter
#[derive(Debug, Clone, Default)]
pub struct EnumCodec<C = IdentityConverter> {
    converter: C,
}

impl EnumCodec {
    /// Codec with the identity converter
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: StringConverter> EnumCodec<C> {
    pub fn with_converter(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Encode a value as a JSON string token
    pub fn encode<E: OpenEnum>(&self, value: &E) -> Vec<u8> {
        let wire = self.converter.encode(value.as_str());
        serde_json::Value::String(wire.into_owned())
            .to_string()
            .into_bytes()
    }

    /// Decode a JSON string token into a value of family `E`
    pub fn decode<E: OpenEnum>(&self, bytes: &[u8]) -> DecodeResult<E> {
        let raw: String = serde_json::from_slice(bytes).map_err(|e| {
            let token = preview(&String::from_utf8_lossy(bytes));
            log::debug!("Rejected {} token `{}`: {}", E::FAMILY, token, e);
            DecodeError::Malformed {
                family: E::FAMILY,
                token,
                message: e.to_string(),
            }
        })?;

        let value = self.converter.decode(&raw).map_err(|source| {
            log::debug!("Converter rejected {} value `{}`: {}", E::FAMILY, raw, source);
            DecodeError::Convert {
                family: E::FAMILY,
                token: preview(&raw),
                source,
            }
        })?;

        Ok(E::from_value(value))
    }

    /// Decode the token of a named field
    pub fn decode_field<E: OpenEnum>(&self, field: &str, bytes: &[u8]) -> DecodeResult<E> {
        self.decode(bytes).map_err(|e| e.in_field(field))
    }

    /// Deserialize a value through serde using this codec's converter
    pub fn deserialize<'de, D, E>(&self, deserializer: D) -> Result<E, D::Error>
    where
        D: Deserializer<'de>,
        E: OpenEnum,
    {
        deserialize_open_enum(deserializer, &self.converter)
    }
}

/// Serde decode hook shared by every open enum family
pub fn deserialize_open_enum<'de, D, E, C>(deserializer: D, converter: &C) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: OpenEnum,
    C: StringConverter + ?Sized,
{
    deserializer.deserialize_str(OpenEnumVisitor {
        converter,
        marker: PhantomData,
    })
}

struct OpenEnumVisitor<'a, E, C: ?Sized> {
    converter: &'a C,
    marker: PhantomData<fn() -> E>,
}

impl<'de, E, C> Visitor<'de> for OpenEnumVisitor<'_, E, C>
where
    E: OpenEnum,
    C: StringConverter + ?Sized,
{
    type Value = E;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a JSON string for {}", E::FAMILY)
    }

    fn visit_str<Er>(self, v: &str) -> Result<E, Er>
    where
        Er: de::Error,
    {
        self.converter.decode(v).map(E::from_value).map_err(|e| {
            Er::custom(format_args!(
                "cannot convert {} value `{}`: {}",
                E::FAMILY,
                preview(v),
                e
            ))
        })
    }
}

fn preview(token: &str) -> String {
    if token.chars().count() > TOKEN_PREVIEW_LEN {
        let head: String = token.chars().take(TOKEN_PREVIEW_LEN).collect();
        format!("{}...", head)
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{Base64Converter, TrimConverter};
    use serde::{Deserialize, Serialize};

    crate::open_enum! {
        pub struct CredentialStatus {
            ACTIVE = "active",
            INACTIVE = "inactive",
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct UpdateOption {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<CredentialStatus>,
        description: String,
    }

    fn round_trip(s: &str) -> CredentialStatus {
        let codec = EnumCodec::new();
        let bytes = codec.encode(&CredentialStatus::new(s.to_string()));
        codec.decode(&bytes).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_any_string() {
        for s in [
            "active",
            "",
            "with \"quotes\"",
            "back\\slash",
            "line\nbreak\ttab",
            "\u{1}control",
            "unicode 访问密钥 ✓",
            "\"",
        ] {
            assert_eq!(round_trip(s).as_str(), s, "round trip of {:?}", s);
        }
    }

    #[test]
    fn test_encode_is_a_json_string() {
        let codec = EnumCodec::new();
        assert_eq!(codec.encode(&CredentialStatus::ACTIVE), b"\"active\"");
        assert_eq!(
            codec.encode(&CredentialStatus::new("a\"b")),
            b"\"a\\\"b\"".to_vec()
        );
    }

    #[test]
    fn test_encode_is_idempotent() {
        let codec = EnumCodec::new();
        let value = CredentialStatus::new("some \"value\"");
        assert_eq!(codec.encode(&value), codec.encode(&value));
    }

    #[test]
    fn test_unknown_value_decodes() {
        let codec = EnumCodec::new();
        let value: CredentialStatus = codec
            .decode(b"\"some-future-value-not-in-registry\"")
            .unwrap();
        assert_eq!(value.as_str(), "some-future-value-not-in-registry");
        assert_ne!(value, CredentialStatus::ACTIVE);
        assert_ne!(value, CredentialStatus::INACTIVE);
        assert!(!value.is_known());
    }

    #[test]
    fn test_registry_constants_are_stable_and_distinct() {
        let registry = CredentialStatus::registry();
        assert_eq!(registry.get("ACTIVE").unwrap().as_str(), "active");
        assert_eq!(registry.get("INACTIVE").unwrap().as_str(), "inactive");
        assert_ne!(registry.get("ACTIVE"), registry.get("INACTIVE"));
        assert_eq!(registry.get("ACTIVE"), Some(&CredentialStatus::ACTIVE));
    }

    #[test]
    fn test_non_string_tokens_fail() {
        let codec = EnumCodec::new();
        for token in ["123", "{}", "[]", "null", "true", "\"unterminated", "active", ""] {
            let result: DecodeResult<CredentialStatus> = codec.decode(token.as_bytes());
            match result {
                Err(DecodeError::Malformed { family, token: t, .. }) => {
                    assert_eq!(family, "CredentialStatus");
                    assert_eq!(t, token);
                }
                other => panic!("expected Malformed for {:?}, got {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_trailing_tokens_fail() {
        let codec = EnumCodec::new();
        let result: DecodeResult<CredentialStatus> = codec.decode(b"\"a\" \"b\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_not_part_of_token() {
        let codec = EnumCodec::new();
        let value: CredentialStatus = codec.decode(b"  \"active\"\n").unwrap();
        assert_eq!(value, CredentialStatus::ACTIVE);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let codec = EnumCodec::new();
        let a1: CredentialStatus = codec.decode(b"\"active\"").unwrap();
        let a2: CredentialStatus = codec.decode(b"\"active\"").unwrap();
        let upper: CredentialStatus = codec.decode(b"\"Active\"").unwrap();
        assert_eq!(a1, a2);
        assert_ne!(a1, upper);
        assert!(!upper.is_known());
    }

    #[test]
    fn test_decode_field_names_field_and_token() {
        let codec = EnumCodec::new();
        let err = codec
            .decode_field::<CredentialStatus>("status", b"123")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Field 'status'"), "{}", message);
        assert!(message.contains("CredentialStatus"), "{}", message);
        assert!(message.contains("`123`"), "{}", message);
        assert_eq!(err.family(), "CredentialStatus");
        assert_eq!(err.token(), "123");
    }

    #[test]
    fn test_long_tokens_are_truncated_in_errors() {
        let codec = EnumCodec::new();
        let token = "9".repeat(200);
        let err = codec
            .decode::<CredentialStatus>(token.as_bytes())
            .unwrap_err();
        assert_eq!(err.token().len(), TOKEN_PREVIEW_LEN + 3);
        assert!(err.token().ends_with("..."));
    }

    #[test]
    fn test_injected_converter_is_used() {
        let codec = EnumCodec::with_converter(TrimConverter);
        let value: CredentialStatus = codec.decode(b"\"  inactive \"").unwrap();
        assert_eq!(value, CredentialStatus::INACTIVE);
    }

    #[test]
    fn test_base64_codec_round_trips() {
        let codec = EnumCodec::with_converter(Base64Converter);
        let bytes = codec.encode(&CredentialStatus::ACTIVE);
        assert_eq!(bytes, b"\"YWN0aXZl\"");
        let value: CredentialStatus = codec.decode(&bytes).unwrap();
        assert_eq!(value, CredentialStatus::ACTIVE);
    }

    #[test]
    fn test_converter_failure_is_reported() {
        let codec = EnumCodec::with_converter(|raw: &str| -> Result<String, ConvertError> {
            Err(ConvertError::custom(format!("refused {}", raw)))
        });
        let err = codec.decode::<CredentialStatus>(b"\"active\"").unwrap_err();
        assert_eq!(
            err,
            DecodeError::Convert {
                family: "CredentialStatus",
                token: "active".to_string(),
                source: ConvertError::Custom("refused active".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "Cannot convert CredentialStatus value `active`: refused active"
        );
    }

    #[test]
    fn test_serde_field_round_trip() {
        let option = UpdateOption {
            status: Some(CredentialStatus::INACTIVE),
            description: "rotated".to_string(),
        };
        let json = serde_json::to_string(&option).unwrap();
        assert_eq!(json, r#"{"status":"inactive","description":"rotated"}"#);
        let back: UpdateOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
    }

    #[test]
    fn test_serde_rejects_non_string_field() {
        let err = serde_json::from_str::<UpdateOption>(r#"{"status":123,"description":""}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("integer `123`"), "{}", err);
        assert!(err.contains("a JSON string for CredentialStatus"), "{}", err);
    }

    #[test]
    fn test_serde_hook_with_injected_converter() {
        let codec = EnumCodec::with_converter(TrimConverter);
        let mut de = serde_json::Deserializer::from_str("\" active \"");
        let value: CredentialStatus = codec.deserialize(&mut de).unwrap();
        assert_eq!(value, CredentialStatus::ACTIVE);
    }
}
