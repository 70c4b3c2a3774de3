//! Helpers shared by the generated SDK models

use std::fmt;

use serde::Serialize;

/// Write a model as `"<name> <json>"`
///
/// Falls back to `"<name> struct{}"` when the model cannot be serialized.
pub fn describe<T: Serialize + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    model: &T,
) -> fmt::Result {
    match serde_json::to_string(model) {
        Ok(json) => write!(f, "{} {}", name, json),
        Err(_) => write!(f, "{} struct{{}}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error, Serializer};
    use std::collections::BTreeMap;

    struct Tagged(BTreeMap<&'static str, &'static str>);

    impl fmt::Display for Tagged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            describe(f, "Tagged", &self.0)
        }
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unserializable"))
        }
    }

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            describe(f, "Broken", self)
        }
    }

    #[test]
    fn test_describe_renders_json() {
        let tagged = Tagged([("status", "active")].into_iter().collect());
        assert_eq!(tagged.to_string(), r#"Tagged {"status":"active"}"#);
    }

    #[test]
    fn test_describe_falls_back_on_error() {
        assert_eq!(Broken.to_string(), "Broken struct{}");
    }
}
