//! Open enums - string wrappers with named constants
//!
//! An open enum behaves like a closed set of named string constants for
//! calling code, while accepting any string from the wire. Members added on
//! the server side therefore decode fine on older clients; they just don't
//! match any of the known constants.
//!
//! Families are declared with [`open_enum!`](crate::open_enum):
//!
//! ```
//! use cirrus_core::{OpenEnum, open_enum};
//!
//! open_enum! {
//!     /// Access key status
//!     pub struct CredentialStatus {
//!         ACTIVE = "active",
//!         INACTIVE = "inactive",
//!     }
//! }
//!
//! assert_eq!(CredentialStatus::ACTIVE.as_str(), "active");
//! assert!(CredentialStatus::new("retired").symbol().is_none());
//! ```

use std::fmt;

/// A string-backed enum family with forward-compatible decoding
pub trait OpenEnum: Sized + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Name of the family, used in error messages
    const FAMILY: &'static str;

    /// Known members as `(symbol, wire value)` in declaration order
    const MEMBERS: &'static [(&'static str, &'static str)];

    /// Wrap a decoded value without checking it against [`Self::MEMBERS`]
    fn from_value(value: String) -> Self;

    /// Wrap a static string without allocating
    fn from_static(value: &'static str) -> Self;

    /// The wrapped wire value
    fn as_str(&self) -> &str;

    /// The memoized registry of this family's named constants
    fn registry() -> &'static Registry<Self>;

    /// Whether the value matches one of the known members
    fn is_known(&self) -> bool {
        Self::registry().contains(self)
    }

    /// Symbolic name of the value, if it is a known member
    fn symbol(&self) -> Option<&'static str> {
        Self::registry().symbol_of(self)
    }
}

/// Read-only table of the named constants of one enum family
///
/// Built once per family on first access; there is no way to add or remove
/// members afterwards.
#[derive(Debug)]
pub struct Registry<E> {
    members: Vec<(&'static str, E)>,
}

impl<E: OpenEnum> Registry<E> {
    /// Build the table from the family's declared members
    pub fn build() -> Self {
        Self {
            members: E::MEMBERS
                .iter()
                .map(|(symbol, value)| (*symbol, E::from_static(value)))
                .collect(),
        }
    }

    /// Name of the family this registry belongs to
    pub fn family(&self) -> &'static str {
        E::FAMILY
    }

    /// Look up a constant by its symbolic name (e.g. `"ACTIVE"`)
    pub fn get(&self, symbol: &str) -> Option<&E> {
        self.members
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, value)| value)
    }

    pub fn symbol_of(&self, value: &E) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, v)| v == value)
            .map(|(symbol, _)| *symbol)
    }

    pub fn contains(&self, value: &E) -> bool {
        self.symbol_of(value).is_some()
    }

    /// Iterate over `(symbol, constant)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &E)> {
        self.members.iter().map(|(symbol, value)| (*symbol, value))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Declare an open enum family
///
/// Generates a struct wrapping a `Cow<'static, str>`, one associated
/// constant per member, an [`OpenEnum`] implementation and the serde hooks
/// that read and write the value as a bare JSON string.
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name {
            value: ::std::borrow::Cow<'static, str>,
        }

        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: Self = Self {
                    value: ::std::borrow::Cow::Borrowed($value),
                };
            )*

            /// Wrap any wire value; unknown values are kept as-is
            pub fn new(value: impl ::std::convert::Into<::std::borrow::Cow<'static, str>>) -> Self {
                Self {
                    value: value.into(),
                }
            }

            pub fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl $crate::OpenEnum for $name {
            const FAMILY: &'static str = ::std::stringify!($name);
            const MEMBERS: &'static [(&'static str, &'static str)] =
                &[$((::std::stringify!($member), $value)),*];

            fn from_value(value: ::std::string::String) -> Self {
                Self {
                    value: ::std::borrow::Cow::Owned(value),
                }
            }

            fn from_static(value: &'static str) -> Self {
                Self {
                    value: ::std::borrow::Cow::Borrowed(value),
                }
            }

            fn as_str(&self) -> &str {
                &self.value
            }

            fn registry() -> &'static $crate::Registry<Self> {
                static REGISTRY: ::std::sync::OnceLock<$crate::Registry<$name>> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init($crate::Registry::build)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.value)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::codec::deserialize_open_enum(
                    deserializer,
                    &$crate::converter::IdentityConverter,
                )
            }
        }
    };
}
