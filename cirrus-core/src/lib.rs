//! Cirrus Core
//!
//! Open string-enum codec used by the generated Cirrus SDK models.
//!
//! ## Module Structure
//!
//! - `enum_value` - The `OpenEnum` trait, registries and the `open_enum!` macro
//! - `codec` - JSON encode/decode of enum values and the serde hook
//! - `converter` - Pluggable string converters applied on decode
//! - `model` - Helpers for generated model structs

pub mod codec;
pub mod converter;
pub mod enum_value;
pub mod model;

// Re-export main types
pub use codec::{DecodeError, DecodeResult, EnumCodec};
pub use converter::{
    Base64Converter, ConvertError, IdentityConverter, StringConverter, TrimConverter,
};
pub use enum_value::{OpenEnum, Registry};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
