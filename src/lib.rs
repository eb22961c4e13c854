//! A streaming reader for RPSL objects.
//!
//! This crate implements reading of RPSL text (Routing Policy Specification
//! Language, [RFC 2622](https://www.rfc-editor.org/rfc/rfc2622)) as published
//! by Internet routing registries such as RADB, RIPE and AFRINIC.
//! A [`Reader`] consumes a line-oriented text source and yields one
//! [`Object`] per blank-line-separated record, handling comment lines,
//! folded continuation lines and the stray trailing-`#` markers found in
//! registry dumps. Attribute values are kept as opaque text; no
//! class-specific schema is enforced.
//!
//! Please be aware that the API is still small and may change in an
//! incompatible way.

pub mod object;
#[doc(inline)]
pub use object::{Object, ObjectClass};

pub mod reader;
#[doc(inline)]
pub use reader::Reader;

pub mod error;
