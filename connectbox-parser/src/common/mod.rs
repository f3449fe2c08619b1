//! Shared decoding utilities used by every record type
//!
//! - [`xml_decode`]: the structural decode entry point and the [`FromXml`] trait
//! - [`transform`]: post-parse conversions (uptime, temperatures)
//! - [`lists`]: `deserialize_with` helpers for wrapped list containers

pub mod lists;
pub mod transform;
pub mod xml_decode;

pub use transform::{fahrenheit_to_celsius, parse_uptime};
pub use xml_decode::{parse, FromXml};
