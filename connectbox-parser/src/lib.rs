//! # connectbox-parser
//!
//! Typed decoders for the XML documents returned by the Compal ConnectBox
//! (CH7465LG) `getter.xml` endpoint.
//!
//! ## Usage
//!
//! ### Typed access
//! ```rust
//! use connectbox_parser::{CmState, FromXml};
//!
//! let xml = "<cmstate><Temperature>122</Temperature><OperState>OPERATIONAL</OperState></cmstate>";
//! let state = CmState::from_xml(xml)?;
//! assert_eq!(state.temperature, 50);
//! # Ok::<(), connectbox_parser::ParseError>(())
//! ```
//!
//! ### Registry access by function code
//! ```rust
//! use connectbox_parser::{decode, Function, Record};
//!
//! let function = Function::from_code("22").unwrap();
//! let record = decode(function, "<Fail><FailCount>2</FailCount></Fail>")?;
//! assert!(matches!(record, Record::Fail(ref f) if f.fail_count == "2"));
//! # Ok::<(), connectbox_parser::ParseError>(())
//! ```

pub mod common;
pub mod error;
pub mod models;
pub mod registry;

// Re-export error types for convenient top-level access
pub use error::{ParseError, ParseResult};

pub use common::{fahrenheit_to_celsius, parse, parse_uptime, FromXml};
pub use models::*;
pub use registry::{decode, Function, Getter, Record};
