//! # connectbox
//!
//! Async client for the XML API of Compal ConnectBox (CH7465LG) cable
//! routers.
//!
//! The router multiplexes every operation through two endpoints,
//! `/xml/getter.xml` for reads and `/xml/setter.xml` for writes, selected by a
//! numeric function code. Requests are ordered form posts authenticated by a
//! rotating `sessionToken` cookie and, after login, a `SID` cookie. [`Client`]
//! keeps that session state and decodes replies into the typed records of
//! [`connectbox_parser`], re-exported here as [`models`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use connectbox::{Client, Function, Record};
//!
//! # async fn run() -> connectbox::Result<()> {
//! let mut client = Client::new("192.168.178.1", "NULL", "password")?;
//! client.login().await?;
//!
//! // Typed
//! let info: connectbox::models::CmSystemInfo = client.fetch().await?;
//! println!("up for {} s", info.system_uptime);
//!
//! // By function code
//! if let Record::LanUserTable(table) = client.get_record(Function::LanUserTable).await? {
//!     println!("{} clients", table.total_client);
//! }
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod error;
mod form;
pub mod logging;
mod session;

pub use client::{Client, LOGIN_PAGE, XML_GETTER, XML_SETTER};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use form::XmlArgs;

pub use connectbox_parser::{decode, models, FromXml, Function, Getter, ParseError, Record};
