//! Error types for the ConnectBox client

use connectbox_parser::ParseError;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations
///
/// Variants keep the failure class distinct so callers can tell a network
/// problem from a rejected request or an unexpected document. Higher level
/// steps wrap the underlying error in [`ClientError::Context`], so the
/// rendered message reads from the outermost step inwards, e.g.
/// `get initial token: send request: <reqwest error>`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The router address could not be turned into a base URL
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Building the HTTP client, sending, or reading the body failed
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The device answered with something other than 200 OK
    #[error("invalid response status: {0}")]
    Status(u16),

    /// The login reply did not start with `success`
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The login reply was a success but carried no `SID`
    #[error("missing SID: {0}")]
    MissingSid(String),

    /// The getter body could not be decoded into the requested record
    #[error("unmarshal response: {0}")]
    Decode(#[from] ParseError),

    /// A lower level error annotated with the step that failed
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    pub(crate) fn transport(context: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { context, source }
    }

    /// Wrap `self` with the name of the step that failed.
    pub(crate) fn context(self, context: &'static str) -> Self {
        Self::Context {
            context,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every [`ClientError::Context`] layer.
    pub fn root_cause(&self) -> &ClientError {
        let mut current = self;
        while let ClientError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Whether the failure happened below HTTP (connect, timeout, body read).
    pub fn is_transport(&self) -> bool {
        matches!(self.root_cause(), ClientError::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self.root_cause(), ClientError::Decode(_))
    }

    /// The HTTP status code, when the device rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self.root_cause() {
            ClientError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Type alias for results that can return a ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
