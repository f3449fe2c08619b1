//! The session-authenticated XML RPC client.

use connectbox_parser::{decode, FromXml, Function, Getter, ParseError, Record};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{RequestBuilder, StatusCode};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::form::XmlArgs;
use crate::session::{Session, SESSION_ID_COOKIE};

/// Page fetched before login so the device hands out the first token.
pub const LOGIN_PAGE: &str = "/common_page/login.html";
/// Endpoint for every read function.
pub const XML_GETTER: &str = "/xml/getter.xml";
/// Endpoint for every write function, login and logout included.
pub const XML_SETTER: &str = "/xml/setter.xml";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for one ConnectBox router.
///
/// The device allows a single logged-in user at a time, so call
/// [`logout`](Client::logout) when done. Every operation takes `&mut self`:
/// the session token rotates on each response and must be echoed by the
/// next request, so calls on one client are strictly sequential. Use one
/// client per concurrent session.
///
/// Operations are cancelled by dropping their future, for example through
/// `tokio::time::timeout`. A call dropped before its response arrived leaves
/// the session as it was.
///
/// ```rust,no_run
/// # async fn run() -> connectbox::Result<()> {
/// use connectbox::{Client, models::CmState};
///
/// let mut client = Client::new("192.168.178.1", "NULL", "password")?;
/// client.login().await?;
/// let state: CmState = client.fetch().await?;
/// println!("{} °C", state.temperature);
/// client.logout().await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: reqwest::Client,
    base: String,
    username: String,
    password_hash: String,
    session: Session,
}

impl Client {
    /// Create a client with the default [`ClientConfig`].
    ///
    /// `address` may omit the scheme, `http://` is assumed. The password is
    /// hashed immediately and the plaintext is not kept.
    pub fn new(address: &str, username: &str, password: &str) -> Result<Self> {
        Self::with_config(address, username, password, ClientConfig::default())
    }

    /// Create a client with explicit timeouts and user agent.
    pub fn with_config(
        address: &str,
        username: &str,
        password: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let base = normalize_address(address)?;
        let http = config.build_http_client()?;

        debug!(address = %base, "created connectbox client");

        Ok(Self {
            http,
            base,
            username: username.to_string(),
            password_hash: hash_password(password),
            session: Session::default(),
        })
    }

    /// Open an authenticated session.
    ///
    /// Fetches the login page for an initial token, then posts the
    /// credentials. On success the `SID` from the reply is kept for all later
    /// requests; on failure the session id is left as it was.
    pub async fn login(&mut self) -> Result<()> {
        let page = self.http.get(self.url(LOGIN_PAGE));
        self.send(page)
            .await
            .map_err(|e| e.context("get initial token"))?;

        let args = XmlArgs::from(vec![
            ("Username", self.username.as_str()),
            ("Password", self.password_hash.as_str()),
        ]);
        let reply = self
            .xml_request(XML_SETTER, Function::Login.code(), args)
            .await
            .map_err(|e| e.context("xml request"))?;

        let sid = parse_login_reply(&reply).map_err(|e| {
            warn!(error = %e, "login rejected");
            e
        })?;
        self.session.set_sid(sid);

        info!(address = %self.base, "logged in");
        Ok(())
    }

    /// Close the session.
    ///
    /// The session id is dropped whatever the outcome, so the client is
    /// unauthenticated afterwards even if the device could not be reached.
    pub async fn logout(&mut self) -> Result<()> {
        let result = self
            .xml_request(XML_SETTER, Function::Logout.code(), XmlArgs::new())
            .await;
        self.session.clear_sid();

        match &result {
            Ok(_) => info!(address = %self.base, "logged out"),
            Err(e) => warn!(error = %e, "logout failed, session dropped locally"),
        }
        result.map(|_| ())
    }

    /// Call getter function `code` and decode the reply as `T`.
    ///
    /// The caller picks both the code and the record; use
    /// [`fetch`](Client::fetch) to have the code follow from the type.
    pub async fn get<T: FromXml>(&mut self, code: &str) -> Result<T> {
        let body = self
            .xml_request(XML_GETTER, code, XmlArgs::new())
            .await
            .map_err(|e| e.context("get response"))?;
        Ok(T::from_xml(&body)?)
    }

    /// Call the getter bound to record type `T`.
    pub async fn fetch<T: Getter>(&mut self) -> Result<T> {
        self.get(T::FUNCTION.code()).await
    }

    /// Call a getter chosen at runtime and decode through the function table.
    ///
    /// Setter functions are rejected before anything is sent.
    pub async fn get_record(&mut self, function: Function) -> Result<Record> {
        if !function.is_getter() {
            return Err(ParseError::NoDecoder(function.code().to_string()).into());
        }
        let body = self
            .xml_request(XML_GETTER, function.code(), XmlArgs::new())
            .await
            .map_err(|e| e.context("get response"))?;
        Ok(decode(function, &body)?)
    }

    /// Call setter function `code` with `args` and return the raw reply.
    ///
    /// `token` and `fun` are added in front of `args`.
    pub async fn set(&mut self, code: &str, args: XmlArgs) -> Result<String> {
        self.xml_request(XML_SETTER, code, args).await
    }

    /// Base URL, without trailing slash.
    pub fn address(&self) -> &str {
        &self.base
    }

    /// Login name sent with the credentials.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Hex SHA-256 of the password, as sent in the login request.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Current `sessionToken`; empty before the first response.
    pub fn token(&self) -> &str {
        self.session.token()
    }

    /// Current `SID`; empty when not logged in.
    pub fn session_id(&self) -> &str {
        self.session.sid()
    }

    /// Whether a login succeeded and no logout happened since.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn xml_request(&mut self, path: &str, fun: &str, args: XmlArgs) -> Result<String> {
        let body = args.with_call(self.session.token(), fun).encode();
        debug!(path, function = fun, "xml request");

        let request = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        self.send(request).await
    }

    /// Send with the session cookies and take the rotated token from the
    /// response, whatever its status.
    async fn send(&mut self, request: RequestBuilder) -> Result<String> {
        let request = match self.session.cookie_header() {
            Some(cookies) => request.header(COOKIE, cookies),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport("send request", e))?;

        if !self.session.refresh_from(response.headers()) {
            debug!("response carried no session token");
        }

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "unexpected response status");
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::transport("read body", e))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("address", &self.base)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Turn a user supplied address into the base URL all paths are appended to.
fn normalize_address(address: &str) -> Result<String> {
    let with_scheme = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    };

    let url =
        Url::parse(&with_scheme).map_err(|_| ClientError::InvalidAddress(with_scheme.clone()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ClientError::InvalidAddress(with_scheme));
    }

    Ok(with_scheme
        .strip_suffix('/')
        .map(str::to_string)
        .unwrap_or(with_scheme))
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Extract the session id from a login reply such as `success;SID=123;`.
fn parse_login_reply(body: &str) -> Result<String> {
    if !body.starts_with("success") {
        return Err(ClientError::InvalidResponse(body.to_string()));
    }

    body.split(';')
        .find_map(|item| {
            let parts: Vec<&str> = item.split('=').collect();
            match parts.as_slice() {
                [key, value] if *key == SESSION_ID_COOKIE => Some(*value),
                _ => None,
            }
        })
        .filter(|sid| !sid.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ClientError::MissingSid(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("127.0.0.1:8080", "http://127.0.0.1:8080")]
    #[case("192.168.178.1", "http://192.168.178.1")]
    #[case("http://192.168.0.1/", "http://192.168.0.1")]
    #[case("https://router.lan", "https://router.lan")]
    fn test_normalize_address(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_address(input).unwrap(), expected);
    }

    #[rstest]
    #[case("http://[::1")]
    #[case("bad host")]
    #[case("ftp://router.lan")]
    #[case("")]
    fn test_invalid_address(#[case] input: &str) {
        let err = normalize_address(input).unwrap_err();
        assert!(matches!(err, ClientError::InvalidAddress(_)));
        assert!(err.to_string().starts_with("invalid address: "));
    }

    #[test]
    fn test_hash_password() {
        assert_eq!(
            hash_password("qwerty"),
            "65e84be33532fb784c48129675f9eff3a682b27168c0ea744b2cf58ee02337c5"
        );
        assert_eq!(hash_password("qwerty"), hash_password("qwerty"));
    }

    #[rstest]
    #[case("success;SID=sid1", "sid1")]
    #[case("successful;SessionID=x;SID=42;", "42")]
    #[case("success;broken;a=b=c;SID=7", "7")]
    fn test_parse_login_reply(#[case] body: &str, #[case] sid: &str) {
        assert_eq!(parse_login_reply(body).unwrap(), sid);
    }

    #[test]
    fn test_parse_login_reply_errors() {
        let err = parse_login_reply("KDGloginincorrect").unwrap_err();
        assert_eq!(err.to_string(), "invalid response: KDGloginincorrect");

        let err = parse_login_reply("success;").unwrap_err();
        assert_eq!(err.to_string(), "missing SID: success;");

        let err = parse_login_reply("success;SID=").unwrap_err();
        assert!(matches!(err, ClientError::MissingSid(_)));
    }

    #[test]
    fn test_new_hashes_password_and_starts_unauthenticated() {
        let client = Client::new("127.0.0.1:8080", "bob", "qwerty").unwrap();
        assert_eq!(client.address(), "http://127.0.0.1:8080");
        assert_eq!(client.username(), "bob");
        assert_eq!(client.password_hash(), hash_password("qwerty"));
        assert_eq!(client.token(), "");
        assert_eq!(client.session_id(), "");
        assert!(!client.is_authenticated());
        assert!(!format!("{:?}", client).contains(client.password_hash()));
    }
}
