//! Ordered `application/x-www-form-urlencoded` arguments for XML RPC calls.
//!
//! The device parses the form positionally: `token` must come first and
//! `fun` second, and some setters repeat keys. A map cannot express that, so
//! arguments are kept as an ordered list of pairs.

use url::form_urlencoded;

/// Ordered key/value arguments of a getter or setter call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlArgs(Vec<(String, String)>);

impl XmlArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair; existing pairs with the same key are kept.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Prepend the `token` and `fun` fields every call starts with.
    pub fn with_call(self, token: &str, fun: &str) -> Self {
        let mut pairs = Vec::with_capacity(self.0.len() + 2);
        pairs.push(("token".to_string(), token.to_string()));
        pairs.push(("fun".to_string(), fun.to_string()));
        pairs.extend(self.0);
        Self(pairs)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `k1=v1&k2=v2`, in insertion order.
    ///
    /// Bytes outside `A-Z a-z 0-9 - _ . ~` are percent-encoded with upper-case
    /// hex and space becomes `+`, which is what the device web UI sends.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.0 {
            if !out.is_empty() {
                out.push('&');
            }
            escape_into(&mut out, key);
            out.push('=');
            escape_into(&mut out, value);
        }
        out
    }

    /// Parse an encoded form back into ordered pairs.
    pub fn decode(encoded: &str) -> Self {
        form_urlencoded::parse(encoded.as_bytes()).into_owned().collect()
    }
}

fn escape_into(out: &mut String, s: &str) {
    // byte_serialize keeps `*` and escapes `~`; the device expects the reverse.
    // Escaped bytes come out one chunk each, unreserved runs as one slice.
    for chunk in form_urlencoded::byte_serialize(s.as_bytes()) {
        match chunk {
            "%7E" => out.push('~'),
            run if run.contains('*') => out.push_str(&run.replace('*', "%2A")),
            other => out.push_str(other),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for XmlArgs {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for XmlArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
