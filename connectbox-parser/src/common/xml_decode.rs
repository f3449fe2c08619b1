//! XML decoding entry points for getter.xml responses.
//!
//! Decoding is done in two phases. The structural phase maps the document
//! onto a record with serde and `quick-xml`, treating every field as the
//! literal text the device emitted. Records that carry a field needing a
//! semantic conversion (uptime, temperatures) then run an explicit
//! post-processing step in their [`FromXml`] implementation.

use crate::error::{ParseError, ParseResult};
use serde::de::DeserializeOwned;

/// Parse an XML document into a deserializable type.
///
/// The root element name is not checked; the device is not consistent about
/// it (`<cmstate>`, `<CMState>`, ...) and the function code already tells
/// which record to expect.
///
/// # Arguments
///
/// * `xml` - The XML string to parse
///
/// # Returns
///
/// The parsed value of type `T`, or an error if parsing fails.
pub fn parse<T: DeserializeOwned>(xml: &str) -> ParseResult<T> {
    quick_xml::de::from_str(xml).map_err(|e| ParseError::XmlDeserializationFailed(e.to_string()))
}

/// A record that can be decoded from a getter.xml response body.
///
/// Every `Deserialize` type gets the structural phase only. Records with
/// converted fields do not derive `Deserialize`; they decode into a private
/// raw shape and implement this trait by hand to run their post-processing.
pub trait FromXml: Sized {
    /// Decode the record from the raw response body.
    fn from_xml(xml: &str) -> ParseResult<Self>;
}

impl<T: DeserializeOwned> FromXml for T {
    fn from_xml(xml: &str) -> ParseResult<Self> {
        parse(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        field: String,
        #[serde(rename = "item")]
        items: Vec<String>,
    }

    #[test]
    fn test_parse_ignores_root_name_and_declaration() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <anything><field>50</field><item>a</item><item>b</item></anything>"#;

        let sample: Sample = parse(xml).unwrap();
        assert_eq!(sample.field, "50");
        assert_eq!(sample.items, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_missing_elements_default_to_empty() {
        let sample: Sample = parse("<root></root>").unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_parse_truncated_document() {
        let result: ParseResult<Sample> = parse("<?xml");
        assert!(matches!(result, Err(ParseError::XmlDeserializationFailed(_))));
    }
}
