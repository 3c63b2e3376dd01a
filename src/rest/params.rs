//! Ordered query parameters for CTS API requests.
//!
//! Every endpoint forwards only the optional parameters the caller actually
//! supplied. A parameter whose value is "falsy" (empty string, zero, `NaN`,
//! `false`) is dropped from the query string, matching what the API expects
//! for unset filters.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is in a query value: alphanumerics and `-_.!~*'()`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating point value (coordinates, distances).
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl ParamValue {
    /// Whether this value is forwarded to the API.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Bool(b) => *b,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An ordered sequence of `(name, value)` query parameters.
///
/// Insertion order is preserved in the encoded query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    pairs: Vec<(&'static str, ParamValue)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, name: &'static str, value: impl Into<ParamValue>) -> &mut Self {
        self.pairs.push((name, value.into()));
        self
    }

    /// Append a parameter only if a value was supplied.
    pub fn push_opt<V>(&mut self, name: &'static str, value: Option<V>) -> &mut Self
    where
        V: Into<ParamValue>,
    {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Number of parameters, including falsy ones.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.pairs.iter().map(|(name, value)| (*name, value))
    }

    /// Encode the truthy parameters as `name=value` pairs joined by `&`.
    ///
    /// Values are percent-encoded as URI components. Returns an empty string
    /// when no parameter qualifies.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .filter(|(_, value)| value.is_truthy())
            .map(|(name, value)| {
                format!(
                    "{name}={}",
                    utf8_percent_encode(&value.to_string(), QUERY_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Conversion of a typed endpoint request into its query parameters.
pub trait QueryParams {
    /// Build the parameter set, in the order the API documents them.
    fn query_params(&self) -> ParameterSet;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_encodes_to_empty_string() {
        assert_eq!(ParameterSet::new().to_query_string(), "");
    }

    #[test]
    fn test_order_is_preserved() {
        let mut params = ParameterSet::new();
        params
            .push("VehicleMode", "tram")
            .push("LineRef", "A")
            .push("DirectionRef", 1u32);
        assert_eq!(
            params.to_query_string(),
            "VehicleMode=tram&LineRef=A&DirectionRef=1"
        );
    }

    #[test]
    fn test_falsy_values_are_dropped() {
        let mut params = ParameterSet::new();
        params
            .push("a", "")
            .push("b", 0i64)
            .push("c", 0.0)
            .push("d", f64::NAN)
            .push("e", false)
            .push("f", true);
        assert_eq!(params.len(), 6);
        assert_eq!(params.to_query_string(), "f=true");
    }

    #[test]
    fn test_values_are_url_encoded() {
        let mut params = ParameterSet::new();
        params
            .push("StartTime", "2024-01-01T08:00:00+01:00")
            .push("types", "a&b=c");
        let query = params.to_query_string();
        assert_eq!(
            query,
            "StartTime=2024-01-01T08%3A00%3A00%2B01%3A00&types=a%26b%3Dc"
        );
    }

    #[test]
    fn test_values_are_encoded_as_uri_components() {
        let mut params = ParameterSet::new();
        params.push("LineRef", "a b").push("types", "!'()~*");
        assert_eq!(params.to_query_string(), "LineRef=a%20b&types=!'()~*");
    }

    #[test]
    fn test_non_ascii_values_are_utf8_encoded() {
        let mut params = ParameterSet::new();
        params.push("types", "Badgéo");
        assert_eq!(params.to_query_string(), "types=Badg%C3%A9o");
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = ParameterSet::new();
        params
            .push_opt("latitude", Some(48.5846))
            .push_opt::<f64>("longitude", None)
            .push_opt("distance", Some(250.0));
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.to_query_string(),
            "latitude=48.5846&distance=250"
        );
    }
}
