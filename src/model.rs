use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Raw report payload - wire format produced by the tagging pipeline
// ============================================================================
//
// Field names (`v`, `d`, `a`, `c`, `u`, `p`, `fn`) are part of the payload
// contract and must not be renamed.

#[derive(Debug, Clone, Deserialize)]
pub struct ReportData {
    /// Namespace prefix -> namespace URI, used to resolve every QName string.
    pub prefixes: AHashMap<String, String>,

    /// Fully-qualified concept name (`prefix:localname`) -> concept metadata.
    pub concepts: AHashMap<String, ConceptData>,

    /// Fact id -> raw fact record. Records are validated lazily, per query.
    pub facts: AHashMap<String, FactData>,

    /// Language tag -> display name, for UI language selection.
    #[serde(default)]
    pub languages: AHashMap<String, String>,

    /// Default language for label fallback. "en" when absent.
    #[serde(default, rename = "defaultLanguage")]
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConceptData {
    /// Label role (e.g. "std") -> language tag -> label text.
    #[serde(default)]
    pub labels: AHashMap<String, AHashMap<String, String>>,
}

/// A single fact record as stored in the payload. Aspect values are kept
/// untyped so that one malformed fact never blocks the rest of the report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactData {
    /// Raw value: JSON number, string, or null for nil facts.
    #[serde(default)]
    pub v: Value,

    /// XBRL decimals (accuracy indicator). Absent for non-numeric facts.
    #[serde(default)]
    pub d: Option<i32>,

    /// Aspects: `c` = concept, `u` = unit ref, `p` = period string, plus one
    /// entry per dimension, keyed by the dimension's qname.
    #[serde(default)]
    pub a: AHashMap<String, Value>,

    /// Ids of footnotes attached to this fact.
    #[serde(default, rename = "fn")]
    pub footnotes: Vec<String>,
}

impl FactData {
    pub fn concept(&self) -> Option<&str> {
        self.a.get("c").and_then(Value::as_str)
    }

    pub fn unit_ref(&self) -> Option<&str> {
        self.a.get("u").and_then(Value::as_str)
    }

    pub fn period(&self) -> Option<&str> {
        self.a.get("p").and_then(Value::as_str)
    }

    /// Dimensional aspects: every aspect whose key is a qname.
    pub fn dimensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.a.iter().filter_map(|(k, v)| {
            if k.contains(':') {
                Some((k.as_str(), v.as_str()?))
            } else {
                None
            }
        })
    }
}

/// A fact's value with its numeric/text classification decided once, at
/// construction, from the JSON value's native type and the presence of a
/// decimals attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FactValue {
    Number(f64),
    Text(String),
    Nil,
}

impl FactValue {
    pub fn from_raw(v: &Value, decimals: Option<i32>) -> Self {
        match v {
            Value::Null => FactValue::Nil,
            Value::Number(n) => FactValue::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => {
                // A string-typed value is only numeric if the record carries
                // a decimals attribute and the string parses as a number.
                if decimals.is_some() {
                    if let Ok(n) = s.trim().parse::<f64>() {
                        return FactValue::Number(n);
                    }
                }
                FactValue::Text(s.clone())
            }
            other => FactValue::Text(other.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FactValue::Number(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, FactValue::Nil)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FactValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_classification() {
        assert_eq!(
            FactValue::from_raw(&json!(1000), Some(-3)),
            FactValue::Number(1000.0)
        );
        assert_eq!(
            FactValue::from_raw(&json!("1000"), Some(0)),
            FactValue::Number(1000.0)
        );
        // Numeric-looking string without decimals stays text.
        assert_eq!(
            FactValue::from_raw(&json!("1000"), None),
            FactValue::Text("1000".to_string())
        );
        assert_eq!(
            FactValue::from_raw(&json!("abcdef"), None),
            FactValue::Text("abcdef".to_string())
        );
        assert_eq!(FactValue::from_raw(&json!(null), Some(0)), FactValue::Nil);
    }

    #[test]
    fn fact_data_aspects() {
        let f: FactData = serde_json::from_value(json!({
            "v": 1000,
            "d": -3,
            "a": {
                "c": "eg:Concept1",
                "u": "iso4217:USD",
                "p": "2018-01-01/2019-01-01",
                "eg:Dimension1": "eg:Member1",
            }
        }))
        .unwrap();
        assert_eq!(f.concept(), Some("eg:Concept1"));
        assert_eq!(f.unit_ref(), Some("iso4217:USD"));
        assert_eq!(f.period(), Some("2018-01-01/2019-01-01"));
        let dims: Vec<_> = f.dimensions().collect();
        assert_eq!(dims, vec![("eg:Dimension1", "eg:Member1")]);
    }
}
