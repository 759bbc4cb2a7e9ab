use crate::{Error, Result};
use ahash::AHashMap;
use std::fmt;

/// The XBRL namespace for ISO 4217 currency measures. A unit whose measure
/// resolves into this namespace denotes a monetary value.
pub const ISO4217_NAMESPACE: &str = "http://www.xbrl.org/2003/iso4217";

/// A qualified name: `prefix:localname` resolved against the report's
/// prefix table to a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    pub prefix: String,
    pub localname: String,
    pub namespace: String,
}

impl QName {
    /// Resolves a `prefix:localname` string against a prefix table. A name
    /// with no `:` resolves against the empty (default) prefix.
    ///
    /// Fails with [`Error::UnresolvedPrefix`] rather than defaulting: an
    /// unresolved namespace would corrupt currency classification downstream.
    pub fn resolve(prefixes: &AHashMap<String, String>, name: &str) -> Result<QName> {
        let (prefix, localname) = match name.split_once(':') {
            Some((p, l)) => (p, l),
            None => ("", name),
        };
        let namespace = prefixes
            .get(prefix)
            .ok_or_else(|| Error::UnresolvedPrefix(prefix.to_string()))?;
        Ok(QName {
            prefix: prefix.to_string(),
            localname: localname.to_string(),
            namespace: namespace.clone(),
        })
    }

    pub fn is_currency(&self) -> bool {
        self.namespace == ISO4217_NAMESPACE
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.localname)
        } else {
            write!(f, "{}:{}", self.prefix, self.localname)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> AHashMap<String, String> {
        let mut p = AHashMap::new();
        p.insert("eg".to_string(), "http://www.example.com".to_string());
        p.insert("iso4217".to_string(), ISO4217_NAMESPACE.to_string());
        p
    }

    #[test]
    fn resolves_registered_prefix() {
        let q = QName::resolve(&prefixes(), "eg:Concept1").unwrap();
        assert_eq!(q.prefix, "eg");
        assert_eq!(q.localname, "Concept1");
        assert_eq!(q.namespace, "http://www.example.com");
        assert_eq!(q.to_string(), "eg:Concept1");
    }

    #[test]
    fn currency_namespace() {
        let q = QName::resolve(&prefixes(), "iso4217:USD").unwrap();
        assert!(q.is_currency());
        let q = QName::resolve(&prefixes(), "eg:USD").unwrap();
        assert!(!q.is_currency());
    }

    #[test]
    fn unregistered_prefix_is_an_error() {
        let err = QName::resolve(&prefixes(), "zz:Concept1").unwrap_err();
        assert!(matches!(err, Error::UnresolvedPrefix(p) if p == "zz"));
    }

    #[test]
    fn unprefixed_name_uses_default_prefix() {
        let mut p = prefixes();
        assert!(QName::resolve(&p, "Concept1").is_err());
        p.insert(String::new(), "http://www.example.com/default".to_string());
        let q = QName::resolve(&p, "Concept1").unwrap();
        assert_eq!(q.prefix, "");
        assert_eq!(q.localname, "Concept1");
        assert_eq!(q.namespace, "http://www.example.com/default");
        assert_eq!(q.to_string(), "Concept1");
    }
}
