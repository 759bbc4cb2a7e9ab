use crate::fact::Fact;
use crate::labels;
use crate::model::{ConceptData, ReportData};
use crate::qname::QName;
use crate::{Error, Result};
use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use std::path::Path;

/// The report: single owner of the concept dictionary, prefix table, fact
/// records and language catalog parsed from the viewer payload.
///
/// Constructed once per loaded document and immutable thereafter; all
/// derived views (facts, units, periods, qnames) are cheap read-only
/// projections, so a report can be queried concurrently from multiple
/// consumers.
#[derive(Debug)]
pub struct Report {
    data: ReportData,
    // QName resolution is hit for every fact query; memoized here.
    qname_cache: RwLock<AHashMap<String, QName>>,
}

impl Report {
    /// Parses a report payload from JSON text. Structural errors at the top
    /// level are fatal ([`Error::MalformedReport`]); individual fact records
    /// are not validated until queried.
    pub fn parse(json: &str) -> Result<Report> {
        let data: ReportData =
            serde_json::from_str(json).map_err(|e| Error::MalformedReport(e.to_string()))?;
        Ok(Report::from_data(data))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Report> {
        let data: ReportData =
            serde_json::from_value(value).map_err(|e| Error::MalformedReport(e.to_string()))?;
        Ok(Report::from_data(data))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Report> {
        let json = std::fs::read_to_string(path)?;
        Report::parse(&json)
    }

    fn from_data(data: ReportData) -> Report {
        Report {
            data,
            qname_cache: RwLock::new(AHashMap::new()),
        }
    }

    /// Resolves a qname string against the report's prefix table.
    pub fn qname(&self, name: &str) -> Result<QName> {
        if let Some(q) = self.qname_cache.read().get(name) {
            return Ok(q.clone());
        }
        let q = QName::resolve(&self.data.prefixes, name)?;
        self.qname_cache
            .write()
            .insert(name.to_string(), q.clone());
        Ok(q)
    }

    pub fn prefix_map(&self) -> &AHashMap<String, String> {
        &self.data.prefixes
    }

    pub fn get_concept(&self, name: &str) -> Option<&ConceptData> {
        self.data.concepts.get(name)
    }

    /// The fact with the given id, if present.
    pub fn get_fact(&self, id: &str) -> Option<Fact<'_>> {
        self.data
            .facts
            .get_key_value(id)
            .map(|(id, data)| Fact::new(self, id, data))
    }

    /// Like [`Report::get_fact`], but an absent id is an error. Used where
    /// a caller holds an id it expects to be valid.
    pub fn require_fact(&self, id: &str) -> Result<Fact<'_>> {
        self.get_fact(id)
            .ok_or_else(|| Error::NotFound(format!("fact {id}")))
    }

    /// All facts, in unspecified order.
    pub fn facts(&self) -> impl Iterator<Item = Fact<'_>> {
        self.data
            .facts
            .iter()
            .map(|(id, data)| Fact::new(self, id, data))
    }

    /// Fact ids, sorted for deterministic enumeration.
    pub fn fact_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.data.facts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn fact_count(&self) -> usize {
        self.data.facts.len()
    }

    /// Concept label lookup with language fallback (see [`labels::label`]).
    pub fn label(&self, concept: &str, role: &str, lang: &str) -> Option<&str> {
        labels::label(&self.data, concept, role, lang)
    }

    /// Every language tag present across concept labels and the declared
    /// language catalog.
    pub fn available_languages(&self) -> AHashSet<String> {
        labels::available_languages(&self.data)
    }

    /// The declared language tag -> display name catalog, unmodified.
    pub fn language_names(&self) -> &AHashMap<String, String> {
        &self.data.languages
    }
}
