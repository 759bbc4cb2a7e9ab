//! ixview - Inline XBRL report viewer core
//!
//! Parses the fact-data payload that accompanies an iXBRL-tagged document
//! and exposes it as an immutable, query-able report model: facts with
//! decimals-aware readable values, units with currency classification,
//! periods, and multi-language concept labels.
//!
//! Licensed under AGPL-3.0

pub mod currency;
pub mod extension;
pub mod fact;
pub mod labels;
pub mod model;
pub mod period;
pub mod qname;
pub mod report;
pub mod unit;
pub mod util;

// Re-export main types
pub use fact::Fact;
pub use model::{ConceptData, FactData, FactValue, ReportData};
pub use period::Period;
pub use qname::QName;
pub use report::Report;
pub use unit::Unit;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unresolved namespace prefix: {0}")]
    UnresolvedPrefix(String),

    #[error("malformed period: {0}")]
    MalformedPeriod(String),

    #[error("malformed report: {0}")]
    MalformedReport(String),

    #[error("not found: {0}")]
    NotFound(String),
}
