use crate::model::{FactData, FactValue};
use crate::period::Period;
use crate::qname::QName;
use crate::report::Report;
use crate::unit::Unit;
use crate::util;
use crate::Result;
use ahash::AHashMap;

/// A single tagged data point: a value bound to its concept, unit, period
/// and dimensions.
///
/// Facts are cheap read-only views over the owning [`Report`], constructed
/// on demand via [`Report::get_fact`]. The numeric/text classification of
/// the value is decided once, here, from the raw JSON type and the decimals
/// attribute; every accessor works off that tagged value.
///
/// Queries that need namespace resolution (`concept_qname`, `unit`,
/// `readable_value`) can fail for a malformed record; such errors are local
/// to this fact and leave the rest of the report usable.
#[derive(Debug, Clone)]
pub struct Fact<'a> {
    report: &'a Report,
    id: &'a str,
    data: &'a FactData,
    value: FactValue,
}

impl<'a> Fact<'a> {
    pub(crate) fn new(report: &'a Report, id: &'a str, data: &'a FactData) -> Fact<'a> {
        Fact {
            report,
            id,
            data,
            value: FactValue::from_raw(&data.v, data.d),
        }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn report(&self) -> &Report {
        self.report
    }

    /// The raw value, as classified at construction.
    pub fn value(&self) -> &FactValue {
        &self.value
    }

    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_number()
    }

    pub fn text_value(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// XBRL decimals: the power-of-ten accuracy of a numeric value
    /// (-3 = accurate to the nearest thousand). `None` for non-numeric
    /// facts.
    pub fn decimals(&self) -> Option<i32> {
        if self.is_numeric() {
            self.data.d
        } else {
            None
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.value.is_numeric()
    }

    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }

    /// True iff the fact is numeric and its unit has an ISO 4217 currency
    /// numerator. A missing or unresolvable unit classifies as non-monetary.
    pub fn is_monetary_value(&self) -> bool {
        match self.unit() {
            Ok(Some(unit)) => self.is_numeric() && unit.is_monetary(),
            _ => false,
        }
    }

    /// The fact's unit. `Ok(None)` when the record carries no unit
    /// reference; a default is never fabricated.
    pub fn unit(&self) -> Result<Option<Unit>> {
        match self.data.unit_ref() {
            Some(u) => Unit::new(self.report, u).map(Some),
            None => Ok(None),
        }
    }

    pub fn period(&self) -> Period {
        Period::new(self.data.period())
    }

    pub fn period_string(&self) -> String {
        self.period().to_string()
    }

    /// The concept's qname string, as stored (`eg:Revenue`).
    pub fn concept_name(&self) -> &str {
        self.data.concept().unwrap_or("")
    }

    pub fn concept_qname(&self) -> Result<QName> {
        self.report.qname(self.concept_name())
    }

    /// The concept's label for a role and language, with language fallback.
    pub fn label(&self, role: &str, lang: &str) -> Option<&str> {
        self.report.label(self.concept_name(), role, lang)
    }

    /// Dimensional aspects of the fact, dimension qname -> member.
    pub fn dimensions(&self) -> AHashMap<&str, &str> {
        self.data.dimensions().collect()
    }

    pub fn footnote_refs(&self) -> &[String] {
        &self.data.footnotes
    }

    /// The display rendering of the value:
    ///
    /// - nil facts render as `"nil"`;
    /// - monetary facts as `"<symbol> <number>"`, e.g. `US $ 1,000`;
    /// - other numeric facts as `"<number> <measure>"`, e.g. `1,000 eg:USD`;
    /// - text facts as the raw string, unchanged.
    ///
    /// Numbers are grouped with thousands separators and rounded to the
    /// accuracy implied by decimals. Negative decimals show no fraction
    /// digits: a value of 1000 at decimals -3 is `1,000`, not `1,000.000`.
    pub fn readable_value(&self) -> Result<String> {
        match &self.value {
            FactValue::Nil => Ok("nil".to_string()),
            FactValue::Text(s) => Ok(s.clone()),
            FactValue::Number(v) => {
                let digits = match self.decimals() {
                    Some(d) => d.max(0) as usize,
                    None => util::natural_decimals(*v),
                };
                let number = util::format_number(*v, digits);
                match self.unit()? {
                    Some(unit) if unit.is_monetary() => {
                        Ok(format!("{} {}", unit.readable_label(), number))
                    }
                    Some(unit) => Ok(format!("{} {}", number, unit.readable_label())),
                    None => Ok(number),
                }
            }
        }
    }
}
