use crate::currency;
use crate::report::Report;
use crate::Result;

/// The measurement unit of a numeric fact: a simple qname measure
/// (`iso4217:USD`) or a composite OIM measure expression with `*` and `/`
/// (`eg:USD/eg:share`, `(eg:a*eg:b)/eg:c`).
#[derive(Debug, Clone)]
pub struct Unit {
    value: String,
    numerators: Vec<String>,
    denominators: Vec<String>,
    /// Local name of the first ISO 4217 numerator, when the unit is monetary.
    currency_code: Option<String>,
}

impl Unit {
    /// Parses a unit reference and classifies it against the report's prefix
    /// table. Fails with [`crate::Error::UnresolvedPrefix`] if any numerator
    /// measure uses an unregistered prefix, since classification would be
    /// meaningless without its namespace.
    pub fn new(report: &Report, unit_ref: &str) -> Result<Unit> {
        let stripped: String = unit_ref.chars().filter(|c| !"()".contains(*c)).collect();
        let (num, den) = match stripped.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (stripped.as_str(), None),
        };
        let numerators: Vec<String> = num.split('*').map(str::to_string).collect();
        let denominators: Vec<String> = den
            .map(|d| d.split('*').map(str::to_string).collect())
            .unwrap_or_default();

        let mut currency_code = None;
        for n in &numerators {
            let qname = report.qname(n)?;
            if qname.is_currency() {
                currency_code = Some(qname.localname);
                break;
            }
        }

        Ok(Unit {
            value: unit_ref.to_string(),
            numerators,
            denominators,
            currency_code,
        })
    }

    /// The canonical unit reference string, as stored in the payload.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// QName string of the first numerator measure.
    pub fn measure(&self) -> &str {
        self.numerators.first().map(String::as_str).unwrap_or("")
    }

    pub fn numerators(&self) -> &[String] {
        &self.numerators
    }

    pub fn denominators(&self) -> &[String] {
        &self.denominators
    }

    /// Whether any numerator is an ISO 4217 currency measure.
    pub fn is_monetary(&self) -> bool {
        self.currency_code.is_some()
    }

    /// Currency symbol for monetary units, the measure qname string
    /// otherwise.
    pub fn readable_label(&self) -> String {
        match &self.currency_code {
            Some(code) => currency::symbol(code).to_string(),
            None => self.measure().to_string(),
        }
    }
}
