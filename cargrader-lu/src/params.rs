//! Query-string parsing at the HTTP boundary
//!
//! Raw parameters arrive as optional strings. A value that fails to parse is
//! treated exactly like a missing one. Text values are trimmed only to decide
//! whether they are present; the value matched against the table is the one
//! the caller sent, since stored makes and models may carry whitespace.

/// Raw `year` / `make` / `model` query parameters
#[derive(Debug, Default)]
pub struct LookupQuery {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
}

impl LookupQuery {
    /// Collect from decoded query pairs; the first occurrence of a key wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "year" => &mut query.year,
                "make" => &mut query.make,
                "model" => &mut query.model,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn year(&self) -> Option<i64> {
        parse_year(self.year.as_deref())
    }

    pub fn make(&self) -> Option<&str> {
        parse_text(self.make.as_deref())
    }

    pub fn model(&self) -> Option<&str> {
        parse_text(self.model.as_deref())
    }
}

/// Integer year, surrounding whitespace allowed
pub fn parse_year(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Untouched text, or `None` if it is blank after trimming
pub fn parse_text(raw: Option<&str>) -> Option<&str> {
    let raw = raw?;
    (!raw.trim().is_empty()).then_some(raw)
}
