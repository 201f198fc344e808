use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One parsed data row: field name to field value. Absent fields never panic;
/// they read as `None` (or `""` through [`Record::text`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Infallible lookup: absent fields read as the empty string.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Defensive numeric coercion: `None` when the field is absent, empty or
    /// not a number.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(|v| v.trim().parse::<f64>().ok())
    }

    /// Boolean-sentinel coercion: only the literal `"true"` counts.
    pub fn flag(&self, field: &str) -> bool {
        self.text(field) == "true"
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// The output of one parse: the header's column names in input order plus the
/// records in row order. Every record carries exactly the header's field set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

/// A reusable outreach pattern. `{fieldName}` placeholders in the subject and
/// body are resolved per record at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub subject: String,
    pub body: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// A rendered (subject, body) pair for one recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

/// The records matching one rule, plus the derived summary data. Membership
/// is non-exclusive: a record may appear in any number of segments.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub name: String,
    pub members: Vec<Record>,
    pub characteristics: Vec<String>,
    pub recommended_approach: String,
    pub templates: Vec<Template>,
}

impl Segment {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// One run's complete output, replaced wholesale on the next run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub columns: Vec<String>,
    pub total_records: usize,
    pub segments: Vec<Segment>,
}

/// Tunable constants the canonical rule predicates close over. Defaults match
/// the admission team's original thresholds; a rules file may override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub home_country: String,
    pub high_achiever_gpa: f64,
    pub income_ceiling: f64,
    pub aid_interest_level: String,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            home_country: "USA".to_string(),
            high_achiever_gpa: 3.9,
            income_ceiling: 75_000.0,
            aid_interest_level: "High".to_string(),
        }
    }
}
