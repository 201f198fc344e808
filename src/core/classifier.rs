use crate::core::rules::RuleCatalog;
use crate::domain::model::{Record, Segment};

/// Produces one segment per catalog rule, in catalog order. Each rule is
/// tested against every record in input order, so membership lists preserve
/// row order and a record can land in any number of segments. O(records ×
/// rules), fully deterministic.
///
/// Characteristics and the recommended approach are filled in afterwards by
/// the summarizer; this stage only decides membership.
pub fn classify(records: &[Record], catalog: &RuleCatalog) -> Vec<Segment> {
    catalog
        .rules()
        .iter()
        .map(|rule| {
            let members: Vec<Record> = records
                .iter()
                .filter(|record| rule.matches(record))
                .cloned()
                .collect();

            tracing::debug!("Segment '{}' matched {} records", rule.name(), members.len());

            Segment {
                name: rule.name().to_string(),
                members,
                characteristics: Vec::new(),
                recommended_approach: String::new(),
                templates: rule.templates().to_vec(),
            }
        })
        .collect()
}
