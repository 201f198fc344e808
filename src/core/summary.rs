use crate::core::rules::{
    FIRST_GENERATION, HIGH_ACHIEVERS, HIGH_FINANCIAL_NEED, INTERNATIONAL_PROSPECTS,
};
use crate::domain::model::{Record, Segment};

/// Marker characteristic for segments with no usable numeric data. Keeps the
/// summary total: an empty segment summarizes to this instead of NaN.
pub const NO_DATA: &str = "No data available";

/// Fills in a segment's derived fields from its member list and name. Pure:
/// depends on nothing but the segment itself.
pub fn enrich(segment: &mut Segment) {
    segment.characteristics = characteristics(&segment.members);
    segment.recommended_approach = recommended_approach(&segment.name).to_string();
}

/// Descriptive strings for a member list. The GPA mean only counts members
/// whose `gpa` field parses; with no parseable members the no-data marker is
/// returned instead of dividing by zero.
pub fn characteristics(members: &[Record]) -> Vec<String> {
    match mean_of(members, "gpa") {
        Some(mean) => vec![format!("Average GPA: {:.2}", mean)],
        None => vec![NO_DATA.to_string()],
    }
}

/// Strategy string per segment name, with a generic fallback for custom
/// rules.
pub fn recommended_approach(segment_name: &str) -> &'static str {
    match segment_name {
        HIGH_ACHIEVERS => {
            "Focus on advanced programs, research opportunities, and merit scholarships"
        }
        INTERNATIONAL_PROSPECTS => {
            "Highlight the global community, visa guidance, and international student services"
        }
        FIRST_GENERATION => {
            "Emphasize mentoring, the First-Gen Success Program, and financial aid guidance"
        }
        HIGH_FINANCIAL_NEED => {
            "Lead with need-based aid packages, work-study options, and scholarship deadlines"
        }
        _ => "Personalized communication based on individual interests and goals",
    }
}

fn mean_of(members: &[Record], field: &str) -> Option<f64> {
    let values: Vec<f64> = members
        .iter()
        .filter_map(|record| record.number(field))
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
