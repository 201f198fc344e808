use crate::domain::model::{Record, RuleSettings, Template};

pub const HIGH_ACHIEVERS: &str = "High Achievers";
pub const INTERNATIONAL_PROSPECTS: &str = "International Prospects";
pub const FIRST_GENERATION: &str = "First Generation Students";
pub const HIGH_FINANCIAL_NEED: &str = "High Financial Need";

type PredicateFn = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// One segment definition: a unique name, a total predicate over a record and
/// the outreach templates for matching prospects. Predicates close over the
/// immutable [`RuleSettings`] only; accumulation of matches is the
/// classifier's job.
pub struct Rule {
    name: String,
    predicate: PredicateFn,
    templates: Vec<Template>,
}

impl Rule {
    /// Panics if `templates` is empty; every rule must be able to produce
    /// outreach.
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Record) -> bool + Send + Sync + 'static,
        templates: Vec<Template>,
    ) -> Self {
        let name = name.into();
        assert!(
            !templates.is_empty(),
            "rule '{}' must have at least one template",
            name
        );
        Self {
            name,
            predicate: Box::new(predicate),
            templates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, record: &Record) -> bool {
        (self.predicate)(record)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("templates", &self.templates.len())
            .finish()
    }
}

/// The ordered, process-wide set of audience rules. Built once per run from
/// the active settings; never mutated while classifying.
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    pub fn with_settings(settings: &RuleSettings) -> Self {
        let gpa_floor = settings.high_achiever_gpa;
        let home_country = settings.home_country.clone();
        let aid_level = settings.aid_interest_level.clone();
        let income_ceiling = settings.income_ceiling;

        let rules = vec![
            Rule::new(
                HIGH_ACHIEVERS,
                move |record| record.number("gpa").is_some_and(|gpa| gpa >= gpa_floor),
                vec![
                    Template::new(
                        "Merit Scholarship",
                        "Exclusive Merit Scholarship Opportunity",
                        "Dear {name}, Based on your outstanding academic performance (GPA: {gpa}), \
                         we wanted to inform you about our merit scholarship program...",
                    ),
                    Template::new(
                        "Research Opportunities",
                        "Advanced Research Programs at Our University",
                        "Dear {name}, Given your excellent academic record and interests in \
                         {academicInterests}, we wanted to highlight our research opportunities...",
                    ),
                ],
            ),
            Rule::new(
                INTERNATIONAL_PROSPECTS,
                move |record| record.text("country") != home_country,
                vec![
                    Template::new(
                        "International Welcome",
                        "Join Our Global Community",
                        "Dear {name}, As an international student from {country}, we want to \
                         share how our university supports international scholars...",
                    ),
                    Template::new(
                        "Visa Support",
                        "International Student Services Information",
                        "Dear {name}, We understand that studying abroad is a big decision. Our \
                         International Student Services office provides...",
                    ),
                ],
            ),
            Rule::new(
                FIRST_GENERATION,
                |record| record.flag("firstGeneration"),
                vec![
                    Template::new(
                        "First-Gen Support",
                        "First Generation Student Programs",
                        "Dear {name}, As a first-generation college student, you'll find a \
                         supportive community here. Our First-Gen Success Program...",
                    ),
                    Template::new(
                        "Financial Aid Info",
                        "Financial Aid and Support Programs",
                        "Dear {name}, We want to ensure you have information about our \
                         comprehensive financial aid packages and support services...",
                    ),
                ],
            ),
            Rule::new(
                HIGH_FINANCIAL_NEED,
                move |record| {
                    record.text("financialAidInterest") == aid_level
                        && record
                            .number("householdIncome")
                            .is_some_and(|income| income < income_ceiling)
                },
                vec![
                    Template::new(
                        "Aid Package",
                        "Financial Aid Opportunities",
                        "Dear {name}, We're committed to making education accessible. Let me \
                         tell you about our comprehensive financial aid packages...",
                    ),
                    Template::new(
                        "Work Study",
                        "Work-Study and Scholarship Information",
                        "Dear {name}, I wanted to share information about our work-study \
                         programs and need-based scholarships...",
                    ),
                ],
            ),
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Appends a custom rule after the canonical set.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::with_settings(&RuleSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (field, value) in pairs {
            record.insert(*field, *value);
        }
        record
    }

    fn rule<'a>(catalog: &'a RuleCatalog, name: &str) -> &'a Rule {
        catalog
            .rules()
            .iter()
            .find(|r| r.name() == name)
            .expect("canonical rule present")
    }

    #[test]
    fn catalog_order_is_stable() {
        let catalog = RuleCatalog::default();
        let names: Vec<&str> = catalog.rules().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                HIGH_ACHIEVERS,
                INTERNATIONAL_PROSPECTS,
                FIRST_GENERATION,
                HIGH_FINANCIAL_NEED
            ]
        );
    }

    #[test]
    fn every_rule_has_templates() {
        let catalog = RuleCatalog::default();
        assert!(catalog.rules().iter().all(|r| !r.templates().is_empty()));
    }

    #[test]
    fn high_achievers_gpa_threshold() {
        let catalog = RuleCatalog::default();
        let rule = rule(&catalog, HIGH_ACHIEVERS);

        assert!(rule.matches(&record(&[("gpa", "3.95")])));
        assert!(rule.matches(&record(&[("gpa", "3.9")])));
        assert!(!rule.matches(&record(&[("gpa", "3.89")])));
    }

    #[test]
    fn high_achievers_is_false_on_missing_or_garbage_gpa() {
        let catalog = RuleCatalog::default();
        let rule = rule(&catalog, HIGH_ACHIEVERS);

        assert!(!rule.matches(&record(&[("name", "Ana")])));
        assert!(!rule.matches(&record(&[("gpa", "excellent")])));
        assert!(!rule.matches(&record(&[("gpa", "")])));
    }

    #[test]
    fn international_prospects_compares_against_home_country() {
        let catalog = RuleCatalog::default();
        let rule = rule(&catalog, INTERNATIONAL_PROSPECTS);

        assert!(rule.matches(&record(&[("country", "Spain")])));
        assert!(!rule.matches(&record(&[("country", "USA")])));
        // Absent country is not the home country.
        assert!(rule.matches(&record(&[("name", "Ana")])));
    }

    #[test]
    fn first_generation_requires_true_sentinel() {
        let catalog = RuleCatalog::default();
        let rule = rule(&catalog, FIRST_GENERATION);

        assert!(rule.matches(&record(&[("firstGeneration", "true")])));
        assert!(!rule.matches(&record(&[("firstGeneration", "false")])));
        assert!(!rule.matches(&record(&[("firstGeneration", "yes")])));
        assert!(!rule.matches(&record(&[("name", "Ana")])));
    }

    #[test]
    fn high_financial_need_requires_both_conditions() {
        let catalog = RuleCatalog::default();
        let rule = rule(&catalog, HIGH_FINANCIAL_NEED);

        assert!(rule.matches(&record(&[
            ("financialAidInterest", "High"),
            ("householdIncome", "40000"),
        ])));
        assert!(!rule.matches(&record(&[
            ("financialAidInterest", "Low"),
            ("householdIncome", "40000"),
        ])));
        assert!(!rule.matches(&record(&[
            ("financialAidInterest", "High"),
            ("householdIncome", "90000"),
        ])));
        assert!(!rule.matches(&record(&[
            ("financialAidInterest", "High"),
            ("householdIncome", "unknown"),
        ])));
        assert!(!rule.matches(&record(&[("financialAidInterest", "High")])));
    }

    #[test]
    fn settings_override_thresholds() {
        let settings = RuleSettings {
            home_country: "Canada".to_string(),
            high_achiever_gpa: 3.5,
            income_ceiling: 50_000.0,
            aid_interest_level: "Urgent".to_string(),
        };
        let catalog = RuleCatalog::with_settings(&settings);

        assert!(rule(&catalog, HIGH_ACHIEVERS).matches(&record(&[("gpa", "3.6")])));
        assert!(!rule(&catalog, INTERNATIONAL_PROSPECTS).matches(&record(&[("country", "Canada")])));
        assert!(rule(&catalog, INTERNATIONAL_PROSPECTS).matches(&record(&[("country", "USA")])));
        assert!(rule(&catalog, HIGH_FINANCIAL_NEED).matches(&record(&[
            ("financialAidInterest", "Urgent"),
            ("householdIncome", "45000"),
        ])));
    }

    #[test]
    fn catalog_accepts_custom_rules() {
        let mut catalog = RuleCatalog::default();
        catalog.push(Rule::new(
            "STEM Interest",
            |record| record.text("academicInterests").contains("Engineering"),
            vec![Template::new("STEM Invite", "Engineering at Our University", "Dear {name}, ...")],
        ));

        assert_eq!(catalog.len(), 5);
        assert!(catalog.rules()[4].matches(&record(&[("academicInterests", "Engineering, Math")])));
    }
}
