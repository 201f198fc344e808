use crate::domain::model::{Record, RenderedMessage, Template};
use crate::utils::error::Result;
use regex::{Captures, Regex};

/// Substitutes `{fieldName}` placeholders with record values. One tokenizing
/// pass over the text resolves each placeholder independently, so field names
/// that are substrings of one another cannot mis-substitute. Placeholders
/// naming absent fields are left verbatim; values are inserted as literal
/// text.
pub struct MessageRenderer {
    placeholder: Regex,
}

impl MessageRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            placeholder: Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}")?,
        })
    }

    pub fn render(&self, template: &Template, record: &Record) -> RenderedMessage {
        RenderedMessage {
            subject: self.substitute(&template.subject, record),
            body: self.substitute(&template.body, record),
        }
    }

    fn substitute(&self, text: &str, record: &Record) -> String {
        self.placeholder
            .replace_all(text, |caps: &Captures| match record.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
