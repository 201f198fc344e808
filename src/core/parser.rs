use crate::domain::model::{Dataset, Record};

/// Splits delimited text into a [`Dataset`]. The first line is the header;
/// every following non-empty line becomes one record, zipped to the header by
/// position. Rows shorter than the header are padded with empty fields, extra
/// values past the header width are dropped. Quoted fields containing the
/// delimiter and embedded line breaks are not supported.
#[derive(Debug, Clone)]
pub struct TableParser {
    delimiter: char,
}

impl TableParser {
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Never fails: malformed rows degrade to partially-empty records, empty
    /// input yields an empty dataset.
    pub fn parse(&self, text: &str) -> Dataset {
        let mut lines = text.lines();

        let columns: Vec<String> = match lines.next() {
            Some(header) => header
                .split(self.delimiter)
                .map(|name| name.trim().to_string())
                .collect(),
            None => return Dataset::default(),
        };

        let records: Vec<Record> = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let values: Vec<&str> = line.split(self.delimiter).collect();
                let mut record = Record::new();
                for (index, column) in columns.iter().enumerate() {
                    let value = values.get(index).map(|v| v.trim()).unwrap_or("");
                    record.insert(column.clone(), value);
                }
                record
            })
            .collect();

        tracing::debug!(
            "Parsed {} records across {} columns",
            records.len(),
            columns.len()
        );

        Dataset { columns, records }
    }
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}
