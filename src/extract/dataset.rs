// src/extract/dataset.rs

use serde::{Deserialize, Serialize};

/// Column names plus string rows, as lifted off the page.
///
/// Rows are *meant* to be as wide as `columns`, but nothing here enforces it;
/// see [`crate::frame::to_record_batch`] for the checked binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Cells under the first column called `name`. Short rows yield `None`.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings() -> Dataset {
        Dataset::new(
            vec!["Team".into(), "Pts".into()],
            vec![
                vec!["Ajax".into(), "10".into()],
                vec!["PSV".into()],
            ],
        )
    }

    #[test]
    fn column_lookup_tolerates_short_rows() {
        let ds = standings();
        assert_eq!(ds.column("Team"), Some(vec![Some("Ajax"), Some("PSV")]));
        assert_eq!(ds.column("Pts"), Some(vec![Some("10"), None]));
        assert_eq!(ds.column("GD"), None);
    }

    #[test]
    fn serializes_as_columns_and_rows() {
        let json = serde_json::to_value(standings()).unwrap();
        assert_eq!(json["columns"], serde_json::json!(["Team", "Pts"]));
        assert_eq!(json["rows"][1], serde_json::json!(["PSV"]));
    }
}
