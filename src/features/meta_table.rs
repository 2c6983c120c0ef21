use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetaRow {
    pub tag: String,
    pub value: String,
}

/// Two-column "Meta Tags / Value" table, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MetaTable {
    rows: Vec<MetaRow>,
}

impl MetaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.rows.push(MetaRow {
            tag: tag.into(),
            value: value.into(),
        });
    }

    /// Appends all rows of `other` after the rows of `self`.
    pub fn concat(&mut self, other: MetaTable) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[MetaRow] {
        &self.rows
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.tag == tag)
            .map(|row| row.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flattens exiftool's `-G` JSON output (keys like `EXIF:Make`) into a table.
    ///
    /// With `groups`, only tags whose group prefix is listed are kept. `SourceFile` is always
    /// dropped.
    pub fn from_exiftool_json(exif: &Value, groups: Option<&[&str]>) -> Self {
        let mut table = Self::new();
        let Some(object) = exif.as_object() else {
            return table;
        };

        for (key, value) in object {
            if key == "SourceFile" {
                continue;
            }
            if let Some(groups) = groups {
                let group = key.split_once(':').map(|(group, _)| group);
                if !group.is_some_and(|g| groups.contains(&g)) {
                    continue;
                }
            }
            table.push(key.as_str(), display_value(value));
        }
        table
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
