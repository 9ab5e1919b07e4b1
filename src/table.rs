/// Column metadata as three parallel sequences, aligned by index.
///
/// Alignment is not checked here; the SQL writers zip the sequences through a
/// [`Factory`](crate::Factory) and a length difference surfaces as
/// [`Error::LengthMismatch`](crate::Error::LengthMismatch).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSet {
    pub names: Vec<String>,
    pub types: Vec<String>,
    pub comments: Vec<String>,
}

impl ColumnSet {
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        types: impl IntoIterator<Item = S>,
        comments: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            types: types.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Declarative description of a warehouse table.
///
/// `delimiter` and `stored_as` only matter for Hive output.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    pub schema: String,
    pub name: String,
    pub comment: String,
    /// Hive field delimiter.
    pub delimiter: String,
    /// Hive storage format.
    pub stored_as: String,
    pub columns: Option<ColumnSet>,
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// `schema.name`, or just `name` when the schema is empty.
    pub fn qualified_name(&self) -> String {
        let mut result = String::new();
        if !self.schema.is_empty() {
            result.push_str(&self.schema);
            result.push('.');
        }
        result.push_str(&self.name);
        result
    }
}

impl Default for TableDef {
    fn default() -> Self {
        Self {
            schema: String::new(),
            name: String::new(),
            comment: String::new(),
            delimiter: "|".into(),
            stored_as: "textFile".into(),
            columns: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TableDef;

    #[test]
    fn qualified_name_skips_empty_schema() {
        let mut table = TableDef::new("events");
        assert_eq!(table.qualified_name(), "events");
        table.schema = "ods".into();
        assert_eq!(table.qualified_name(), "ods.events");
    }

    #[test]
    fn hive_defaults() {
        let table = TableDef::new("events");
        assert_eq!(table.delimiter, "|");
        assert_eq!(table.stored_as, "textFile");
    }
}
