use crate::{ColumnSet, Error, Factory, Result, TableDef, truncate_long};
use std::{fmt::Write, str::FromStr};

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Hive,
    Postgres,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Hive => "hive",
            Dialect::Postgres => "pg",
        }
    }

    pub fn writer(&self) -> &'static dyn SqlWriter {
        match self {
            Dialect::Hive => &HiveSqlWriter {},
            Dialect::Postgres => &PostgresSqlWriter {},
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hive" => Ok(Dialect::Hive),
            "pg" => Ok(Dialect::Postgres),
            other => Err(Error::UnsupportedDialect(other.into())),
        }
    }
}

/// Renders a CREATE TABLE statement for the given dialect string.
///
/// Fails with [`Error::UnsupportedDialect`] for anything other than `"hive"`
/// or `"pg"`; every precondition failure from the writer surfaces unchanged.
pub fn generate_create_table(table: &TableDef, dialect: &str) -> Result<String> {
    let mut out = String::new();
    dialect
        .parse::<Dialect>()?
        .writer()
        .write_create_table(&mut out, table)?;
    log::debug!(
        "create table statement for {}:\n{}",
        table.qualified_name(),
        truncate_long!(out)
    );
    Ok(out)
}

/// Renders an INSERT ... SELECT statement moving every column of `target`
/// from `source`, for the given dialect string.
pub fn generate_insert_select(target: &TableDef, source: &TableDef, dialect: &str) -> Result<String> {
    let mut out = String::new();
    dialect
        .parse::<Dialect>()?
        .writer()
        .write_insert_select(&mut out, target, source)?;
    log::debug!(
        "insert select statement for {}:\n{}",
        target.qualified_name(),
        truncate_long!(out)
    );
    Ok(out)
}

/// Assembles SQL text for one dialect.
///
/// Column blocks are built through the [`Factory`]: names are zipped with
/// types (and comments where the dialect inlines them), each row is mapped to
/// one column line, and the lines are joined with `",\n"`. Zipping keeps rows
/// aligned by their original index, so a name never drifts away from its type.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Validates the column metadata shared by all statements.
    ///
    /// Fails with [`Error::MissingColumnInfo`] when the table carries none and
    /// with [`Error::DuplicateColumnName`] when column names repeat.
    fn check_columns<'a>(&self, table: &'a TableDef) -> Result<&'a ColumnSet> {
        let Some(columns) = &table.columns else {
            return Err(Error::MissingColumnInfo);
        };
        let names = Factory::new(columns.names.iter().map(String::as_str));
        if names.contains_duplicates() {
            return Err(Error::DuplicateColumnName {
                names: names
                    .duplicate_values()
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            });
        }
        Ok(columns)
    }

    /// Single-quoted string literal with embedded quotes doubled.
    fn write_string_literal(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == '\'' {
                out.push_str(&value[position..i]);
                out.push_str("''");
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_create_table(&self, out: &mut String, table: &TableDef) -> Result<()>;

    fn write_insert_select(
        &self,
        out: &mut String,
        target: &TableDef,
        source: &TableDef,
    ) -> Result<()> {
        let columns = self.check_columns(target)?;
        let list = Factory::new(columns.names.iter()).join(", ");
        let _ = write!(
            out,
            "INSERT INTO {} ({})\nSELECT {}\nFROM {};",
            target.qualified_name(),
            list,
            list,
            source.qualified_name()
        );
        Ok(())
    }
}

pub struct HiveSqlWriter {}

impl HiveSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for HiveSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_create_table(&self, out: &mut String, table: &TableDef) -> Result<()> {
        let columns = self.check_columns(table)?;
        let block = Factory::new(columns.names.iter())
            .zip(columns.types.iter())?
            .zip(columns.comments.iter())?
            .map(|((name, ty), comment)| {
                let mut line = format!("\t{}\t{}\tCOMMENT ", name, ty);
                self.write_string_literal(&mut line, comment);
                line
            })
            .join(",\n");
        out.push_str("CREATE TABLE IF NOT EXISTS ");
        out.push_str(&table.qualified_name());
        out.push_str(" (\n");
        out.push_str(&block);
        out.push_str("\n) COMMENT ");
        self.write_string_literal(out, &table.comment);
        let _ = write!(
            out,
            "\nROW FORMAT DELIMITED FIELDS TERMINATED BY '{}'\nSTORED AS {}\n;",
            table.delimiter, table.stored_as
        );
        Ok(())
    }

    // Hive addresses the target with INSERT INTO TABLE and takes no column list.
    fn write_insert_select(
        &self,
        out: &mut String,
        target: &TableDef,
        source: &TableDef,
    ) -> Result<()> {
        let columns = self.check_columns(target)?;
        let list = Factory::new(columns.names.iter()).join(", ");
        let _ = write!(
            out,
            "INSERT INTO TABLE {}\nSELECT {}\nFROM {};",
            target.qualified_name(),
            list,
            source.qualified_name()
        );
        Ok(())
    }
}

pub struct PostgresSqlWriter {}

impl PostgresSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_create_table(&self, out: &mut String, table: &TableDef) -> Result<()> {
        let columns = self.check_columns(table)?;
        let block = Factory::new(columns.names.iter())
            .zip(columns.types.iter())?
            .map(|(name, ty)| format!("\t{}\t{}", name, ty))
            .join(",\n");
        // Comments live outside the CREATE TABLE, one statement per column.
        let comment_block = Factory::new(columns.names.iter())
            .zip(columns.comments.iter())?
            .map(|(name, comment)| {
                let mut line = format!("COMMENT ON COLUMN {}.{} IS ", table.qualified_name(), name);
                self.write_string_literal(&mut line, comment);
                line.push(';');
                line
            })
            .join("\n");
        let _ = write!(
            out,
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);\n",
            table.qualified_name(),
            block
        );
        out.push_str("COMMENT ON TABLE ");
        out.push_str(&table.qualified_name());
        out.push_str(" IS ");
        self.write_string_literal(out, &table.comment);
        out.push_str(";\n");
        out.push_str(&comment_block);
        Ok(())
    }
}
