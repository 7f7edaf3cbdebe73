use serde::de::DeserializeOwned;

use crate::error::DataError;

/// A YAML-backed reference table with a fixed schema.
pub(crate) trait ReferenceTable: DeserializeOwned {
    /// Table name, also the file stem under the data directory.
    const NAME: &'static str;

    /// Content rules that the schema alone cannot express.
    fn validate(&self) -> Result<(), DataError>;
}

/// Parse and validate one table. Never returns a partially valid table.
pub(crate) fn parse_table<T: ReferenceTable>(raw: &str) -> Result<T, DataError> {
    let table: T = serde_yaml::from_str(raw).map_err(|source| DataError::Parse {
        table: T::NAME,
        source,
    })?;
    table.validate()?;
    Ok(table)
}

pub(crate) fn require_rows<R>(
    table: &'static str,
    column: &str,
    rows: &[R],
) -> Result<(), DataError> {
    if rows.is_empty() {
        return Err(DataError::invalid(table, format!("`{column}` has no rows")));
    }
    Ok(())
}

pub(crate) fn require_non_empty(
    table: &'static str,
    field: &str,
    value: &str,
) -> Result<(), DataError> {
    if value.trim().is_empty() {
        return Err(DataError::invalid(table, format!("`{field}` is blank")));
    }
    Ok(())
}
