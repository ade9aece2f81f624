use alloc::string::String;

/// Errors reported when a table is configured with inconsistent inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same `key`.
    #[error("duplicate column key '{key}'")]
    DuplicateColumnKey { key: String },

    /// `expand_column_key` names a column that does not exist.
    #[error("expand column '{key}' is not one of the table columns")]
    UnknownExpandColumn { key: String },
}

impl TableError {
    pub fn duplicate_column_key(key: impl Into<String>) -> Self {
        Self::DuplicateColumnKey { key: key.into() }
    }

    pub fn unknown_expand_column(key: impl Into<String>) -> Self {
        Self::UnknownExpandColumn { key: key.into() }
    }
}
