use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("column '{name}' has {found} values, expected {expected}")]
    RaggedColumn {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },
}

pub type Result<T> = std::result::Result<T, TableError>;
