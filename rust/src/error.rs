//! Error handling and result types for BPlusTreeIndex operations.
//!
//! Only `InvalidConfiguration` is part of the normal contract. The other
//! variants report structural damage found by validation.

/// Error type for B+ tree index operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BPlusTreeError {
    /// Invalid order specified at construction.
    InvalidConfiguration(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// A single node breaks a structural rule.
    NodeError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl BPlusTreeError {
    /// Create an InvalidConfiguration error with context
    pub fn invalid_configuration(order: usize, min_required: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a NodeError with context
    pub fn node_error(node_type: &str, node_id: u32, details: &str) -> Self {
        Self::NodeError(format!("{} node {}: {}", node_type, node_id, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

impl std::fmt::Display for BPlusTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BPlusTreeError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            BPlusTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            BPlusTreeError::NodeError(msg) => write!(f, "Node error: {}", msg),
            BPlusTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for BPlusTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, BPlusTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BPlusTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BPlusTreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, BPlusTreeError>;

/// Result extension trait for improved error handling
pub trait BTreeResultExt<T> {
    /// Convert to a BTreeResult with additional context
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> BTreeResultExt<T> for Result<T, BPlusTreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            BPlusTreeError::InvalidConfiguration(msg) => {
                BPlusTreeError::InvalidConfiguration(format!("{}: {}", context, msg))
            }
            BPlusTreeError::DataIntegrityError(msg) => {
                BPlusTreeError::data_integrity(context, &msg)
            }
            BPlusTreeError::NodeError(msg) => {
                BPlusTreeError::NodeError(format!("{}: {}", context, msg))
            }
            BPlusTreeError::CorruptedTree(msg) => BPlusTreeError::corrupted_tree(context, &msg),
        })
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("B+ tree operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = BPlusTreeError::invalid_configuration(2, 3);
        assert!(err.is_configuration_error());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Order 2 is invalid (minimum required: 3)"
        );
    }

    #[test]
    fn test_with_context_keeps_variant() {
        let result: BTreeResult<()> = Err(BPlusTreeError::corrupted_tree("Leaf chain", "cycle"));
        let err = result.with_context("validate").unwrap_err();
        assert_eq!(
            err,
            BPlusTreeError::CorruptedTree("validate corruption: Leaf chain corruption: cycle".into())
        );
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_or_default_with_log() {
        let ok: BTreeResult<u32> = Ok(5);
        assert_eq!(ok.or_default_with_log(), 5);

        let failed: BTreeResult<u32> = Err(BPlusTreeError::data_integrity("insert", "missing leaf"));
        assert_eq!(failed.or_default_with_log(), 0);
    }
}
