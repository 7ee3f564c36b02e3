//! Error handling and result types for RBTreeMap operations.
//!
//! The core map operations never fail: a missing key is reported through
//! `Option`. Errors exist for the checked variants (`try_insert`, `try_remove`,
//! `get_item`) and for the structural validation pass.

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RBTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// A red-black or ordering invariant does not hold.
    DataIntegrityError(String),
    /// Arena operation failed.
    ArenaError(String),
    /// Links between nodes are inconsistent.
    CorruptedTree(String),
}

impl RBTreeError {
    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }
}

impl std::fmt::Display for RBTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RBTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            RBTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            RBTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
            RBTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for RBTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, RBTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, RBTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, RBTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, RBTreeError>;

/// Result extension trait for attaching context to errors
pub trait TreeResultExt<T> {
    /// Convert to a BTreeResult with additional context
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Convert to a BTreeResult with operation context
    fn with_operation(self, operation: &str) -> BTreeResult<T>;
}

impl<T> TreeResultExt<T> for Result<T, RBTreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            RBTreeError::KeyNotFound => RBTreeError::KeyNotFound,
            RBTreeError::DataIntegrityError(msg) => RBTreeError::data_integrity(context, &msg),
            RBTreeError::ArenaError(msg) => RBTreeError::arena_error(context, &msg),
            RBTreeError::CorruptedTree(msg) => RBTreeError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> BTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
