//! Source-position identity carried by every [`crate::model::TreeNode`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The source position of a parsed AST node: `(file_path, line, column)`.
///
/// Origins are small value records, freely copied, and carried verbatim
/// through the pipeline. Equality and ordering are derived so an `Origin`
/// can key an [`indexmap::IndexSet`] or be sorted for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Origin {
    /// Path of the source file, as supplied by the caller.
    pub file_path: String,
    /// 1-based (or caller-defined) line number.
    pub line: usize,
    /// 0-based (or caller-defined) column offset.
    pub column: usize,
}

impl Origin {
    /// Construct a new origin.
    pub fn new(file_path: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_file_line_col() {
        let o = Origin::new("src/foo.rs", 10, 4);
        assert_eq!(o.to_string(), "src/foo.rs:10:4");
    }
}
