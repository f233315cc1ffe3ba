//! Shared helpers for drawing tree branches

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Prefix for the children of an entry, keeping their connectors aligned
/// beneath their ancestors.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE_INDENT)
    } else {
        format!("{}{}", prefix, PIPE_INDENT)
    }
}
