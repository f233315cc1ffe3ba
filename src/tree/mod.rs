//! Directory tree traversal
//!
//! `TreeRenderer` walks a directory depth-first, drops entries excluded by the
//! ignore rules, and streams the survivors to a `TreeOutput` in sorted order.

mod config;
mod entry;
mod renderer;

pub use config::RenderConfig;
pub use entry::resolve_root;
pub use renderer::{RenderStats, TreeOutput, TreeRenderer};
