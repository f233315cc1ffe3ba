//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Connector glyphs and prefix calculation
//! - `formatter` - Colorized `TreeOutput` implementation

mod config;
mod formatter;
mod utils;

pub use config::OutputConfig;
pub use formatter::TreeFormatter;
pub use utils::child_prefix;
