//! Font preferences read from a user editable `.properties` file
//!
//! ```no_run
//! use fontprefs::ConfigParser;
//!
//! let mut parser = ConfigParser::with_system_fonts();
//! parser.load_config(fontprefs::config::DEFAULT_FILE_NAME);
//!
//! let font_name = parser.get_font_name("SansSerif");
//! let font_size = parser.get_font_size(12);
//! let antialias = parser.get_boolean("font.antialias", true);
//! ```

pub mod config;
pub mod diagnostic;
pub mod fonts;
pub mod props;
#[cfg(test)]
mod test_utils;

pub use config::ConfigParser;
pub use diagnostic::{Diagnostic, Diagnostics, TracingDiagnostics};
pub use fonts::{FontSource, SystemFont, SystemFontSource};
