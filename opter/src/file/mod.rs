//! Discovery and loading of the optional `opter.json` file.
//!
//! The file lives next to the running program. A missing file, an
//! unreadable file, or a file that fails to parse are all treated as "no
//! file"; the latter two are reported through `tracing` only.

mod helpers;
mod loader;

pub use loader::{CONFIG_FILE_NAME, ConfigFileSource, load_config_file, sibling_config_path};
