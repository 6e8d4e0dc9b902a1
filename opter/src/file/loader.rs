//! Locating and parsing the configuration file.

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Format, Json};
use serde_json::Value;

use super::helpers::{parent_or_dot, read_via_parent};

/// Name of the configuration file looked up next to the program.
pub const CONFIG_FILE_NAME: &str = "opter.json";

/// Where the file layer of the source chain comes from.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum ConfigFileSource {
    /// `opter.json` next to the running executable.
    #[default]
    Sibling,
    /// A file at an explicit path.
    Path(Utf8PathBuf),
    /// Content that has already been parsed.
    Value(Value),
    /// No file layer.
    None,
}

impl ConfigFileSource {
    /// Produces the parsed file content, if any.
    #[must_use]
    pub fn load(self) -> Option<Value> {
        match self {
            Self::Sibling => {
                let entry = current_entry_point()?;
                load_config_file(&sibling_config_path(&entry))
            }
            Self::Path(path) => load_config_file(&path),
            Self::Value(value) => Some(value),
            Self::None => None,
        }
    }
}

fn current_entry_point() -> Option<Utf8PathBuf> {
    let exe = std::env::current_exe()
        .inspect_err(|err| tracing::debug!(error = %err, "cannot locate the running executable"))
        .ok()?;
    Utf8PathBuf::from_path_buf(exe)
        .inspect_err(|path| {
            tracing::debug!(path = %path.display(), "executable path is not valid UTF-8");
        })
        .ok()
}

/// Returns the path of `opter.json` next to `entry`.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use opter::file::sibling_config_path;
///
/// assert_eq!(sibling_config_path(Utf8Path::new("/opt/app/bin/app")), "/opt/app/bin/opter.json");
/// assert_eq!(sibling_config_path(Utf8Path::new("app")), "./opter.json");
/// ```
#[must_use]
pub fn sibling_config_path(entry: &Utf8Path) -> Utf8PathBuf {
    parent_or_dot(entry).join(CONFIG_FILE_NAME)
}

/// Loads a JSON configuration document.
///
/// Returns `None` when the file is missing, unreadable, or not a JSON
/// object.
#[must_use]
pub fn load_config_file(path: &Utf8Path) -> Option<Value> {
    let data = match read_via_parent(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(%path, "no configuration file");
            return None;
        }
        Err(err) => {
            tracing::warn!(%path, error = %err, "ignoring unreadable configuration file");
            return None;
        }
    };
    match Figment::from(Json::string(&data)).extract::<Value>() {
        Ok(value) => {
            tracing::debug!(%path, "loaded configuration file");
            Some(value)
        }
        Err(err) => {
            tracing::warn!(%path, error = %err, "ignoring unparsable configuration file");
            None
        }
    }
}
