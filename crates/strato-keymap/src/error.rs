use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeymapError>;

/// Errors from building a keyboard layout.
///
/// Only failure to obtain a keymap's text is an error. Per-line conditions
/// (unknown keysym names, malformed lines, a full overflow table, a missing
/// included keymap) are diagnostics and leave the parse running.
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("keymap not found: '{0}'")]
    NotFound(String),

    #[error("error reading keymap '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
