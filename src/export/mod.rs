//! Export of a loaded [`Dictionary`].
//!
//! # Example
//!
//! ```no_run
//! use vortaro::dictionary::Dictionary;
//! use vortaro::export::{ExportConfig, JsonExporter};
//!
//! let config = ExportConfig { pretty: true, ..ExportConfig::default() };
//! let dictionary = Dictionary::load_dir("revo/xml", &config)?;
//! JsonExporter::with_config(config).write_file(&dictionary, "vortaro.json")?;
//! # Ok::<(), vortaro::Error>(())
//! ```

mod json;

pub use json::JsonExporter;

/// Options shared by loading and writing.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Indent the JSON output.
    pub pretty: bool,
    /// Log and skip files whose records fail instead of aborting the run.
    pub skip_invalid_records: bool,
}
