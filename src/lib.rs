//! # vortaro
//!
//! Flattens [Reta Vortaro](https://reta-vortaro.de) XML articles into a
//! word-to-definition dictionary, sorted in Esperanto alphabetical order.
//!
//! ## Features
//!
//! - Flatten nested article markup into clean one-line text
//! - Assemble definitions, subdefinitions, examples, remarks, translations
//!   and cross-references per derivation
//! - Merge entries across a whole corpus and mark each root's primary word
//! - Collate strings with the Esperanto alphabet
//! - Export to JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use vortaro::dictionary::Dictionary;
//! use vortaro::export::{ExportConfig, JsonExporter};
//!
//! let config = ExportConfig::default();
//! let dictionary = Dictionary::load_dir("revo/xml", &config)?;
//! JsonExporter::with_config(config).write_file(&dictionary, "vortaro.json")?;
//! # Ok::<(), vortaro::Error>(())
//! ```
//!
//! ## Working with Records
//!
//! ```
//! use vortaro::dictionary::Dictionary;
//!
//! let xml = r#"<art>
//!   <kap><rad>salut</rad>/o</kap>
//!   <drv><kap><tld/>o</kap><snc><dif>Ĝentila vorto ĉe renkonto.</dif></snc></drv>
//! </art>"#;
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.add_document(xml.as_bytes())?;
//!
//! let entry = dictionary.get("saluto").unwrap();
//! assert!(entry.is_primary);
//! assert_eq!(entry.definitions[0].primary.as_deref(), Some("Ĝentila vorto ĉe renkonto."));
//! # Ok::<(), vortaro::Error>(())
//! ```

pub mod collate;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod flatten;
pub mod markup;
pub mod spelling;
pub(crate) mod util;

pub use dictionary::{Definition, Dictionary, Entry, Example};
pub use error::{Error, Result};
pub use export::{ExportConfig, JsonExporter};
