//! JSON writer. Words are emitted in collation order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dictionary::{Dictionary, Entry};
use crate::error::Result;

use super::ExportConfig;

/// Map from word to entry that keeps the order it was built with.
struct OrderedEntries<'a>(Vec<&'a Entry>);

impl Serialize for OrderedEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.word, entry)?;
        }
        map.end()
    }
}

/// Writes a dictionary as one JSON object keyed by word.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    config: ExportConfig,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Serialize `dictionary` into `writer`.
    pub fn export<W: Write>(&self, dictionary: &Dictionary, writer: &mut W) -> Result<()> {
        let entries = OrderedEntries(dictionary.sorted());
        if self.config.pretty {
            serde_json::to_writer_pretty(&mut *writer, &entries)?;
        } else {
            serde_json::to_writer(&mut *writer, &entries)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the dictionary to it.
    pub fn write_file(&self, dictionary: &Dictionary, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.export(dictionary, &mut writer)?;
        info!("Wrote {} words to {}", dictionary.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Definition;

    fn sample() -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary.add_entry(Entry::new("ĉielo", "ĉiel", vec![Definition::with_primary("Ĉielo.")]));
        dictionary.add_entry(Entry::new("zorgi", "zorg", vec![]));
        dictionary.add_entry(Entry::new("cent", "cent", vec![]));
        dictionary
    }

    #[test]
    fn test_keys_in_collation_order() {
        let mut out = Vec::new();
        JsonExporter::new().export(&sample(), &mut out).unwrap();
        let json = String::from_utf8(out).unwrap();

        let cent = json.find("\"cent\"").unwrap();
        let cielo = json.find("\"ĉielo\"").unwrap();
        let zorgi = json.find("\"zorgi\"").unwrap();
        assert!(cent < cielo && cielo < zorgi);
    }

    #[test]
    fn test_entry_fields() {
        let mut out = Vec::new();
        JsonExporter::with_config(ExportConfig {
            pretty: true,
            ..ExportConfig::default()
        })
        .export(&sample(), &mut out)
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let cielo = &value["ĉielo"];
        assert_eq!(cielo["root"], "ĉiel");
        assert_eq!(cielo["primary"], true);
        assert_eq!(cielo["definitions"][0]["primary definition"], "Ĉielo.");
        assert_eq!(cielo["definitions"][0]["examples"], serde_json::json!([]));
    }
}
