//! Entry extraction and corpus aggregation.
//!
//! Each `<art>` record shares one root (its first `<rad>`). Every `<drv>`
//! inside it becomes one [`Entry`] per headword spelling. Entries are keyed
//! by word across the whole corpus: a word seen again gets the new
//! definitions appended, and the first entry seen for a root is marked
//! primary.

mod assembly;
mod examples;
mod model;
mod references;
mod translations;
mod words;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::collate::sort_key;
use crate::error::{Error, Result};
use crate::export::ExportConfig;
use crate::flatten::Flattener;
use crate::markup::{MarkupNode, Tag, parse_document};

pub use model::{Definition, Entry, Example, Subdefinition, Translations};
pub use references::CrossReferences;
pub use words::{article_root, words_from_headword};

/// What every collector needs while working inside one `<drv>`.
pub(crate) struct EntryContext<'a> {
    pub(crate) flattener: Flattener<'a>,
    /// First spelling of the entry, for diagnostics.
    pub(crate) headword: &'a str,
}

impl<'a> EntryContext<'a> {
    pub(crate) fn new(flattener: Flattener<'a>, headword: &'a str) -> Self {
        Self {
            flattener,
            headword,
        }
    }
}

/// Build every entry of one record without touching any shared state.
///
/// Fails as a whole if any of its derivations fails.
pub fn record_entries(record: &MarkupNode) -> Result<Vec<Entry>> {
    let root = article_root(record)?;
    let flattener = Flattener::new(&root);
    let mut entries = Vec::new();

    for drv in record.descendants().filter(|node| node.tag == Tag::Entry) {
        let kap = drv
            .child(Tag::Headword)
            .ok_or_else(|| Error::MissingElement("kap".to_string()))?;

        let words = words_from_headword(kap, &flattener);
        let Some(headword) = words.first() else {
            warn!("Skipping derivation of root {root:?} with an empty headword");
            continue;
        };

        let ctx = EntryContext::new(flattener, headword);
        let definitions = assembly::entry_definitions(drv, &ctx)?;

        for word in &words {
            entries.push(Entry::new(word.as_str(), root.as_str(), definitions.clone()));
        }
    }

    Ok(entries)
}

/// Records of a parsed document: its `<art>` elements, or the document
/// itself when it has none.
fn records(document: &MarkupNode) -> Vec<&MarkupNode> {
    if document.tag == Tag::Article {
        return vec![document];
    }
    let articles: Vec<&MarkupNode> = document
        .descendants()
        .filter(|node| node.tag == Tag::Article)
        .collect();
    if articles.is_empty() {
        vec![document]
    } else {
        articles
    }
}

/// All entries of a corpus, keyed by word.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Entry>,
    roots_seen: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.xml` file in `dir`, in file name order.
    ///
    /// The order decides which entry becomes primary for its root, so it
    /// is fixed. A file that fails is skipped with a warning when
    /// `config.skip_invalid_records` is set; otherwise loading stops.
    pub fn load_dir(dir: impl AsRef<Path>, config: &ExportConfig) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "xml"))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        info!("Reading {} files from {}", files.len(), dir.display());

        let mut dictionary = Self::new();
        for path in &files {
            let bytes = fs::read(path)?;
            match dictionary.add_document(&bytes) {
                Ok(count) => debug!("{}: {count} entries", path.display()),
                Err(e) if config.skip_invalid_records => {
                    warn!("Skipping {}: {e}", path.display());
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Loaded {} words from {} roots",
            dictionary.len(),
            dictionary.roots_seen.len()
        );
        Ok(dictionary)
    }

    /// Parse a document and add all of its records. Returns the number of
    /// entries added.
    pub fn add_document(&mut self, bytes: &[u8]) -> Result<usize> {
        let document = parse_document(bytes)?;
        let mut count = 0;
        for record in records(&document) {
            count += self.add_record(record)?;
        }
        Ok(count)
    }

    /// Add the entries of one `<art>`. Nothing is added if the record
    /// fails.
    pub fn add_record(&mut self, record: &MarkupNode) -> Result<usize> {
        let entries = record_entries(record)?;
        let count = entries.len();
        for entry in entries {
            self.add_entry(entry);
        }
        Ok(count)
    }

    /// Insert `entry`, or append its definitions to the entry already
    /// holding its word.
    pub fn add_entry(&mut self, mut entry: Entry) {
        match self.entries.get_mut(&entry.word) {
            Some(existing) => existing.definitions.append(&mut entry.definitions),
            None => {
                entry.is_primary = self.roots_seen.insert(entry.root.clone());
                self.entries.insert(entry.word.clone(), entry);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Entries in collation order. Words differing only in case are
    /// ordered by code point.
    pub fn sorted(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by_cached_key(|entry| (sort_key(&entry.word), entry.word.clone()));
        entries
    }
}
