//! Error types for vortaro operations.

use thiserror::Error;

/// Errors that can occur while reading articles or exporting the dictionary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// A `ref`/`refgrp` carries a relation kind outside the known vocabulary.
    #[error("Unknown cross-reference kind {kind:?} in entry {headword:?}")]
    UnknownRelation { kind: String, headword: String },

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Element <{element}> is missing required attribute {attribute:?}")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
