//! JSON import/export gateway.
//!
//! Export is a pure transform of the document; handing the result to the
//! user (download, clipboard) is the host's concern. Import is atomic: the
//! replacement document either decodes completely or the call fails and
//! the existing graph is left untouched.

use crate::model::Document;
use thiserror::Error;

/// Default filename offered for exports.
pub const EXPORT_FILE_NAME: &str = "ontology_schema.json";
/// MIME type of exported documents.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Why an import was rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Not parseable JSON, or entries that do not decode into the model.
    #[error("invalid JSON document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON but not an object carrying both top-level collections.
    #[error("missing top-level `nodes` or `edges` collection")]
    MissingCollections,
}

/// Serialize the document with 2-space indentation, collections in their
/// current order.
pub fn export_document(doc: &Document) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string())
}

/// Parse and validate a replacement document.
///
/// The collection-presence check runs against the raw JSON value first so
/// a document that is well-formed JSON but not a graph export gets the
/// specific [`ImportError::MissingCollections`] rejection rather than a
/// decode error.
pub fn import_document(text: &str) -> Result<Document, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let has_collections = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("nodes") && obj.contains_key("edges"));
    if !has_collections {
        return Err(ImportError::MissingCollections);
    }
    let doc: Document = serde_json::from_value(value)?;
    log::debug!(
        "import: {} nodes, {} edges",
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok(doc)
}
