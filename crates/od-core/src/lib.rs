pub mod id;
pub mod io;
pub mod model;
pub mod starter;
pub mod store;

pub use id::ElementId;
pub use io::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE, ImportError, export_document, import_document};
pub use model::*;
pub use starter::starter_document;
pub use store::{AttrField, GraphStore, NodeField};
