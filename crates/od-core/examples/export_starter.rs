//! Print the starter ontology as export JSON.
//!
//! `cargo run -p od-core --example export_starter > ontology_schema.json`

use od_core::{export_document, starter_document};

fn main() {
    env_logger::init();
    println!("{}", export_document(&starter_document()));
}
