//! Gateway + store behavior over the full starter document.

use od_core::{
    ElementId, GraphStore, ImportError, Selection, export_document, import_document,
    starter_document,
};
use pretty_assertions::assert_eq;

#[test]
fn starter_roundtrips_through_the_gateway() {
    let doc = starter_document();
    let json = export_document(&doc);
    let back = import_document(&json).expect("starter export reimports");
    assert_eq!(back, doc);
}

#[test]
fn export_preserves_collection_order() {
    let json = export_document(&starter_document());
    let material = json.find("node-material").expect("first node");
    let composition = json.find("node-composition").expect("second node");
    assert!(material < composition);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["edges"][0]["id"], "edge-1");
    assert_eq!(value["edges"][24]["id"], "edge-25");
}

#[test]
fn truncated_export_is_rejected_without_touching_the_store() {
    let mut store = GraphStore::from_document(starter_document());
    let mut json = export_document(store.document());
    json.truncate(json.len() / 2);

    match import_document(&json) {
        Err(ImportError::Parse(_)) => {}
        other => panic!("expected parse rejection, got {other:?}"),
    }
    // Rejection happened before any replacement: the store still holds the
    // full starter graph.
    assert_eq!(store.nodes().len(), 13);
    assert_eq!(store.edges().len(), 25);

    // And a successful import still replaces wholesale.
    store.replace_document(import_document(r#"{"nodes":[],"edges":[]}"#).unwrap());
    assert!(store.nodes().is_empty());
}

#[test]
fn cascade_holds_across_the_starter_graph() {
    let mut store = GraphStore::from_document(starter_document());
    let material = ElementId::intern("node-material");
    let touching = store
        .edges()
        .iter()
        .filter(|e| e.source == material || e.target == material)
        .count();
    assert!(touching > 0, "fixture should exercise the cascade");

    store.set_selection(Some(Selection::Node(material)));
    store.delete_selected();

    assert_eq!(store.nodes().len(), 12);
    assert_eq!(store.edges().len(), 25 - touching);
    assert!(
        store
            .edges()
            .iter()
            .all(|e| e.source != material && e.target != material)
    );
}
