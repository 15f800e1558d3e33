//! Two-click edge creation.
//!
//! First click on a node arms it as the edge source; the second click
//! completes (or abandons) the gesture. Only active while Mode = Connect.

use od_core::{ElementId, GraphStore};

/// Idle when `source` is `None`, armed otherwise.
#[derive(Debug, Default)]
pub struct ConnectController {
    source: Option<ElementId>,
}

impl ConnectController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down while Mode = Connect. `hit` is the node under the
    /// pointer, or `None` for empty canvas.
    ///
    /// Armed + second node → create the edge unless one already connects
    /// the pair in either direction. Armed + same node, or armed + empty
    /// canvas → abandon. The gesture always disarms after a second click.
    pub fn press(&mut self, store: &mut GraphStore, hit: Option<ElementId>) {
        match (self.source, hit) {
            (None, Some(id)) => {
                log::trace!("connect armed at {id}");
                self.source = Some(id);
            }
            (Some(source), Some(id)) => {
                if source != id {
                    store.connect_nodes(source, id);
                }
                self.source = None;
            }
            (Some(_), None) => self.source = None,
            (None, None) => {}
        }
    }

    /// Disarm. Called whenever Mode leaves Connect, regardless of state.
    pub fn reset(&mut self) {
        self.source = None;
    }

    pub fn source(&self) -> Option<ElementId> {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use od_core::model::{AttrList, DEFAULT_EDGE_LABEL, Document, Node};
    use pretty_assertions::assert_eq;

    fn store(ids: &[&str]) -> GraphStore {
        GraphStore::from_document(Document {
            nodes: ids
                .iter()
                .map(|id| Node {
                    id: ElementId::intern(id),
                    kind: "Entity".to_string(),
                    label: id.to_string(),
                    x: 0.0,
                    y: 0.0,
                    color: "#3b82f6".to_string(),
                    attributes: AttrList::new(),
                })
                .collect(),
            edges: Vec::new(),
        })
    }

    #[test]
    fn two_clicks_create_one_edge() {
        let mut store = store(&["n1", "n2"]);
        let mut connect = ConnectController::new();
        let (n1, n2) = (ElementId::intern("n1"), ElementId::intern("n2"));

        connect.press(&mut store, Some(n1));
        assert_eq!(connect.source(), Some(n1));
        assert!(store.edges().is_empty(), "arming creates nothing yet");

        connect.press(&mut store, Some(n2));
        assert_eq!(connect.source(), None);
        assert_eq!(store.edges().len(), 1);
        let edge = &store.edges()[0];
        assert_eq!(edge.source, n1);
        assert_eq!(edge.target, n2);
        assert_eq!(edge.label, DEFAULT_EDGE_LABEL);
    }

    #[test]
    fn clicking_the_armed_node_abandons() {
        let mut store = store(&["n1"]);
        let mut connect = ConnectController::new();
        let n1 = ElementId::intern("n1");

        connect.press(&mut store, Some(n1));
        connect.press(&mut store, Some(n1));

        assert_eq!(connect.source(), None);
        assert!(store.edges().is_empty());
    }

    #[test]
    fn reverse_duplicate_is_skipped() {
        let mut store = store(&["n1", "n2"]);
        let mut connect = ConnectController::new();
        let (n1, n2) = (ElementId::intern("n1"), ElementId::intern("n2"));

        connect.press(&mut store, Some(n1));
        connect.press(&mut store, Some(n2));
        // Same pair, opposite direction: silently skipped.
        connect.press(&mut store, Some(n2));
        connect.press(&mut store, Some(n1));

        assert_eq!(store.edges().len(), 1);
        assert_eq!(connect.source(), None);
    }

    #[test]
    fn empty_canvas_click_disarms() {
        let mut store = store(&["n1"]);
        let mut connect = ConnectController::new();

        connect.press(&mut store, Some(ElementId::intern("n1")));
        connect.press(&mut store, None);

        assert_eq!(connect.source(), None);
        assert!(store.edges().is_empty());

        // Idle + empty canvas stays idle.
        connect.press(&mut store, None);
        assert_eq!(connect.source(), None);
    }
}
