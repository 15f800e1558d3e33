//! The editor session: what the presentation layer talks to.
//!
//! Owns the store and both gesture controllers, routes pointer events by
//! the current mode, and carries the cross-component side effects (mode
//! switches disarm the connect gesture, imports reset in-flight gestures).
//! Everything here is synchronous; the only host callback is the frame
//! tick requested by [`EditorSession::pointer_move`].

use crate::connect::ConnectController;
use crate::drag::DragController;
use crate::input::InputEvent;
use crate::transform::ViewTransform;
use od_core::model::{Edge, Mode, Node, Selection};
use od_core::{ElementId, GraphStore, ImportError, export_document, import_document};

#[derive(Debug, Default)]
pub struct EditorSession {
    store: GraphStore,
    drag: DragController,
    connect: ConnectController,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: od_core::model::Document) -> Self {
        Self {
            store: GraphStore::from_document(doc),
            drag: DragController::new(),
            connect: ConnectController::new(),
        }
    }

    // ─── Pointer lifecycle ───────────────────────────────────────────────

    /// Route a pointer event. `hit` is the host's hit-test result for
    /// down events; `ctm` is the host's live canvas transform, captured
    /// here as the gesture's snapshot. Returns true when the host must
    /// schedule one frame tick (see [`Self::on_frame`]).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hit: Option<ElementId>,
        ctm: Option<ViewTransform>,
    ) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down(x, y, hit, ctm);
                false
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { .. } => {
                self.pointer_up();
                false
            }
        }
    }

    /// Pointer-down, interpreted by mode. A press on empty canvas clears
    /// the selection in both modes and disarms an in-progress connect.
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        hit: Option<ElementId>,
        ctm: Option<ViewTransform>,
    ) {
        match (self.store.mode(), hit) {
            (Mode::Connect, hit) => {
                if hit.is_none() {
                    self.store.set_selection(None);
                }
                self.connect.press(&mut self.store, hit);
            }
            (Mode::Select, Some(id)) => self.drag.press(&mut self.store, id, (x, y), ctm),
            (Mode::Select, None) => self.store.set_selection(None),
        }
    }

    /// Returns true when the host must schedule one frame tick.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.drag.motion(self.store.mode(), (x, y))
    }

    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    /// Frame tick: applies the latest coalesced drag position, if any.
    /// Returns true when the store changed (the host should re-render).
    pub fn on_frame(&mut self) -> bool {
        self.drag.tick(&mut self.store)
    }

    // ─── Mode & toolbar operations ───────────────────────────────────────

    /// Switch interaction mode. Leaving Connect always disarms the
    /// in-progress gesture, whichever state it was in.
    pub fn set_mode(&mut self, mode: Mode) {
        self.store.set_mode(mode);
        if mode != Mode::Connect {
            self.connect.reset();
        }
    }

    /// Add a default entity. The store drops back to Select mode, so the
    /// armed connect source is cleared here as well.
    pub fn add_node(&mut self) -> ElementId {
        let id = self.store.add_node();
        self.connect.reset();
        id
    }

    pub fn delete_selected(&mut self) -> bool {
        self.store.delete_selected()
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.store.set_selection(selection);
    }

    // ─── Import / export ─────────────────────────────────────────────────

    pub fn export_json(&self) -> String {
        export_document(self.store.document())
    }

    /// Atomic wholesale replacement. On success the selection is cleared
    /// by the store and any in-flight gesture state is reset, since the
    /// ids it referenced may no longer exist. On failure nothing changes.
    pub fn import_json(&mut self, text: &str) -> Result<(), ImportError> {
        let doc = import_document(text)?;
        self.store.replace_document(doc);
        self.connect.reset();
        self.drag.release();
        Ok(())
    }

    // ─── Presentation reads ──────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        self.store.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.store.edges()
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.store.selection()
    }

    pub fn connect_source(&self) -> Option<ElementId> {
        self.connect.source()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active()
    }

    /// Direct store access for the property-panel operations (field and
    /// attribute updates), which need no gesture coordination.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use od_core::model::{AttrList, Document, Node};
    use od_core::starter_document;
    use pretty_assertions::assert_eq;

    fn session_with(ids: &[&str]) -> EditorSession {
        EditorSession::with_document(Document {
            nodes: ids
                .iter()
                .enumerate()
                .map(|(i, id)| Node {
                    id: ElementId::intern(id),
                    kind: "Entity".to_string(),
                    label: id.to_string(),
                    x: i as f64 * 100.0,
                    y: 0.0,
                    color: "#3b82f6".to_string(),
                    attributes: AttrList::new(),
                })
                .collect(),
            edges: Vec::new(),
        })
    }

    #[test]
    fn add_node_scenario() {
        let mut session = session_with(&["n1"]);
        let id = session.add_node();

        assert_eq!(session.nodes().len(), 2);
        assert_eq!(session.selection(), Some(Selection::Node(id)));
        assert!(id.as_str().starts_with("node-"));
        assert_eq!(session.mode(), Mode::Select);
    }

    #[test]
    fn connect_scenario() {
        let mut session = session_with(&["n1", "n2"]);
        let (n1, n2) = (ElementId::intern("n1"), ElementId::intern("n2"));
        session.set_mode(Mode::Connect);

        session.pointer_down(0.0, 0.0, Some(n1), None);
        assert_eq!(session.connect_source(), Some(n1));

        session.pointer_down(100.0, 0.0, Some(n2), None);
        assert_eq!(session.connect_source(), None);
        assert_eq!(session.edges().len(), 1);
        let edge = &session.edges()[0];
        assert_eq!((edge.source, edge.target), (n1, n2));
        assert_eq!(edge.label, "关系");
    }

    #[test]
    fn switching_mode_clears_the_armed_source() {
        let mut session = session_with(&["n1", "n2"]);
        session.set_mode(Mode::Connect);
        session.pointer_down(0.0, 0.0, Some(ElementId::intern("n1")), None);
        assert!(session.connect_source().is_some());

        session.set_mode(Mode::Select);
        assert_eq!(session.connect_source(), None);
    }

    #[test]
    fn add_node_disarms_and_leaves_connect_mode() {
        let mut session = session_with(&["n1"]);
        session.set_mode(Mode::Connect);
        session.pointer_down(0.0, 0.0, Some(ElementId::intern("n1")), None);

        session.add_node();

        assert_eq!(session.mode(), Mode::Select);
        assert_eq!(session.connect_source(), None);
    }

    #[test]
    fn empty_canvas_press_clears_selection_in_both_modes() {
        let mut session = session_with(&["n1"]);
        let n1 = ElementId::intern("n1");

        session.pointer_down(0.0, 0.0, Some(n1), None);
        assert_eq!(session.selection(), Some(Selection::Node(n1)));
        session.pointer_up();
        session.pointer_down(900.0, 900.0, None, None);
        assert_eq!(session.selection(), None);

        session.set_mode(Mode::Connect);
        session.pointer_down(0.0, 0.0, Some(n1), None);
        session.set_selection(Some(Selection::Node(n1)));
        session.pointer_down(900.0, 900.0, None, None);
        assert_eq!(session.selection(), None);
        assert_eq!(session.connect_source(), None);
    }

    #[test]
    fn import_resets_gesture_state() {
        let mut session = session_with(&["n1"]);
        session.set_mode(Mode::Connect);
        session.pointer_down(0.0, 0.0, Some(ElementId::intern("n1")), None);
        assert!(session.connect_source().is_some());

        session
            .import_json(r#"{"nodes":[],"edges":[]}"#)
            .expect("import");

        assert_eq!(session.connect_source(), None);
        assert!(!session.is_dragging());
        assert!(session.nodes().is_empty());
        assert_eq!(session.selection(), None);
        // The mode itself is untouched by an import.
        assert_eq!(session.mode(), Mode::Connect);
    }

    #[test]
    fn failed_import_changes_nothing() {
        let mut session = EditorSession::with_document(starter_document());
        session.set_selection(Some(Selection::Node(ElementId::intern("node-material"))));

        assert!(session.import_json("{ broken").is_err());
        assert!(session.import_json(r#"{"nodes":[]}"#).is_err());

        assert_eq!(session.nodes().len(), 13);
        assert_eq!(session.edges().len(), 25);
        assert!(session.selection().is_some());
    }
}
