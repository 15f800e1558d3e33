//! WASM bridge exposing the ontology editor session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The JS side owns
//! rendering, hit-testing, the file picker, and frame timing; it feeds
//! pointer events in and reads state back as JSON strings.
//!
//! Frame protocol: when `pointer_move` returns `true`, the caller
//! requests one `requestAnimationFrame` callback and calls `on_frame`
//! from it. Further moves before that callback coalesce into it.

use od_core::model::{AttrKind, Attribute, Mode, Selection};
use od_core::{
    AttrField, ElementId, EXPORT_FILE_NAME, EXPORT_MIME_TYPE, NodeField, starter_document,
};
use od_editor::{EditorSession, ViewTransform};
use wasm_bindgen::prelude::*;

/// The main WASM-facing editor controller.
///
/// Holds the session; all interaction from the page goes through this
/// struct.
#[wasm_bindgen]
pub struct OntoCanvas {
    session: EditorSession,
}

#[wasm_bindgen]
impl OntoCanvas {
    /// Create a controller opened on the materials-science starter
    /// ontology.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        panic_hook_setup();
        Self {
            session: EditorSession::with_document(starter_document()),
        }
    }

    /// Create a controller with an empty document.
    pub fn empty() -> OntoCanvas {
        panic_hook_setup();
        OntoCanvas {
            session: EditorSession::new(),
        }
    }

    // ─── Pointer lifecycle ───────────────────────────────────────────────

    /// Pointer pressed. `hit_id` is the hit-tested node id ("" for empty
    /// canvas). The four transform components are the canvas CTM captured
    /// this instant (`a`, `d`, `e`, `f` of `getScreenCTM()`), which
    /// becomes the snapshot for the whole gesture.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        hit_id: &str,
        scale_x: f64,
        scale_y: f64,
        translate_x: f64,
        translate_y: f64,
    ) {
        let ctm = ViewTransform {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        };
        self.session.pointer_down(x, y, hit(hit_id), Some(ctm));
    }

    /// Pointer pressed before the canvas transform is available (not yet
    /// mounted). Canvas positions fall back to the origin.
    pub fn pointer_down_untransformed(&mut self, x: f64, y: f64, hit_id: &str) {
        self.session.pointer_down(x, y, hit(hit_id), None);
    }

    /// Pointer moved. Returns `true` when the caller must request one
    /// animation frame and call [`Self::on_frame`] from it.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(x, y)
    }

    /// Pointer released, anywhere on the canvas.
    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    /// Animation-frame callback. Returns `true` when the document changed
    /// and the page should re-render.
    pub fn on_frame(&mut self) -> bool {
        self.session.on_frame()
    }

    // ─── Mode & toolbar ──────────────────────────────────────────────────

    /// Switch the interaction mode: "select" or "connect" (anything else
    /// falls back to select).
    pub fn set_mode(&mut self, name: &str) {
        let mode = match name {
            "connect" => Mode::Connect,
            _ => Mode::Select,
        };
        self.session.set_mode(mode);
    }

    pub fn mode(&self) -> String {
        match self.session.mode() {
            Mode::Select => "select",
            Mode::Connect => "connect",
        }
        .to_string()
    }

    /// Add a default entity and return its id.
    pub fn add_node(&mut self) -> String {
        self.session.add_node().as_str().to_string()
    }

    /// Delete the selected element. Returns `true` if anything was
    /// deleted.
    pub fn delete_selected(&mut self) -> bool {
        self.session.delete_selected()
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Select a node by id. Returns `true` if the node exists.
    pub fn select_node(&mut self, id: &str) -> bool {
        let id = ElementId::intern(id);
        if self.session.store().node(id).is_none() {
            return false;
        }
        self.session.set_selection(Some(Selection::Node(id)));
        true
    }

    /// Select an edge by id. Returns `true` if the edge exists.
    pub fn select_edge(&mut self, id: &str) -> bool {
        let id = ElementId::intern(id);
        if self.session.store().edge(id).is_none() {
            return false;
        }
        self.session.set_selection(Some(Selection::Edge(id)));
        true
    }

    pub fn clear_selection(&mut self) {
        self.session.set_selection(None);
    }

    /// The current selection as `{"kind":"node"|"edge","id":"..."}`, or
    /// `null`.
    pub fn selection_json(&self) -> String {
        match self.session.selection() {
            Some(Selection::Node(id)) => {
                serde_json::json!({ "kind": "node", "id": id.as_str() }).to_string()
            }
            Some(Selection::Edge(id)) => {
                serde_json::json!({ "kind": "edge", "id": id.as_str() }).to_string()
            }
            None => "null".to_string(),
        }
    }

    /// The armed connect source id, or "".
    pub fn connect_source(&self) -> String {
        self.session
            .connect_source()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    // ─── State reads ─────────────────────────────────────────────────────

    pub fn nodes_json(&self) -> String {
        serde_json::to_string(self.session.nodes()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn edges_json(&self) -> String {
        serde_json::to_string(self.session.edges()).unwrap_or_else(|_| "[]".to_string())
    }

    /// The attribute type names, for populating the type dropdown.
    pub fn attr_kinds_json(&self) -> String {
        let names: Vec<&str> = AttrKind::ALL.iter().map(|k| k.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    // ─── Import / export ─────────────────────────────────────────────────

    /// The full document as pretty-printed export JSON.
    pub fn export_json(&self) -> String {
        self.session.export_json()
    }

    pub fn export_file_name(&self) -> String {
        EXPORT_FILE_NAME.to_string()
    }

    pub fn export_mime_type(&self) -> String {
        EXPORT_MIME_TYPE.to_string()
    }

    /// Replace the document from import JSON. Returns
    /// `{"ok":true}` or `{"ok":false,"error":"..."}`; on failure the
    /// current document is untouched.
    pub fn import_json(&mut self, text: &str) -> String {
        match self.session.import_json(text) {
            Ok(()) => serde_json::json!({ "ok": true }).to_string(),
            Err(e) => {
                log::debug!("import rejected: {e}");
                serde_json::json!({ "ok": false, "error": e.to_string() }).to_string()
            }
        }
    }

    // ─── Property panel ──────────────────────────────────────────────────

    /// Set a node property: key is "label", "type", or "color". Returns
    /// `true` if the node exists and the key is known.
    pub fn set_node_prop(&mut self, id: &str, key: &str, value: &str) -> bool {
        let id = ElementId::intern(id);
        let field = match key {
            "label" => NodeField::Label(value.to_string()),
            "type" => NodeField::Kind(value.to_string()),
            "color" => NodeField::Color(value.to_string()),
            _ => return false,
        };
        self.session.store_mut().update_node(id, field)
    }

    /// Replace a node's whole attribute schema from a JSON array.
    pub fn set_attributes_json(&mut self, id: &str, json: &str) -> bool {
        let attrs: Vec<Attribute> = match serde_json::from_str(json) {
            Ok(a) => a,
            Err(_) => return false,
        };
        self.session
            .store_mut()
            .update_node(ElementId::intern(id), NodeField::Attributes(attrs.into()))
    }

    pub fn set_edge_label(&mut self, id: &str, label: &str) -> bool {
        self.session
            .store_mut()
            .update_edge_label(ElementId::intern(id), label)
    }

    /// Append the placeholder attribute row to a node.
    pub fn add_attribute(&mut self, node_id: &str) -> bool {
        self.session
            .store_mut()
            .add_attribute(ElementId::intern(node_id))
    }

    /// Set one field of one attribute row: key is "name", "type", or
    /// "required" ("true"/"false"). Unknown type names are rejected.
    pub fn set_attribute_prop(&mut self, node_id: &str, index: u32, key: &str, value: &str) -> bool {
        let field = match key {
            "name" => AttrField::Name(value.to_string()),
            "type" => match AttrKind::parse(value) {
                Some(kind) => AttrField::Kind(kind),
                None => return false,
            },
            "required" => AttrField::Required(value == "true"),
            _ => return false,
        };
        self.session
            .store_mut()
            .update_attribute(ElementId::intern(node_id), index as usize, field)
    }

    pub fn remove_attribute(&mut self, node_id: &str, index: u32) -> bool {
        self.session
            .store_mut()
            .remove_attribute(ElementId::intern(node_id), index as usize)
    }
}

impl Default for OntoCanvas {
    fn default() -> Self {
        Self::new()
    }
}

fn hit(id: &str) -> Option<ElementId> {
    if id.is_empty() {
        None
    } else {
        Some(ElementId::intern(id))
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("od-wasm panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
