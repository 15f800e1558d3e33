//! The graph store: authoritative node/edge collections, selection, mode.
//!
//! Every mutation goes through a method here. Lookups that miss (stale id,
//! out-of-range attribute index) are silent no-ops rather than errors:
//! callers only hand back ids and indices they read from current state, so
//! a miss means the referent was just deleted out from under them.

use crate::id::{EDGE_ID_PREFIX, ElementId, NODE_ID_PREFIX};
use crate::model::{
    AttrKind, AttrList, Attribute, DEFAULT_EDGE_LABEL, DEFAULT_NODE_KIND, DEFAULT_NODE_LABEL,
    Document, Edge, Mode, NODE_COLORS, Node, Selection,
};
use rand::Rng;

/// New nodes spawn inside a small window near the canvas origin so they
/// land on-screen without stacking exactly on top of each other.
const SPAWN_ORIGIN: f64 = 100.0;
const SPAWN_JITTER: f64 = 50.0;

/// Replacement value for a single node field.
#[derive(Debug, Clone)]
pub enum NodeField {
    Label(String),
    Kind(String),
    Color(String),
    /// Wholesale replacement of the attribute schema.
    Attributes(AttrList),
}

/// Replacement value for a single field of one attribute row.
#[derive(Debug, Clone)]
pub enum AttrField {
    Name(String),
    Kind(AttrKind),
    Required(bool),
}

/// Owns the document plus the selection and mode state around it.
#[derive(Debug, Default)]
pub struct GraphStore {
    doc: Document,
    selection: Option<Selection>,
    mode: Mode,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: Document) -> Self {
        Self {
            doc,
            selection: None,
            mode: Mode::Select,
        }
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.doc.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.doc.edges
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn node(&self, id: ElementId) -> Option<&Node> {
        self.doc.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: ElementId) -> Option<&Edge> {
        self.doc.edges.iter().find(|e| e.id == id)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.doc.nodes.iter_mut().find(|n| n.id == id)
    }

    // ─── Node & edge lifecycle ───────────────────────────────────────────

    /// Append a default entity: fresh id, palette color, spawn-window
    /// position, empty schema. Selects it and drops back to Select mode so
    /// the user can immediately drag it into place.
    pub fn add_node(&mut self) -> ElementId {
        let mut rng = rand::thread_rng();
        let id = self.fresh_id(NODE_ID_PREFIX);
        let node = Node {
            id,
            kind: DEFAULT_NODE_KIND.to_string(),
            label: DEFAULT_NODE_LABEL.to_string(),
            x: SPAWN_ORIGIN + rng.gen_range(0.0..SPAWN_JITTER),
            y: SPAWN_ORIGIN + rng.gen_range(0.0..SPAWN_JITTER),
            color: NODE_COLORS[rng.gen_range(0..NODE_COLORS.len())].to_string(),
            attributes: AttrList::new(),
        };
        log::debug!("add node {id}");
        self.doc.nodes.push(node);
        self.selection = Some(Selection::Node(id));
        self.mode = Mode::Select;
        id
    }

    /// Delete whatever is selected. Deleting a node cascades to every edge
    /// that references it from either end; referential integrity is kept by
    /// this cascade, not by validation. No-op when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        match self.selection {
            Some(Selection::Node(id)) => {
                self.doc.nodes.retain(|n| n.id != id);
                self.doc.edges.retain(|e| e.source != id && e.target != id);
            }
            Some(Selection::Edge(id)) => {
                self.doc.edges.retain(|e| e.id != id);
            }
            None => return false,
        }
        self.selection = None;
        true
    }

    /// Create an edge between two nodes with the default relation label.
    /// An edge already connecting the pair in either direction makes this a
    /// silent skip; the duplicate check is undirected. No other validation
    /// happens here; refusing same-node clicks is the connect gesture's job.
    pub fn connect_nodes(&mut self, source: ElementId, target: ElementId) -> Option<ElementId> {
        let duplicate = self.doc.edges.iter().any(|e| {
            (e.source == source && e.target == target)
                || (e.source == target && e.target == source)
        });
        if duplicate {
            log::debug!("skip duplicate edge {source} ↔ {target}");
            return None;
        }
        let id = self.fresh_id(EDGE_ID_PREFIX);
        self.doc.edges.push(Edge {
            id,
            source,
            target,
            label: DEFAULT_EDGE_LABEL.to_string(),
        });
        Some(id)
    }

    // ─── Field updates ───────────────────────────────────────────────────

    /// Reposition one node; the rest of it is untouched. This is the drag
    /// gesture's per-frame write.
    pub fn move_node(&mut self, id: ElementId, x: f64, y: f64) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.x = x;
                node.y = y;
                true
            }
            None => false,
        }
    }

    /// Replace one field of one node.
    pub fn update_node(&mut self, id: ElementId, field: NodeField) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        match field {
            NodeField::Label(label) => node.label = label,
            NodeField::Kind(kind) => node.kind = kind,
            NodeField::Color(color) => node.color = color,
            NodeField::Attributes(attributes) => node.attributes = attributes,
        }
        true
    }

    pub fn update_edge_label(&mut self, id: ElementId, label: impl Into<String>) -> bool {
        match self.doc.edges.iter_mut().find(|e| e.id == id) {
            Some(edge) => {
                edge.label = label.into();
                true
            }
            None => false,
        }
    }

    // ─── Attribute schema ────────────────────────────────────────────────

    /// Append the placeholder row to a node's schema.
    pub fn add_attribute(&mut self, node_id: ElementId) -> bool {
        match self.node_mut(node_id) {
            Some(node) => {
                node.attributes.push(Attribute::placeholder());
                true
            }
            None => false,
        }
    }

    /// Replace one field of the attribute at `index`.
    pub fn update_attribute(&mut self, node_id: ElementId, index: usize, field: AttrField) -> bool {
        let Some(attr) = self
            .node_mut(node_id)
            .and_then(|n| n.attributes.get_mut(index))
        else {
            return false;
        };
        match field {
            AttrField::Name(name) => attr.name = name,
            AttrField::Kind(kind) => attr.kind = kind,
            AttrField::Required(required) => attr.required = required,
        }
        true
    }

    /// Remove the attribute at `index`; later rows shift down by one.
    pub fn remove_attribute(&mut self, node_id: ElementId, index: usize) -> bool {
        match self.node_mut(node_id) {
            Some(node) if index < node.attributes.len() => {
                node.attributes.remove(index);
                true
            }
            _ => false,
        }
    }

    // ─── Selection & mode ────────────────────────────────────────────────

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Import path: the whole document is replaced, never merged, and the
    /// selection is cleared along with the elements it pointed at.
    pub fn replace_document(&mut self, doc: Document) {
        log::debug!(
            "replace document: {} nodes, {} edges",
            doc.nodes.len(),
            doc.edges.len()
        );
        self.doc = doc;
        self.selection = None;
    }

    fn fresh_id(&self, prefix: &str) -> ElementId {
        // Same-millisecond generation can collide; retry until unused.
        loop {
            let id = ElementId::generate(prefix);
            let taken = self.doc.nodes.iter().any(|n| n.id == id)
                || self.doc.edges.iter().any(|e| e.id == id);
            if !taken {
                return id;
            }
        }
    }
}
