//! Data model for ontology graphs.
//!
//! A document is two flat ordered collections: entity nodes positioned in
//! canvas space, and directed labeled edges referencing nodes by id. Each
//! node carries an ordered attribute schema (name / data type / required).
//! Attributes have no identity of their own; they are addressed by index
//! within their owning node.

use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Attributes ──────────────────────────────────────────────────────────

/// The closed set of attribute data types. Serialized under exactly these
/// names; the same list populates the property panel's type dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttrKind {
    #[default]
    String,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Array,
    Object,
}

impl AttrKind {
    pub const ALL: [AttrKind; 7] = [
        AttrKind::String,
        AttrKind::Integer,
        AttrKind::Double,
        AttrKind::Boolean,
        AttrKind::Timestamp,
        AttrKind::Array,
        AttrKind::Object,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AttrKind::String => "String",
            AttrKind::Integer => "Integer",
            AttrKind::Double => "Double",
            AttrKind::Boolean => "Boolean",
            AttrKind::Timestamp => "Timestamp",
            AttrKind::Array => "Array",
            AttrKind::Object => "Object",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// One row of a node's attribute schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttrKind,
    pub required: bool,
}

impl Attribute {
    /// The row appended by the property panel's "add attribute" action.
    pub fn placeholder() -> Self {
        Self {
            name: "new_attr".to_string(),
            kind: AttrKind::String,
            required: false,
        }
    }
}

/// Most entities carry a handful of attributes; keep them inline.
pub type AttrList = SmallVec<[Attribute; 4]>;

// ─── Nodes & edges ───────────────────────────────────────────────────────

/// An entity node. `x`/`y` are canvas-space coordinates, independent of
/// the viewport's pan/zoom. `color` is opaque to the core; the
/// presentation layer decides what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub attributes: AttrList,
}

/// A directed, labeled relation between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: ElementId,
    pub source: ElementId,
    pub target: ElementId,
    pub label: String,
}

/// The unit of import/export: the whole graph, collections in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

// ─── Interaction state ───────────────────────────────────────────────────

/// The current interaction intent, governing pointer-down interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Select,
    Connect,
}

/// At most one element is selected at a time. A selection is a weak
/// reference: deleting the referent clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Node(ElementId),
    Edge(ElementId),
}

impl Selection {
    pub fn id(&self) -> ElementId {
        match self {
            Selection::Node(id) | Selection::Edge(id) => *id,
        }
    }
}

// ─── Defaults ────────────────────────────────────────────────────────────

/// Palette new nodes draw their display color from.
pub const NODE_COLORS: [&str; 7] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#6366f1",
];

/// Label given to edges created by the connect gesture.
pub const DEFAULT_EDGE_LABEL: &str = "关系";
/// Label given to freshly added nodes.
pub const DEFAULT_NODE_LABEL: &str = "新实体";
/// Type given to freshly added nodes.
pub const DEFAULT_NODE_KIND: &str = "NewEntity";
