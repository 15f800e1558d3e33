//! Node repositioning: the press → move → release state machine.
//!
//! Pointer moves arrive far more often than frames render. Moves only
//! buffer the latest target position; the actual store write happens at
//! most once per frame tick, so a burst of moves collapses into one
//! mutation with the last position winning.

use crate::frame::FrameSlot;
use crate::transform::{ViewTransform, canvas_point};
use od_core::model::{Mode, Selection};
use od_core::{ElementId, GraphStore};

/// Drag state for one node. Idle when `node` is `None`.
#[derive(Debug, Default)]
pub struct DragController {
    node: Option<ElementId>,
    /// Pointer-to-node offset at press time, in canvas space, so the node
    /// does not jump to sit centered under the pointer.
    offset: (f64, f64),
    /// Transform captured at press and reused for the whole gesture.
    ctm: Option<ViewTransform>,
    slot: FrameSlot<(f64, f64)>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down on a node while Mode = Select: select it, snapshot the
    /// transform, and record where inside the node the pointer grabbed it.
    pub fn press(
        &mut self,
        store: &mut GraphStore,
        id: ElementId,
        screen: (f64, f64),
        ctm: Option<ViewTransform>,
    ) {
        store.set_selection(Some(Selection::Node(id)));
        self.node = Some(id);
        self.ctm = ctm;
        let at = canvas_point(self.ctm.as_ref(), screen);
        let pos = store.node(id).map(|n| (n.x, n.y)).unwrap_or_default();
        self.offset = (at.0 - pos.0, at.1 - pos.1);
        self.slot.cancel();
        log::trace!("drag {id} from {pos:?}");
    }

    /// Pointer-move: buffer the new target position. Returns true when the
    /// host must request one frame tick. The mode is re-checked on every
    /// move; leaving Select mid-gesture stops updates, though the gesture
    /// itself only ends on release.
    pub fn motion(&mut self, mode: Mode, screen: (f64, f64)) -> bool {
        if self.node.is_none() || mode != Mode::Select {
            return false;
        }
        let at = canvas_point(self.ctm.as_ref(), screen);
        self.slot
            .schedule((at.0 - self.offset.0, at.1 - self.offset.1))
    }

    /// Frame tick: write the latest buffered position to the node. Only
    /// that node's position changes; everything else is untouched.
    pub fn tick(&mut self, store: &mut GraphStore) -> bool {
        let (Some(id), Some((x, y))) = (self.node, self.slot.take()) else {
            return false;
        };
        store.move_node(id, x, y)
    }

    /// Pointer-up (or external reset): cancel any pending update and
    /// discard the gesture's snapshot state.
    pub fn release(&mut self) {
        self.slot.cancel();
        self.node = None;
        self.ctm = None;
        self.offset = (0.0, 0.0);
    }

    pub fn active(&self) -> bool {
        self.node.is_some()
    }
}
