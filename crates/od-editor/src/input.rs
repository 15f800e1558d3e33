//! Input abstraction layer.
//!
//! Normalizes pointer events from the host presentation layer into a
//! unified `InputEvent` consumed by the controllers. Hit-testing stays on
//! the host side: a pointer event arrives together with the id of the node
//! under the pointer, if any.

/// A normalized pointer event in screen-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },
    /// Pointer moved.
    PointerMove { x: f64, y: f64 },
    /// Pointer released, anywhere on the canvas, not just over a node.
    PointerUp { x: f64, y: f64 },
}

impl InputEvent {
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                (*x, *y)
            }
        }
    }
}
