pub mod connect;
pub mod drag;
pub mod frame;
pub mod input;
pub mod session;
pub mod transform;

pub use connect::ConnectController;
pub use drag::DragController;
pub use frame::FrameSlot;
pub use input::InputEvent;
pub use session::EditorSession;
pub use transform::{ViewTransform, canvas_point};
