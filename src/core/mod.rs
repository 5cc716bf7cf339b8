pub mod codec;
pub mod drag;

pub use codec::{decode, encode, paint, Segment};
pub use drag::{step, translate, DragContext, DragState, PointerEvent, PressTarget, RegionChange};
