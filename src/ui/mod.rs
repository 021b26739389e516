//! UI-space layout
//!
//! UI coordinates are pixels on a fixed virtual canvas, origin top-left,
//! y pointing down. The host projects the pointer into this space.

mod rect;

pub use rect::{Rect, RectStyle};
