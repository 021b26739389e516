//! Rooms, doors and moving between them
//!
//! - [`RoomGraph`] - arena of [`Room`]s linked by [`Direction`]
//! - [`DoorController`] - the four doors of whichever room is current
//! - [`RoomFlowManager`] - the transition protocol
//! - [`MapLayout`] - named description a graph is built from

mod direction;
mod door;
mod flow;
mod layout;
mod room;

pub use direction::Direction;
pub use door::{Door, DoorController, Indicator};
pub use flow::{RoomChange, RoomFlowManager};
pub use layout::{BuiltMap, EventSpec, LinkSpec, MapError, MapLayout, RoomSpec};
pub use room::{Room, RoomGraph, RoomId};
