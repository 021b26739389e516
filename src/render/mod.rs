//! Drawing collaborator interface
//!
//! The game never renders anything itself. World and UI passes describe
//! what to draw through a [`Canvas`]; the host maps texture names to its
//! own GPU resources.

mod canvas;
mod textures;

pub use canvas::{Canvas, DrawCommand, DrawList};
pub use textures::{TextureSet, names};
