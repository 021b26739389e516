//! World-space collision primitives
//!
//! Everything in the room is an axis-aligned box; proximity triggers use
//! center-to-center distance.

mod aabb;

pub use aabb::Aabb;
