//! Worldforge, a deterministic campaign world generation and evolution engine.
//!
//! Turns a small human-authored seed (title, description, style knobs) into a
//! complete, internally consistent campaign world, advances that world in
//! response to player actions, and binds new characters into existing worlds.
//! The same input and seed always yield byte-identical output, so callers can
//! cache generation, diff user edits, and snapshot-test the engine.

pub mod core;
pub mod rng;
pub mod schema;

pub use crate::core::assembler::forge_campaign;
pub use crate::core::character::forge_character;
pub use crate::core::evolution::{advance_campaign, advance_world};
pub use crate::core::merge::merge_character;
pub use crate::core::ForgeError;
