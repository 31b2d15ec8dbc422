//! Strategy composition
//!
//! Entities are built from independent behavior components instead of a type
//! hierarchy. Every capability is its own trait, behaviors are registered by
//! name, and an entity holds one shared behavior per slot.

pub mod behaviors;
pub mod builder;
pub mod entity;
pub mod registry;

pub use behaviors::*;
pub use builder::*;
pub use entity::*;
pub use registry::BehaviorRegistry;
