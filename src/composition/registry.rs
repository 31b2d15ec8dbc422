//! Name-keyed lookup of shared behaviors

use crate::composition::behaviors::{
    FlyNoWay, FlyWithWings, MovementBehavior, MuteQuack, Quack, Squeak, VocalizationBehavior,
    movement_behavior, vocalization_behavior,
};
use crate::{CatalogError, CatalogResult};
use std::collections::HashMap;
use std::sync::Arc;

pub const FLY_WITH_WINGS: &str = "fly-with-wings";
pub const FLY_NO_WAY: &str = "fly-no-way";
pub const QUACK: &str = "quack";
pub const SQUEAK: &str = "squeak";
pub const MUTE_QUACK: &str = "mute-quack";

/// Resolves behavior names to shared behavior instances.
///
/// Lookups hand out clones of the registered `Arc`, so every entity bound to
/// `"quack"` shares one stateless `Quack`.
#[derive(Default, Clone)]
pub struct BehaviorRegistry {
    movements: HashMap<String, Arc<dyn MovementBehavior>>,
    vocalizations: HashMap<String, Arc<dyn VocalizationBehavior>>,
}

impl BehaviorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the stock duck behaviors
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_movement(FLY_WITH_WINGS, movement_behavior(FlyWithWings));
        registry.register_movement(FLY_NO_WAY, movement_behavior(FlyNoWay));
        registry.register_vocalization(QUACK, vocalization_behavior(Quack));
        registry.register_vocalization(SQUEAK, vocalization_behavior(Squeak));
        registry.register_vocalization(MUTE_QUACK, vocalization_behavior(MuteQuack));
        registry
    }

    /// Register a movement behavior, returning the one it replaced
    pub fn register_movement(
        &mut self,
        name: impl Into<String>,
        behavior: Arc<dyn MovementBehavior>,
    ) -> Option<Arc<dyn MovementBehavior>> {
        self.movements.insert(name.into(), behavior)
    }

    /// Register a vocalization behavior, returning the one it replaced
    pub fn register_vocalization(
        &mut self,
        name: impl Into<String>,
        behavior: Arc<dyn VocalizationBehavior>,
    ) -> Option<Arc<dyn VocalizationBehavior>> {
        self.vocalizations.insert(name.into(), behavior)
    }

    pub fn movement(&self, name: &str) -> CatalogResult<Arc<dyn MovementBehavior>> {
        self.movements
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBehavior(name.to_string()))
    }

    pub fn vocalization(&self, name: &str) -> CatalogResult<Arc<dyn VocalizationBehavior>> {
        self.vocalizations
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBehavior(name.to_string()))
    }

    /// Registered movement names, sorted
    pub fn movement_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.movements.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registered vocalization names, sorted
    pub fn vocalization_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vocalizations.keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("movements", &self.movement_names())
            .field("vocalizations", &self.vocalization_names())
            .finish()
    }
}
