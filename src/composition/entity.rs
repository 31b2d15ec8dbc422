//! Entities assembled from behavior slots
//!
//! An entity owns no behavior code of its own. It holds one shared behavior
//! per slot and forwards each `perform_*` call to whatever is bound at the
//! time of the call.

use crate::composition::behaviors::{MovementBehavior, VocalizationBehavior};
use crate::reporter::Reporter;
use std::sync::Arc;

/// Entity with a movement slot and a vocalization slot.
///
/// Both slots are always populated: the constructor takes both behaviors and
/// the setters only ever substitute a full behavior.
pub struct ComposableEntity {
    name: String,
    movement: Arc<dyn MovementBehavior>,
    vocalization: Arc<dyn VocalizationBehavior>,
    reporter: Arc<dyn Reporter>,
}

impl ComposableEntity {
    /// Create a new entity with both slots bound
    pub fn new(
        name: impl Into<String>,
        movement: Arc<dyn MovementBehavior>,
        vocalization: Arc<dyn VocalizationBehavior>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            name: name.into(),
            movement,
            vocalization,
            reporter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the currently bound movement behavior
    pub fn perform_movement(&self) {
        self.movement.perform(&*self.reporter);
    }

    /// Run the currently bound vocalization behavior
    pub fn perform_vocalization(&self) {
        self.vocalization.perform(&*self.reporter);
    }

    /// Swap the movement behavior; takes effect on the next `perform_movement`
    pub fn set_movement_behavior(&mut self, movement: Arc<dyn MovementBehavior>) {
        tracing::debug!(entity = %self.name, "movement behavior replaced");
        self.movement = movement;
    }

    /// Swap the vocalization behavior; takes effect on the next `perform_vocalization`
    pub fn set_vocalization_behavior(&mut self, vocalization: Arc<dyn VocalizationBehavior>) {
        tracing::debug!(entity = %self.name, "vocalization behavior replaced");
        self.vocalization = vocalization;
    }

    /// Replace the movement behavior (consumes the entity, returns the new one)
    pub fn with_movement_behavior(mut self, movement: Arc<dyn MovementBehavior>) -> Self {
        self.set_movement_behavior(movement);
        self
    }

    /// Replace the vocalization behavior (consumes the entity, returns the new one)
    pub fn with_vocalization_behavior(
        mut self,
        vocalization: Arc<dyn VocalizationBehavior>,
    ) -> Self {
        self.set_vocalization_behavior(vocalization);
        self
    }

    pub fn movement_behavior(&self) -> &dyn MovementBehavior {
        &*self.movement
    }

    pub fn vocalization_behavior(&self) -> &dyn VocalizationBehavior {
        &*self.vocalization
    }

    pub fn reporter(&self) -> &Arc<dyn Reporter> {
        &self.reporter
    }
}

impl std::fmt::Debug for ComposableEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposableEntity")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
