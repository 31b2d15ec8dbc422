//! Fluent construction of composable entities

use crate::composition::behaviors::{MovementBehavior, VocalizationBehavior};
use crate::composition::entity::ComposableEntity;
use crate::composition::registry::BehaviorRegistry;
use crate::reporter::{NullReporter, Reporter};
use crate::{CatalogError, CatalogResult};
use std::sync::Arc;

/// Entity builder - collects slots, then checks they are all filled
pub struct EntityBuilder {
    name: String,
    movement: Option<Arc<dyn MovementBehavior>>,
    vocalization: Option<Arc<dyn VocalizationBehavior>>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            movement: None,
            vocalization: None,
            reporter: None,
        }
    }

    /// Set the movement behavior
    pub fn with_movement<T: MovementBehavior + 'static>(mut self, behavior: T) -> Self {
        self.movement = Some(Arc::new(behavior));
        self
    }

    /// Set the movement behavior (Arc version)
    pub fn with_movement_arc(mut self, behavior: Arc<dyn MovementBehavior>) -> Self {
        self.movement = Some(behavior);
        self
    }

    /// Set the vocalization behavior
    pub fn with_vocalization<T: VocalizationBehavior + 'static>(mut self, behavior: T) -> Self {
        self.vocalization = Some(Arc::new(behavior));
        self
    }

    /// Set the vocalization behavior (Arc version)
    pub fn with_vocalization_arc(mut self, behavior: Arc<dyn VocalizationBehavior>) -> Self {
        self.vocalization = Some(behavior);
        self
    }

    /// Resolve both slots by name through a registry
    pub fn from_registry(
        mut self,
        registry: &BehaviorRegistry,
        movement: &str,
        vocalization: &str,
    ) -> CatalogResult<Self> {
        self.movement = Some(registry.movement(movement)?);
        self.vocalization = Some(registry.vocalization(vocalization)?);
        Ok(self)
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the entity, failing if a behavior slot was never set.
    ///
    /// A missing reporter falls back to [`NullReporter`].
    pub fn build(self) -> CatalogResult<ComposableEntity> {
        let movement = self
            .movement
            .ok_or(CatalogError::MissingBehavior("movement"))?;
        let vocalization = self
            .vocalization
            .ok_or(CatalogError::MissingBehavior("vocalization"))?;
        let reporter = self.reporter.unwrap_or_else(|| Arc::new(NullReporter));

        Ok(ComposableEntity::new(self.name, movement, vocalization, reporter))
    }
}

/// Shorthand for [`EntityBuilder::new`]
pub fn entity(name: impl Into<String>) -> EntityBuilder {
    EntityBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::behaviors::{FlyWithWings, Quack};
    use crate::composition::registry::{FLY_NO_WAY, SQUEAK};
    use crate::reporter::MemoryReporter;

    #[test]
    fn test_build_requires_both_slots() {
        let missing_vocal = entity("Half duck").with_movement(FlyWithWings).build();
        assert!(matches!(
            missing_vocal,
            Err(CatalogError::MissingBehavior("vocalization"))
        ));

        let missing_move = entity("Other half").with_vocalization(Quack).build();
        assert!(matches!(
            missing_move,
            Err(CatalogError::MissingBehavior("movement"))
        ));
    }

    #[test]
    fn test_build_from_registry() {
        let reporter = MemoryReporter::new();
        let registry = BehaviorRegistry::with_builtins();

        let duck = entity("Rubber duck")
            .from_registry(&registry, FLY_NO_WAY, SQUEAK)
            .unwrap()
            .with_reporter(Arc::new(reporter.clone()))
            .build()
            .unwrap();

        duck.perform_movement();
        duck.perform_vocalization();
        assert_eq!(reporter.lines(), vec!["Cannot fly!", "Rubber ducky squeak."]);
    }

    #[test]
    fn test_registry_miss_propagates() {
        let registry = BehaviorRegistry::with_builtins();
        let result = entity("Robo duck").from_registry(&registry, "jetpack", SQUEAK);
        assert!(matches!(result, Err(CatalogError::UnknownBehavior(_))));
    }

    #[test]
    fn test_default_reporter_is_silent() {
        let duck = entity("Quiet")
            .with_movement(FlyWithWings)
            .with_vocalization(Quack)
            .build()
            .unwrap();
        duck.perform_movement();
        assert_eq!(duck.name(), "Quiet");
    }
}
