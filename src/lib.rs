//! # Catalog Composer
//!
//! A small product-composition engine. Catalog items (beverages, pizzas,
//! simulated ducks) get their runtime behavior from swappable parts instead
//! of a type per variant:
//!
//! - **Strategy injection** ([`composition`]): an entity holds shared behavior
//!   objects in slots and can have them replaced at runtime.
//! - **Decorator chaining** ([`decorator`]): a priceable item is wrapped by any
//!   number of links, each adding a fixed cost and description suffix.
//! - **Factory dispatch** ([`factory`]): a creator resolves a type key to a
//!   product and runs it through a fixed prepare → bake → cut → box
//!   lifecycle.
//!
//! All user-visible output goes through an injected [`Reporter`].
//!
//! ## Example
//!
//! ```rust
//! use catalog_composer::prelude::*;
//! use std::sync::Arc;
//!
//! let reporter = MemoryReporter::new();
//!
//! let mut duck = EntityBuilder::new("Mallard")
//!     .with_movement(FlyWithWings)
//!     .with_vocalization(Quack)
//!     .with_reporter(Arc::new(reporter.clone()))
//!     .build()
//!     .unwrap();
//! duck.perform_movement();
//! duck.set_movement_behavior(movement_behavior(FlyNoWay));
//! duck.perform_movement();
//! assert_eq!(reporter.lines(), vec!["Regular fly with wings", "Cannot fly!"]);
//!
//! let coffee = mocha(milk(Beverage::house_blend()));
//! assert_eq!(coffee.cost(), Price::from_cents(234));
//!
//! let store = PizzaStore::new(SimplePizzaFactory);
//! assert!(store.order("cheese").is_some());
//! assert!(store.order("anchovy").is_none());
//! ```

pub mod catalog;
pub mod composition;
pub mod config;
pub mod decorator;
pub mod factory;
pub mod price;
pub mod reporter;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use catalog::{BeverageOutcome, CatalogOrchestrator, CatalogSummary, OrderOutcome};
pub use composition::{
    BehaviorRegistry, ComposableEntity, EntityBuilder, MovementBehavior, VocalizationBehavior,
};
pub use config::{CatalogConfig, ConfiguredReporter, ReporterKind};
pub use decorator::{Beverage, Condiment, Decorated, Priceable};
pub use factory::{Creator, LifecycleStage, OrderContext, PizzaStore, Product, ProductFactory};
pub use price::Price;
pub use reporter::{MemoryReporter, NullReporter, Reporter, StdoutReporter, TracingReporter};

/// Convenient re-exports for common types and traits
pub mod prelude {
    pub use crate::composition::{
        BehaviorRegistry, ComposableEntity, EntityBuilder, FlyNoWay, FlyWithWings,
        MovementBehavior, MuteQuack, Quack, Squeak, VocalizationBehavior, movement_behavior,
        vocalization_behavior,
    };
    pub use crate::decorator::{
        Beverage, Condiment, Decoratable, Decorated, Priceable, decorate, decorate_all, milk,
        mocha, soy, whip,
    };
    pub use crate::factory::{
        Creator, KeyedFactory, LifecycleStage, OrderContext, Pizza, PizzaStore, PizzaStyle,
        Product, ProductFactory, SimplePizzaFactory,
    };
    pub use crate::price::Price;
    pub use crate::reporter::{
        MemoryReporter, NullReporter, Reporter, StdoutReporter, TracingReporter,
    };
    pub use crate::{CatalogConfig, CatalogError, CatalogOrchestrator, CatalogResult};
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Common error type for catalog operations.
///
/// An unknown product type key is not an error; creators signal it with
/// `None`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No behavior registered under this name
    #[error("Unknown behavior: {0}")]
    UnknownBehavior(String),

    /// An entity was built without one of its behavior slots
    #[error("Missing behavior: {0} slot was never set")]
    MissingBehavior(&'static str),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reading configuration from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
