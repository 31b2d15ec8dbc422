//! # Factory Dispatch - Creators, Products and the Order Lifecycle
//!
//! This module decouples *what gets built* from *how built things are
//! processed*. A [`Creator`] resolves a type key to a concrete [`Product`];
//! the lifecycle it then runs over that product is fixed and shared.
//!
//! ## Four-Stage Lifecycle
//!
//! Every ordered product goes through the same stages, in this order:
//!
//! 1. **Prepare** (`prepare`) - assemble the product
//! 2. **Bake** (`bake`) - finish it
//! 3. **Cut** (`cut`) - portion it
//! 4. **Box** (`box_up`) - package it
//!
//! Each hook is a no-op by default and can be overridden per product. Hooks
//! have no error channel. `box` is a reserved word, hence `box_up`.
//!
//! ## Unknown Type Keys
//!
//! An unrecognized key is not an error. `create_product` returns `None` and
//! `order_product` returns `None` without running a single stage.
//!
//! ## Two Ways to Vary Creation
//!
//! - **Factory method**: implement [`Creator::create_product`] directly; the
//!   provided [`Creator::order_product`] stays the same.
//! - **Injected family**: implement [`ProductFactory`] and hand it to a
//!   [`PizzaStore`]. Swapping the whole family means swapping the factory,
//!   not editing the store.
//!
//! ```rust
//! use catalog_composer::factory::{
//!     Creator, LifecycleStage, OrderContext, PizzaStore, SimplePizzaFactory,
//! };
//!
//! let store = PizzaStore::new(SimplePizzaFactory);
//! let context = OrderContext::silent();
//!
//! let pizza = store.order_product("cheese", &context).unwrap();
//! assert_eq!(pizza.stages(), &LifecycleStage::ORDER);
//! assert!(store.order_product("anchovy", &context).is_none());
//! ```

use crate::reporter::{NullReporter, Reporter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub mod builtin;

pub use builtin::{KeyedFactory, Pizza, PizzaStyle, SimplePizzaFactory};

/// Lifecycle stages in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStage {
    Prepare,
    Bake,
    Cut,
    Box,
}

impl LifecycleStage {
    pub const ORDER: [LifecycleStage; 4] = [
        LifecycleStage::Prepare,
        LifecycleStage::Bake,
        LifecycleStage::Cut,
        LifecycleStage::Box,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LifecycleStage::Prepare => "prepare",
            LifecycleStage::Bake => "bake",
            LifecycleStage::Cut => "cut",
            LifecycleStage::Box => "box",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata key `order_product` stamps with the created product's name
pub const PRODUCT_METADATA_KEY: &str = "product";

/// Per-order context handed to every lifecycle hook.
///
/// A context built by the caller acts as a template: [`Creator::order_product`]
/// derives a fresh context from it for every order, with its own order id and
/// the requested type key, so no two orders share an id.
#[derive(Clone)]
pub struct OrderContext {
    /// UUID v4, unique per order
    pub order_id: String,
    /// Key the product was ordered under, empty on a template
    pub type_key: String,
    pub reporter: Arc<dyn Reporter>,
    /// Free-form order annotations, carried from template to order
    pub metadata: HashMap<String, serde_json::Value>,
}

impl OrderContext {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            order_id: uuid::Uuid::new_v4().to_string(),
            type_key: String::new(),
            reporter,
            metadata: HashMap::new(),
        }
    }

    /// Context whose output goes nowhere
    pub fn silent() -> Self {
        Self::new(Arc::new(NullReporter))
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Derive the context for one order of `product` under `type_key`
    pub fn for_order(&self, type_key: &str, product: &str) -> Self {
        let mut metadata = self.metadata.clone();
        metadata.insert(PRODUCT_METADATA_KEY.to_string(), serde_json::json!(product));
        Self {
            order_id: uuid::Uuid::new_v4().to_string(),
            type_key: type_key.to_string(),
            reporter: self.reporter.clone(),
            metadata,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn report(&self, message: &str) {
        self.reporter.report(message);
    }

    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }
}

impl fmt::Debug for OrderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderContext")
            .field("order_id", &self.order_id)
            .field("type_key", &self.type_key)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Something a creator can build and run through the lifecycle
pub trait Product: Send + Sync {
    /// Display name, e.g. "Cheese Pizza"
    fn name(&self) -> &str;

    fn prepare(&mut self, _context: &OrderContext) {}

    fn bake(&mut self, _context: &OrderContext) {}

    fn cut(&mut self, _context: &OrderContext) {}

    fn box_up(&mut self, _context: &OrderContext) {}

    /// Stages this product has been through, for products that keep track
    fn stages(&self) -> &[LifecycleStage] {
        &[]
    }
}

impl fmt::Debug for dyn Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Product")
            .field("name", &self.name())
            .field("stages", &self.stages())
            .finish()
    }
}

/// Creator: one factory operation plus the fixed order lifecycle
pub trait Creator {
    /// Resolve `type_key` to a fresh product, or `None` if the key is unknown
    fn create_product(&self, type_key: &str) -> Option<Box<dyn Product>>;

    /// Create the product for `type_key` and run it through every stage.
    ///
    /// `context` is a template; each order runs under its own
    /// [`OrderContext::for_order`] derivative. Returns `None` without running
    /// any stage when the key is unknown.
    fn order_product(&self, type_key: &str, context: &OrderContext) -> Option<Box<dyn Product>> {
        let Some(mut product) = self.create_product(type_key) else {
            tracing::info!(type_key, "no product for type key");
            return None;
        };

        let order = context.for_order(type_key, product.name());
        tracing::debug!(
            type_key,
            product = product.name(),
            order_id = %order.order_id,
            "running order lifecycle"
        );

        for stage in LifecycleStage::ORDER {
            tracing::debug!(order_id = %order.order_id, %stage, "lifecycle stage");
            match stage {
                LifecycleStage::Prepare => product.prepare(&order),
                LifecycleStage::Bake => product.bake(&order),
                LifecycleStage::Cut => product.cut(&order),
                LifecycleStage::Box => product.box_up(&order),
            }
        }

        Some(product)
    }
}

/// A family of product constructors keyed by type
pub trait ProductFactory: Send + Sync {
    fn create(&self, type_key: &str) -> Option<Box<dyn Product>>;

    /// Keys this family knows, sorted
    fn keys(&self) -> Vec<String>;
}

impl<F: ProductFactory + ?Sized> ProductFactory for Box<F> {
    fn create(&self, type_key: &str) -> Option<Box<dyn Product>> {
        (**self).create(type_key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

impl<F: ProductFactory + ?Sized> ProductFactory for Arc<F> {
    fn create(&self, type_key: &str) -> Option<Box<dyn Product>> {
        (**self).create(type_key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

/// Creator composed with an injected product family
pub struct PizzaStore<F> {
    factory: F,
    reporter: Arc<dyn Reporter>,
}

impl<F: ProductFactory> PizzaStore<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            reporter: Arc::new(NullReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Order with a fresh context that reports through this store's reporter
    pub fn order(&self, type_key: &str) -> Option<Box<dyn Product>> {
        let context = OrderContext::new(self.reporter.clone());
        self.order_product(type_key, &context)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Swap the product family, keeping the store's reporter
    pub fn with_factory<G: ProductFactory>(self, factory: G) -> PizzaStore<G> {
        PizzaStore {
            factory,
            reporter: self.reporter,
        }
    }

    pub fn menu(&self) -> Vec<String> {
        self.factory.keys()
    }
}

impl<F: ProductFactory> Creator for PizzaStore<F> {
    fn create_product(&self, type_key: &str) -> Option<Box<dyn Product>> {
        self.factory.create(type_key)
    }
}
