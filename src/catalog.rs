//! Catalog orchestrator
//!
//! Drives the three composition mechanisms through the stock scenarios:
//! a duck whose strategies are swapped mid-run, a house blend wrapped in
//! condiments, and a pizza store taking one valid and one unknown order.

use crate::CatalogResult;
use crate::composition::{BehaviorRegistry, EntityBuilder, registry};
use crate::config::CatalogConfig;
use crate::decorator::{Beverage, Priceable, decorate_all};
use crate::factory::{LifecycleStage, PizzaStore, SimplePizzaFactory};
use crate::price::Price;
use crate::reporter::{MemoryReporter, Reporter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of one pizza order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub type_key: String,
    /// Product name, `None` when the key was unknown
    pub product: Option<String>,
    pub stages: Vec<LifecycleStage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeverageOutcome {
    pub description: String,
    pub cost: Price,
}

/// Everything one full run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub beverage: BeverageOutcome,
    pub orders: Vec<OrderOutcome>,
}

impl CatalogSummary {
    /// Orders whose type key resolved to nothing
    pub fn unknown_keys(&self) -> usize {
        self.orders.iter().filter(|o| o.product.is_none()).count()
    }
}

pub struct CatalogOrchestrator {
    reporter: Arc<dyn Reporter>,
    /// Read side of a configured `memory` reporter
    capture: Option<MemoryReporter>,
    config: CatalogConfig,
    registry: BehaviorRegistry,
}

impl CatalogOrchestrator {
    pub fn new(reporter: Arc<dyn Reporter>, config: CatalogConfig) -> Self {
        Self {
            reporter,
            capture: None,
            config,
            registry: BehaviorRegistry::with_builtins(),
        }
    }

    /// Build with the reporter the configuration names
    pub fn from_config(config: CatalogConfig) -> Self {
        let built = config.build_reporter();
        Self {
            capture: built.capture,
            ..Self::new(built.sink, config)
        }
    }

    /// Use a custom behavior registry for the duck scenario
    pub fn with_registry(mut self, registry: BehaviorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn reporter(&self) -> &Arc<dyn Reporter> {
        &self.reporter
    }

    /// Lines captured so far, when the configured reporter is `memory`
    pub fn captured_lines(&self) -> Option<Vec<String>> {
        self.capture.as_ref().map(MemoryReporter::lines)
    }

    /// Duck flies and quacks, loses its wings and voice, tries again
    pub fn run_duck_scenario(&self) -> CatalogResult<()> {
        tracing::info!("running duck scenario");

        let mut duck = EntityBuilder::new("Mallard")
            .from_registry(&self.registry, registry::FLY_WITH_WINGS, registry::QUACK)?
            .with_reporter(self.reporter.clone())
            .build()?;

        duck.perform_movement();
        duck.perform_vocalization();

        duck.set_movement_behavior(self.registry.movement(registry::FLY_NO_WAY)?);
        duck.set_vocalization_behavior(self.registry.vocalization(registry::SQUEAK)?);

        duck.perform_movement();
        duck.perform_vocalization();

        Ok(())
    }

    /// House blend wrapped in the configured condiments
    pub fn run_beverage_scenario(&self) -> BeverageOutcome {
        tracing::info!(
            condiments = self.config.beverage_condiments.len(),
            "running beverage scenario"
        );

        let base = Beverage::new("House Blend", self.config.house_blend_price);
        let order = decorate_all(Box::new(base), self.config.beverage_condiments.iter().copied());

        let outcome = BeverageOutcome {
            description: order.description(),
            cost: order.cost(),
        };
        self.reporter
            .report(&format!("Decorated description: {}", outcome.description));
        self.reporter.report(&format!("Cost: {}", outcome.cost));

        outcome
    }

    /// Order every configured type key from the stock pizza store
    pub fn run_pizza_scenario(&self) -> Vec<OrderOutcome> {
        tracing::info!(orders = self.config.pizza_orders.len(), "running pizza scenario");

        let store = PizzaStore::new(SimplePizzaFactory).with_reporter(self.reporter.clone());

        self.config
            .pizza_orders
            .iter()
            .map(|type_key| match store.order(type_key) {
                Some(product) => {
                    self.reporter.report(&format!("Ordered a {}", product.name()));
                    OrderOutcome {
                        type_key: type_key.clone(),
                        product: Some(product.name().to_string()),
                        stages: product.stages().to_vec(),
                    }
                }
                None => {
                    self.reporter
                        .report(&format!("No pizza on the menu for '{}'", type_key));
                    OrderOutcome {
                        type_key: type_key.clone(),
                        product: None,
                        stages: Vec::new(),
                    }
                }
            })
            .collect()
    }

    /// Run duck, beverage and pizza scenarios in that order
    pub fn run_all(&self) -> CatalogResult<CatalogSummary> {
        self.run_duck_scenario()?;
        let beverage = self.run_beverage_scenario();
        let orders = self.run_pizza_scenario();

        Ok(CatalogSummary { beverage, orders })
    }
}
