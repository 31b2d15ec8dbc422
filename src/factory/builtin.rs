//! Built-in products and factories
//!
//! - [`Pizza`] in three stock styles, each recording the stages it ran
//! - [`SimplePizzaFactory`], the stock family for those styles
//! - [`KeyedFactory`], a family assembled at runtime from constructors

use crate::factory::{LifecycleStage, OrderContext, Product, ProductFactory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stock pizza styles and their type keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaStyle {
    Cheese,
    Greek,
    Pepperoni,
}

impl PizzaStyle {
    pub const ALL: [PizzaStyle; 3] = [PizzaStyle::Cheese, PizzaStyle::Greek, PizzaStyle::Pepperoni];

    /// Resolve a type key; keys are matched exactly
    pub fn from_key(type_key: &str) -> Option<Self> {
        match type_key {
            "cheese" => Some(PizzaStyle::Cheese),
            "greek" => Some(PizzaStyle::Greek),
            "pepperoni" => Some(PizzaStyle::Pepperoni),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            PizzaStyle::Cheese => "cheese",
            PizzaStyle::Greek => "greek",
            PizzaStyle::Pepperoni => "pepperoni",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            PizzaStyle::Cheese => "Cheese Pizza",
            PizzaStyle::Greek => "Greek Pizza",
            PizzaStyle::Pepperoni => "Pepperoni Pizza",
        }
    }
}

impl fmt::Display for PizzaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A pizza that reports and records each lifecycle stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    style: PizzaStyle,
    stages: Vec<LifecycleStage>,
}

impl Pizza {
    pub fn new(style: PizzaStyle) -> Self {
        Self {
            style,
            stages: Vec::with_capacity(LifecycleStage::ORDER.len()),
        }
    }

    pub fn cheese() -> Self {
        Self::new(PizzaStyle::Cheese)
    }

    pub fn greek() -> Self {
        Self::new(PizzaStyle::Greek)
    }

    pub fn pepperoni() -> Self {
        Self::new(PizzaStyle::Pepperoni)
    }

    pub fn style(&self) -> PizzaStyle {
        self.style
    }

    /// True once every stage has run exactly once, in order
    pub fn is_ready(&self) -> bool {
        self.stages == LifecycleStage::ORDER
    }

    fn record(&mut self, stage: LifecycleStage, verb: &str, context: &OrderContext) {
        self.stages.push(stage);
        context.report(&format!("{} {}", verb, self.style));
    }
}

impl Product for Pizza {
    fn name(&self) -> &str {
        self.style.display_name()
    }

    fn prepare(&mut self, context: &OrderContext) {
        self.record(LifecycleStage::Prepare, "Preparing", context);
    }

    fn bake(&mut self, context: &OrderContext) {
        self.record(LifecycleStage::Bake, "Baking", context);
    }

    fn cut(&mut self, context: &OrderContext) {
        self.record(LifecycleStage::Cut, "Cutting", context);
    }

    fn box_up(&mut self, context: &OrderContext) {
        self.record(LifecycleStage::Box, "Boxing", context);
    }

    fn stages(&self) -> &[LifecycleStage] {
        &self.stages
    }
}

/// The stock family: `cheese`, `greek` and `pepperoni`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePizzaFactory;

impl ProductFactory for SimplePizzaFactory {
    fn create(&self, type_key: &str) -> Option<Box<dyn Product>> {
        PizzaStyle::from_key(type_key).map(|style| Box::new(Pizza::new(style)) as Box<dyn Product>)
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = PizzaStyle::ALL.iter().map(|s| s.key().to_string()).collect();
        keys.sort();
        keys
    }
}

type Constructor = Box<dyn Fn() -> Box<dyn Product> + Send + Sync>;

/// Product family built from `key -> constructor` registrations
#[derive(Default)]
pub struct KeyedFactory {
    constructors: HashMap<String, Constructor>,
}

impl KeyedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor, replacing any previous one for `key`
    pub fn register<F, P>(&mut self, key: impl Into<String>, constructor: F)
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: Product + 'static,
    {
        self.constructors.insert(
            key.into(),
            Box::new(move || Box::new(constructor()) as Box<dyn Product>),
        );
    }

    /// Builder form of [`KeyedFactory::register`]
    pub fn with<F, P>(mut self, key: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: Product + 'static,
    {
        self.register(key, constructor);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl ProductFactory for KeyedFactory {
    fn create(&self, type_key: &str) -> Option<Box<dyn Product>> {
        self.constructors.get(type_key).map(|constructor| constructor())
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.constructors.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for KeyedFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedFactory")
            .field("keys", &self.keys())
            .finish()
    }
}
