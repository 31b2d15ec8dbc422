//! Catalog configuration
//!
//! Everything has a default that reproduces the stock scenarios, so an empty
//! JSON object is a valid configuration.

use crate::decorator::Condiment;
use crate::price::Price;
use crate::reporter::{
    MemoryReporter, NullReporter, ReportLevel, Reporter, StdoutReporter, TracingReporter,
};
use crate::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Maximum condiment links the beverage scenario will stack
pub const MAX_CONDIMENTS: usize = 32;

/// Which reporter the orchestrator should build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    #[default]
    Stdout,
    Tracing,
    Memory,
    Silent,
}

impl ReporterKind {
    pub fn build(self, level: ReportLevel) -> ConfiguredReporter {
        match self {
            ReporterKind::Stdout => ConfiguredReporter::sink(Arc::new(StdoutReporter)),
            ReporterKind::Tracing => {
                ConfiguredReporter::sink(Arc::new(TracingReporter::new().with_level(level)))
            }
            ReporterKind::Memory => {
                let capture = MemoryReporter::new();
                ConfiguredReporter {
                    sink: Arc::new(capture.clone()),
                    capture: Some(capture),
                }
            }
            ReporterKind::Silent => ConfiguredReporter::sink(Arc::new(NullReporter)),
        }
    }
}

/// A reporter built from configuration.
///
/// `capture` shares the buffer behind `sink` when the kind is `memory`, so
/// the lines written during a run can be read back afterwards.
#[derive(Clone)]
pub struct ConfiguredReporter {
    pub sink: Arc<dyn Reporter>,
    pub capture: Option<MemoryReporter>,
}

impl ConfiguredReporter {
    fn sink(sink: Arc<dyn Reporter>) -> Self {
        Self {
            sink,
            capture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Output sink for scenario lines
    pub reporter: ReporterKind,
    /// Level used when `reporter` is `tracing`
    pub report_level: ReportLevel,
    /// Base price of the house blend, in cents
    pub house_blend_price: Price,
    /// Condiments layered onto the house blend, innermost first
    pub beverage_condiments: Vec<Condiment>,
    /// Type keys ordered in the pizza scenario
    pub pizza_orders: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            reporter: ReporterKind::Stdout,
            report_level: ReportLevel::Info,
            house_blend_price: Price::from_cents(199),
            beverage_condiments: vec![Condiment::Milk, Condiment::Mocha, Condiment::Mocha],
            pizza_orders: vec!["cheese".to_string(), "anchovy".to_string()],
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded catalog config");
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.pizza_orders.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "pizza_orders must name at least one type key".to_string(),
            ));
        }
        if self.beverage_condiments.len() > MAX_CONDIMENTS {
            return Err(CatalogError::InvalidConfig(format!(
                "beverage_condiments has {} entries, the limit is {}",
                self.beverage_condiments.len(),
                MAX_CONDIMENTS
            )));
        }
        Ok(())
    }

    pub fn with_reporter(mut self, reporter: ReporterKind) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_report_level(mut self, level: ReportLevel) -> Self {
        self.report_level = level;
        self
    }

    pub fn with_house_blend_price(mut self, price: Price) -> Self {
        self.house_blend_price = price;
        self
    }

    pub fn with_condiments(mut self, condiments: Vec<Condiment>) -> Self {
        self.beverage_condiments = condiments;
        self
    }

    pub fn with_pizza_orders<I, S>(mut self, orders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pizza_orders = orders.into_iter().map(Into::into).collect();
        self
    }

    /// Build the reporter this configuration names
    pub fn build_reporter(&self) -> ConfiguredReporter {
        self.reporter.build(self.report_level)
    }
}
