//! Decorator chains over priceable items
//!
//! A decorator owns exactly one inner [`Priceable`] and satisfies the same
//! trait, so decorators nest to any depth. Each link adds a fixed increment
//! to `cost()` and a fixed suffix to `description()`:
//!
//! ```rust
//! use catalog_composer::decorator::{Beverage, Priceable, milk, mocha};
//!
//! let order = mocha(mocha(milk(Beverage::house_blend())));
//! assert_eq!(order.cost().to_string(), "2.49");
//! assert_eq!(
//!     order.description(),
//!     "House Blend, with Milk, with Mocha, with Mocha"
//! );
//! ```
//!
//! Chains are built bottom-up by ownership, so a cycle cannot be expressed.

pub mod beverage;
pub mod condiment;

use crate::price::Price;
use std::borrow::Cow;

pub use beverage::Beverage;
pub use condiment::Condiment;

/// Anything with a description and a cost
pub trait Priceable {
    fn description(&self) -> String;

    fn cost(&self) -> Price;
}

impl<T: Priceable + ?Sized> Priceable for Box<T> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

impl<T: Priceable + ?Sized> Priceable for &T {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

/// One link of a decorator chain
#[derive(Debug, Clone, PartialEq)]
pub struct Decorated<T> {
    inner: T,
    increment: Price,
    suffix: Cow<'static, str>,
}

impl<T: Priceable> Decorated<T> {
    pub fn new(inner: T, increment: Price, suffix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            increment,
            suffix: suffix.into(),
        }
    }

    /// The item this link wraps
    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn increment(&self) -> Price {
        self.increment
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Unwrap one layer
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Priceable> Priceable for Decorated<T> {
    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(&self.suffix);
        description
    }

    fn cost(&self) -> Price {
        self.inner.cost() + self.increment
    }
}

/// Wrap `item` with one condiment
pub fn decorate<T: Priceable>(item: T, condiment: Condiment) -> Decorated<T> {
    Decorated::new(item, condiment.increment(), condiment.suffix())
}

pub fn milk<T: Priceable>(item: T) -> Decorated<T> {
    decorate(item, Condiment::Milk)
}

pub fn mocha<T: Priceable>(item: T) -> Decorated<T> {
    decorate(item, Condiment::Mocha)
}

pub fn soy<T: Priceable>(item: T) -> Decorated<T> {
    decorate(item, Condiment::Soy)
}

pub fn whip<T: Priceable>(item: T) -> Decorated<T> {
    decorate(item, Condiment::Whip)
}

/// Wrap `item` with each condiment in turn, innermost first.
///
/// The chain shape is only known at runtime here, so links are boxed.
pub fn decorate_all<I>(item: Box<dyn Priceable>, condiments: I) -> Box<dyn Priceable>
where
    I: IntoIterator<Item = Condiment>,
{
    condiments
        .into_iter()
        .fold(item, |chain, condiment| -> Box<dyn Priceable> {
            Box::new(decorate(chain, condiment))
        })
}

/// Decorator builder - wraps an item link by link
pub struct DecoratorBuilder<T> {
    inner: T,
}

impl<T: Priceable> DecoratorBuilder<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Add a condiment link
    pub fn with(self, condiment: Condiment) -> DecoratorBuilder<Decorated<T>> {
        DecoratorBuilder::new(decorate(self.inner, condiment))
    }

    pub fn with_milk(self) -> DecoratorBuilder<Decorated<T>> {
        self.with(Condiment::Milk)
    }

    pub fn with_mocha(self) -> DecoratorBuilder<Decorated<T>> {
        self.with(Condiment::Mocha)
    }

    /// Add a link that is not one of the stock condiments
    pub fn with_custom(
        self,
        increment: Price,
        suffix: impl Into<Cow<'static, str>>,
    ) -> DecoratorBuilder<Decorated<T>> {
        DecoratorBuilder::new(Decorated::new(self.inner, increment, suffix))
    }

    /// Finish the chain
    pub fn build(self) -> T {
        self.inner
    }
}

/// Decorator building for any priceable
pub trait Decoratable: Priceable + Sized {
    fn decorators(self) -> DecoratorBuilder<Self>;
}

impl<T: Priceable> Decoratable for T {
    fn decorators(self) -> DecoratorBuilder<T> {
        DecoratorBuilder::new(self)
    }
}
