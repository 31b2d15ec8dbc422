//! Behavior capability interfaces
//!
//! Each capability is a one-method trait. Concrete behaviors are stateless
//! and shared between entities through `Arc`, so swapping one in or out never
//! touches the entity's own code.

pub mod movement;
pub mod vocalization;

use crate::reporter::Reporter;
use std::sync::Arc;

pub use movement::*;
pub use vocalization::*;

/// How an entity moves
pub trait MovementBehavior: Send + Sync {
    /// Perform the movement, reporting its outcome as one line
    fn perform(&self, reporter: &dyn Reporter);
}

/// How an entity makes noise
pub trait VocalizationBehavior: Send + Sync {
    /// Perform the vocalization, reporting its outcome as one line
    fn perform(&self, reporter: &dyn Reporter);
}

// === Closure-backed behaviors ===

/// Wraps a closure as a [`MovementBehavior`]
pub struct FnMovementBehavior<F> {
    pub func: F,
}

impl<F> FnMovementBehavior<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> MovementBehavior for FnMovementBehavior<F>
where
    F: Fn(&dyn Reporter) + Send + Sync,
{
    fn perform(&self, reporter: &dyn Reporter) {
        (self.func)(reporter)
    }
}

/// Wraps a closure as a [`VocalizationBehavior`]
pub struct FnVocalizationBehavior<F> {
    pub func: F,
}

impl<F> FnVocalizationBehavior<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> VocalizationBehavior for FnVocalizationBehavior<F>
where
    F: Fn(&dyn Reporter) + Send + Sync,
{
    fn perform(&self, reporter: &dyn Reporter) {
        (self.func)(reporter)
    }
}

// === Arc helpers ===

/// Convert any movement behavior into the shared slot form
pub fn movement_behavior<T: MovementBehavior + 'static>(behavior: T) -> Arc<dyn MovementBehavior> {
    Arc::new(behavior)
}

/// Convert any vocalization behavior into the shared slot form
pub fn vocalization_behavior<T: VocalizationBehavior + 'static>(
    behavior: T,
) -> Arc<dyn VocalizationBehavior> {
    Arc::new(behavior)
}

/// Build a closure-backed movement behavior in slot form
#[macro_export]
macro_rules! movement_fn {
    ($func:expr) => {
        $crate::composition::movement_behavior($crate::composition::FnMovementBehavior::new($func))
    };
}

/// Build a closure-backed vocalization behavior in slot form
#[macro_export]
macro_rules! vocalization_fn {
    ($func:expr) => {
        $crate::composition::vocalization_behavior(
            $crate::composition::FnVocalizationBehavior::new($func),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    #[test]
    fn test_fn_behaviors_forward_to_closure() {
        let reporter = MemoryReporter::new();
        let hop = movement_behavior(FnMovementBehavior::new(|r: &dyn Reporter| {
            r.report("Hop")
        }));
        let honk = vocalization_behavior(FnVocalizationBehavior::new(|r: &dyn Reporter| {
            r.report("Honk")
        }));

        hop.perform(&reporter);
        honk.perform(&reporter);

        assert_eq!(reporter.lines(), vec!["Hop", "Honk"]);
    }

    #[test]
    fn test_behavior_macros() {
        let reporter = MemoryReporter::new();
        let glide = crate::movement_fn!(|r: &dyn Reporter| r.report("Glide"));
        let hiss = crate::vocalization_fn!(|r: &dyn Reporter| r.report("Hiss"));

        glide.perform(&reporter);
        hiss.perform(&reporter);

        assert_eq!(reporter.lines(), vec!["Glide", "Hiss"]);
    }
}
