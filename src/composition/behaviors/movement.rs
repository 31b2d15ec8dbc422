//! Movement behaviors

use crate::composition::behaviors::MovementBehavior;
use crate::reporter::Reporter;

/// Flies with its own wings
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyWithWings;

impl MovementBehavior for FlyWithWings {
    fn perform(&self, reporter: &dyn Reporter) {
        reporter.report("Regular fly with wings");
    }
}

/// Grounded for good
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyNoWay;

impl MovementBehavior for FlyNoWay {
    fn perform(&self, reporter: &dyn Reporter) {
        reporter.report("Cannot fly!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    #[test]
    fn test_movement_messages() {
        let reporter = MemoryReporter::new();
        FlyWithWings.perform(&reporter);
        FlyNoWay.perform(&reporter);
        assert_eq!(reporter.lines(), vec!["Regular fly with wings", "Cannot fly!"]);
    }
}
