//! Vocalization behaviors

use crate::composition::behaviors::VocalizationBehavior;
use crate::reporter::Reporter;

#[derive(Debug, Default, Clone, Copy)]
pub struct Quack;

impl VocalizationBehavior for Quack {
    fn perform(&self, reporter: &dyn Reporter) {
        reporter.report("Regular quack!");
    }
}

/// Rubber duck noise
#[derive(Debug, Default, Clone, Copy)]
pub struct Squeak;

impl VocalizationBehavior for Squeak {
    fn perform(&self, reporter: &dyn Reporter) {
        reporter.report("Rubber ducky squeak.");
    }
}

/// Silent. Still reports, so callers can see the call landed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MuteQuack;

impl VocalizationBehavior for MuteQuack {
    fn perform(&self, reporter: &dyn Reporter) {
        reporter.report("No quack. Can't do anything");
    }
}
