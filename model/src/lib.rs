pub mod budget;
pub mod combination;
pub mod die;
pub mod error;
pub mod expectation;
pub mod face;
pub mod outcome;
pub mod preview;
pub mod rate;
pub mod reroll;
pub mod threshold;

#[cfg(feature = "test-util")]
pub mod test_util;
