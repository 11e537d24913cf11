pub mod error;
pub mod handler;
pub mod models;

#[cfg(test)]
pub mod tests;

// Test utilities - publicly exposed with test feature
#[cfg_attr(test, path = "test_utils/mod.rs")]
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
