//! Run configuration for the battery.

/// Configuration for one battery run.
///
/// Corresponds to the two process-wide constants the host harness fixes for a
/// run: how many elements each container is filled with, and how many times
/// the full operation sequence repeats per scenario.
///
/// # Examples
///
/// ```
/// use list_battery::BatteryConfig;
///
/// let config = BatteryConfig::new(100_000, 10);
/// assert_eq!(config.items_count(), 100_000);
/// assert_eq!(config.repeat_count(), 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BatteryConfig {
    items_count: usize,
    repeat_count: usize,
}

impl BatteryConfig {
    /// Creates a configuration with the given element count and repeat count.
    ///
    /// # Panics
    ///
    /// Panics if either count is zero.
    #[must_use]
    pub fn new(items_count: usize, repeat_count: usize) -> Self {
        assert!(items_count != 0, "items count cannot be zero");
        assert!(repeat_count != 0, "repeat count cannot be zero");

        Self {
            items_count,
            repeat_count,
        }
    }

    /// The number of elements inserted per container instance.
    #[must_use]
    pub fn items_count(&self) -> usize {
        self.items_count
    }

    /// The number of times the operation sequence repeats per scenario.
    #[must_use]
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }
}
