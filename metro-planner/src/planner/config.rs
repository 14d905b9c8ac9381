//! Search configuration for the path planner.

use chrono::Duration;

/// Cost added to the search priority for each change of line (minutes).
pub const TRANSFER_PENALTY_MINS: u32 = 10;

/// Configuration parameters for path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Penalty charged once per line change (minutes).
    /// Affects which path is chosen, never the reported travel time.
    pub transfer_penalty_mins: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transfer_penalty_mins: u32) -> Self {
        Self {
            transfer_penalty_mins,
        }
    }

    /// Returns the transfer penalty as a Duration.
    pub fn transfer_penalty(&self) -> Duration {
        Duration::minutes(i64::from(self.transfer_penalty_mins))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            transfer_penalty_mins: TRANSFER_PENALTY_MINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.transfer_penalty_mins, 10);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();
        assert_eq!(config.transfer_penalty(), Duration::minutes(10));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(3);
        assert_eq!(config.transfer_penalty_mins, 3);
        assert_eq!(config.transfer_penalty(), Duration::minutes(3));
    }
}
