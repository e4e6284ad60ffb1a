//! Configuration types for the site core
//!
//! Core only accepts fully resolved configuration.
//! All discovery, loading, and merging happens in the CLI layer.

use crate::animation::Easing;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Simulated latency for the transitions of one demo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoPacing {
    /// One entry per forward transition, in milliseconds
    pub step_delays_ms: Vec<u64>,
}

impl DemoPacing {
    pub fn new(step_delays_ms: impl Into<Vec<u64>>) -> Self {
        Self {
            step_delays_ms: step_delays_ms.into(),
        }
    }

    /// Delay for the transition leaving `step` (1-based)
    pub fn delay_for(&self, step: usize) -> Option<Duration> {
        step.checked_sub(1)
            .and_then(|index| self.step_delays_ms.get(index))
            .map(|ms| Duration::from_millis(*ms))
    }
}

/// Notification display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notice stays on screen
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 5000 }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Stat counter animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub frame_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            frame_ms: 16,
            easing: Easing::Linear,
        }
    }
}

/// A fully resolved site configuration ready for use by core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Per-demo pacing overrides keyed by demo id
    #[serde(default)]
    pub demos: HashMap<String, DemoPacing>,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    /// Collapse every simulated delay to zero
    #[serde(default)]
    pub instant_demos: bool,
}

impl SiteConfig {
    /// Override pacing for one demo
    pub fn with_pacing(mut self, demo_id: impl Into<String>, pacing: DemoPacing) -> Self {
        self.demos.insert(demo_id.into(), pacing);
        self
    }

    /// Set instant mode
    pub fn with_instant_demos(mut self, instant: bool) -> Self {
        self.instant_demos = instant;
        self
    }

    /// Get the pacing override for a demo
    pub fn pacing(&self, demo_id: &str) -> Option<&DemoPacing> {
        self.demos.get(demo_id)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.notifications.duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notifications.duration_ms".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.counter.frame_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "counter.frame_ms".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.counter.duration_ms < self.counter.frame_ms {
            return Err(ConfigError::InvalidValue {
                field: "counter.duration_ms".to_string(),
                value: self.counter.duration_ms.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.notifications.duration(), Duration::from_millis(5000));
        assert_eq!(config.counter.frame_ms, 16);
    }

    #[test]
    fn test_zero_notification_duration_rejected() {
        let mut config = SiteConfig::default();
        config.notifications.duration_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pacing_delay_lookup_is_one_based() {
        let pacing = DemoPacing::new(vec![1500, 0, 0]);
        assert_eq!(pacing.delay_for(1), Some(Duration::from_millis(1500)));
        assert_eq!(pacing.delay_for(3), Some(Duration::ZERO));
        assert_eq!(pacing.delay_for(0), None);
        assert_eq!(pacing.delay_for(4), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "demos": { "job-package": { "step_delays_ms": [10, 0, 0] } } }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.notifications, NotificationConfig::default());
        assert_eq!(
            config.pacing("job-package").unwrap().step_delays_ms,
            vec![10, 0, 0]
        );
        assert!(!config.instant_demos);
    }
}
