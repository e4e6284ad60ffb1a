//! Stat counter animation
//!
//! Numbers in the stats grid count up from zero to their target once the
//! section becomes visible. The animation is time-indexed: callers ask for
//! the value at an elapsed duration and render it, so no timer lives here.

use crate::config::CounterConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Easing options for counter animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Parse an easing name, accepting the usual spellings
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "ease_in_out_cubic" | "easeinoutcubic" | "ease-in-out-cubic" => {
                Some(Easing::EaseInOutCubic)
            }
            "ease_out_cubic" | "easeoutcubic" | "ease-out-cubic" => Some(Easing::EaseOutCubic),
            _ => None,
        }
    }
}

/// Apply easing function to a normalized time value (0.0 to 1.0)
pub fn apply_easing(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Read a stat target the way the markup provides it: the `data-target`
/// attribute when present and non-blank, otherwise the element text. Leading digits only,
/// so "500+" counts to 500.
pub fn parse_stat_target(data_target: Option<&str>, text: &str) -> Option<u64> {
    let source = data_target
        .filter(|target| !target.trim().is_empty())
        .unwrap_or(text)
        .trim();
    let digits: String = source.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Counter animating from zero to a target
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
    frame: Duration,
    easing: Easing,
}

impl CounterAnimation {
    /// Create new counter animation
    pub fn new(target: u64, config: &CounterConfig) -> Self {
        Self {
            target,
            duration: Duration::from_millis(config.duration_ms),
            frame: Duration::from_millis(config.frame_ms.max(1)),
            easing: config.easing,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value shown after `elapsed`. Quantized to whole frames and floored;
    /// pinned to the target once the duration has passed.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.target;
        }

        let frames = elapsed.as_millis() / self.frame.as_millis();
        let quantized = Duration::from_millis(frames as u64 * self.frame.as_millis() as u64);
        let progress = quantized.as_secs_f64() / self.duration.as_secs_f64();
        let eased = apply_easing(self.easing, progress);

        ((self.target as f64 * eased).floor() as u64).min(self.target)
    }

    /// Check if animation is complete
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Every rendered value, one per frame, ending with the target
    pub fn frames(&self) -> Vec<u64> {
        let mut values = Vec::new();
        let mut elapsed = Duration::ZERO;
        loop {
            let value = self.value_at(elapsed);
            values.push(value);
            if value == self.target && self.is_complete(elapsed) {
                break;
            }
            elapsed += self.frame;
        }
        values
    }
}
