//! Demo definitions
//!
//! A demo is an ordered list of steps. Every step but the last carries the
//! action control that moves the widget forward; the last step shows the
//! restart control instead.

use crate::config::DemoPacing;
use crate::error::{ConfigError, DemoError, Result};
use std::time::Duration;

/// When an action fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The user presses the control
    Manual,
    /// Fires by itself as soon as its step is reached
    OnArrival,
}

/// Control that advances the demo out of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionControl {
    /// Element id in the page markup
    pub id: String,
    pub label: String,
    /// Label shown while the simulated request is running
    pub busy_label: Option<String>,
    /// Simulated latency before the next step is shown
    pub delay: Duration,
    /// Whether the busy indicator is shown during the delay
    pub shows_busy: bool,
    pub trigger: Trigger,
}

impl ActionControl {
    /// Control pressed by the user, completing immediately
    pub fn manual(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            busy_label: None,
            delay: Duration::ZERO,
            shows_busy: false,
            trigger: Trigger::Manual,
        }
    }

    /// Transition that starts on its own when the step is reached
    pub fn on_arrival(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            trigger: Trigger::OnArrival,
            ..Self::manual(id, label)
        }
    }

    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    pub fn with_busy_indicator(mut self) -> Self {
        self.shows_busy = true;
        self
    }

    pub fn with_busy_label(mut self, label: impl Into<String>) -> Self {
        self.busy_label = Some(label.into());
        self
    }

    /// Label to display while in flight
    pub fn in_flight_label(&self) -> &str {
        self.busy_label.as_deref().unwrap_or(&self.label)
    }
}

/// The restart control shown on the final step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartControl {
    pub id: String,
    pub label: String,
}

/// One step of a demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub label: String,
    /// `None` only on the final step
    pub action: Option<ActionControl>,
}

/// Complete definition of one demo widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDefinition {
    pub id: String,
    pub name: String,
    pub steps: Vec<StepDefinition>,
    pub restart: RestartControl,
}

impl DemoDefinition {
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> DemoDefinitionBuilder {
        DemoDefinitionBuilder {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Step at a 1-based index
    pub fn step(&self, step: usize) -> Option<&StepDefinition> {
        step.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    /// Action leaving a 1-based step
    pub fn action(&self, step: usize) -> Option<&ActionControl> {
        self.step(step).and_then(|s| s.action.as_ref())
    }

    /// Actions in step order together with the step they belong to
    pub fn actions(&self) -> impl Iterator<Item = (usize, &ActionControl)> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(index, step)| step.action.as_ref().map(|action| (index + 1, action)))
    }

    /// Current per-transition delays
    pub fn pacing(&self) -> DemoPacing {
        DemoPacing::new(
            self.actions()
                .map(|(_, action)| action.delay.as_millis() as u64)
                .collect::<Vec<_>>(),
        )
    }

    /// Replace every transition delay with the configured ones
    pub fn with_pacing(mut self, pacing: &DemoPacing) -> Result<Self> {
        let expected = self.total_steps() - 1;
        if pacing.step_delays_ms.len() != expected {
            return Err(ConfigError::DelayCountMismatch {
                demo: self.id.clone(),
                expected,
                actual: pacing.step_delays_ms.len(),
            }
            .into());
        }

        for (index, step) in self.steps.iter_mut().enumerate() {
            if let (Some(action), Some(delay)) = (step.action.as_mut(), pacing.delay_for(index + 1))
            {
                action.delay = delay;
            }
        }
        Ok(self)
    }

    /// Collapse every delay to zero
    pub fn instant(mut self) -> Self {
        for action in self.steps.iter_mut().filter_map(|s| s.action.as_mut()) {
            action.delay = Duration::ZERO;
        }
        self
    }
}

/// Builder for [`DemoDefinition`]
#[derive(Debug)]
pub struct DemoDefinitionBuilder {
    id: String,
    name: String,
    steps: Vec<StepDefinition>,
}

impl DemoDefinitionBuilder {
    /// Add a step left through `action`
    pub fn step(mut self, label: impl Into<String>, action: ActionControl) -> Self {
        self.steps.push(StepDefinition {
            label: label.into(),
            action: Some(action),
        });
        self
    }

    /// Add the final step with its restart control
    pub fn finish(
        mut self,
        label: impl Into<String>,
        restart_id: impl Into<String>,
        restart_label: impl Into<String>,
    ) -> std::result::Result<DemoDefinition, DemoError> {
        self.steps.push(StepDefinition {
            label: label.into(),
            action: None,
        });

        if self.steps.len() < 2 {
            return Err(DemoError::TooFewSteps { id: self.id });
        }

        Ok(DemoDefinition {
            id: self.id,
            name: self.name,
            steps: self.steps,
            restart: RestartControl {
                id: restart_id.into(),
                label: restart_label.into(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DemoDefinition {
        DemoDefinition::builder("sample", "Sample")
            .step(
                "One",
                ActionControl::manual("go", "Go")
                    .with_delay_ms(1500)
                    .with_busy_indicator(),
            )
            .step("Two", ActionControl::manual("next", "Next"))
            .finish("Three", "again", "Restart")
            .unwrap()
    }

    #[test]
    fn test_builder_places_actions_before_final_step() {
        let demo = sample();
        assert_eq!(demo.total_steps(), 3);
        assert_eq!(demo.action(1).unwrap().id, "go");
        assert_eq!(demo.action(2).unwrap().id, "next");
        assert!(demo.action(3).is_none());
        assert!(demo.step(0).is_none());
    }

    #[test]
    fn test_single_step_demo_rejected() {
        let result = DemoDefinition::builder("tiny", "Tiny").finish("Only", "r", "Restart");
        assert_eq!(
            result.unwrap_err(),
            DemoError::TooFewSteps {
                id: "tiny".to_string()
            }
        );
    }

    #[test]
    fn test_pacing_round_trips_through_definition() {
        let demo = sample().with_pacing(&DemoPacing::new(vec![200, 50])).unwrap();
        assert_eq!(demo.pacing().step_delays_ms, vec![200, 50]);
        assert_eq!(demo.instant().pacing().step_delays_ms, vec![0, 0]);
    }

    #[test]
    fn test_pacing_length_must_match() {
        assert!(sample().with_pacing(&DemoPacing::new(vec![1])).is_err());
    }
}
