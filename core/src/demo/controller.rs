//! Demo step controller
//!
//! Drives one demo widget through its steps. The only transitions are
//! `step -> step + 1` (via [`DemoController::advance`], or automatically for
//! an on-arrival action reached through `advance`) and `step -> 1` (via
//! [`DemoController::restart`]). [`DemoController::go_to_step`] only changes
//! what is shown and never starts a timer.
//!
//! The busy flag is the mutual-exclusion guard for `advance`: it is read and
//! set under the same lock, so a second press while a simulated request is
//! in flight is ignored regardless of what the page still shows. Every
//! scheduled completion carries the epoch it was scheduled in; restarting or
//! jumping bumps the epoch so a stale completion never moves the widget.

use super::definition::{DemoDefinition, Trigger};
use crate::error::DemoError;
use crate::task::DelayedTask;
use crate::view::{ControlState, StepView};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Snapshot of a demo widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoState {
    /// 1-based, always within `1..=total_steps`
    pub current_step: usize,
    pub total_steps: usize,
    pub busy: bool,
}

impl DemoState {
    pub fn is_final(&self) -> bool {
        self.current_step == self.total_steps
    }
}

/// Why an `advance` did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A simulated request is already in flight
    Busy,
    /// Already at the final step; only restart applies
    FinalStep,
}

/// Result of [`DemoController::advance`]
#[derive(Debug)]
pub enum AdvanceOutcome {
    /// Zero-latency action: already at the new step
    Completed { step: usize },
    /// Simulated request in flight; the handle resolves when it lands
    Scheduled(DelayedTask),
    Ignored(IgnoreReason),
}

impl AdvanceOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, AdvanceOutcome::Ignored(_))
    }
}

type Completion = Pin<Box<dyn Future<Output = bool> + Send + 'static>>;

struct Inner<V> {
    view: V,
    state: DemoState,
    epoch: u64,
    pending: Option<CancellationToken>,
}

impl<V> Inner<V> {
    /// Invalidate any scheduled completion
    fn cancel_pending(&mut self) -> bool {
        self.epoch += 1;
        match self.pending.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }
}

/// Controller for one demo widget
pub struct DemoController<V: StepView> {
    instance: Uuid,
    definition: Arc<DemoDefinition>,
    inner: Arc<Mutex<Inner<V>>>,
}

impl<V: StepView> Clone for DemoController<V> {
    fn clone(&self) -> Self {
        Self {
            instance: self.instance,
            definition: self.definition.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<V: StepView> DemoController<V> {
    /// Bind a demo to its view and render step 1
    pub fn new(definition: DemoDefinition, mut view: V) -> Self {
        let total_steps = definition.total_steps();
        render(&definition, &mut view, 1);

        let instance = Uuid::new_v4();
        debug!(demo = %definition.id, %instance, total_steps, "demo controller created");

        Self {
            instance,
            definition: Arc::new(definition),
            inner: Arc::new(Mutex::new(Inner {
                view,
                state: DemoState {
                    current_step: 1,
                    total_steps,
                    busy: false,
                },
                epoch: 0,
                pending: None,
            })),
        }
    }

    pub fn definition(&self) -> &DemoDefinition {
        &self.definition
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance
    }

    pub async fn state(&self) -> DemoState {
        self.inner.lock().await.state
    }

    /// Read the bound view
    pub async fn inspect<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let inner = self.inner.lock().await;
        f(&inner.view)
    }

    /// Show `step`. Cancels any in-flight transition.
    pub async fn go_to_step(&self, step: usize) -> Result<(), DemoError> {
        let mut inner = self.inner.lock().await;
        let total = inner.state.total_steps;
        if step == 0 || step > total {
            return Err(DemoError::StepOutOfRange { step, total });
        }

        inner.cancel_pending();
        self.arrive(&mut inner, step, false);
        Ok(())
    }

    /// Leave the current step through its action
    pub async fn advance(&self) -> AdvanceOutcome {
        let mut inner = self.inner.lock().await;

        if inner.state.busy {
            warn!(demo = %self.definition.id, step = inner.state.current_step, "advance ignored while busy");
            return AdvanceOutcome::Ignored(IgnoreReason::Busy);
        }

        let from = inner.state.current_step;
        if self.definition.action(from).is_none() {
            debug!(demo = %self.definition.id, step = from, "advance ignored at final step");
            return AdvanceOutcome::Ignored(IgnoreReason::FinalStep);
        }

        info!(demo = %self.definition.id, step = from, "action triggered");
        match self.begin_transition(&mut inner, from) {
            Some(task) => AdvanceOutcome::Scheduled(task),
            None => AdvanceOutcome::Completed {
                step: inner.state.current_step,
            },
        }
    }

    /// Back to step 1 with every control re-armed
    pub async fn restart(&self) {
        let mut inner = self.inner.lock().await;
        if inner.cancel_pending() {
            debug!(demo = %self.definition.id, "pending transition cancelled by restart");
        }
        info!(demo = %self.definition.id, "restart");
        self.arrive(&mut inner, 1, false);
    }

    /// Re-open the widget from the beginning
    pub async fn reset(&self) {
        self.restart().await;
    }

    /// Drop an in-flight transition, staying on the current step with its
    /// control re-armed. An automatic step has no control, so cancelling it
    /// falls back to step 1. Returns whether anything was pending.
    pub async fn cancel_pending(&self) -> bool {
        let mut inner = self.inner.lock().await;
        let was_pending = inner.cancel_pending();
        if was_pending {
            let step = inner.state.current_step;
            let automatic = self
                .definition
                .action(step)
                .is_some_and(|action| action.trigger == Trigger::OnArrival);
            let shown = if automatic { 1 } else { step };
            debug!(demo = %self.definition.id, step, shown, "pending transition cancelled");
            inner.state.current_step = shown;
            inner.state.busy = false;
            render(&self.definition, &mut inner.view, shown);
        }
        was_pending
    }

    /// Render `step`. With `chain`, also start its action if it fires on
    /// arrival; only transitions out of `advance` chain.
    fn arrive(&self, inner: &mut Inner<V>, step: usize, chain: bool) {
        debug!(demo = %self.definition.id, step, "transitioning to step");
        render(&self.definition, &mut inner.view, step);
        inner.state.current_step = step;
        inner.state.busy = false;

        let auto = chain
            && self
                .definition
                .action(step)
                .is_some_and(|action| action.trigger == Trigger::OnArrival);
        if auto {
            // Detached: restart or a jump cancels it through `pending`
            let _ = self.begin_transition(inner, step);
        }
    }

    /// Hide the action of `from` and move on, now or after its delay
    fn begin_transition(&self, inner: &mut Inner<V>, from: usize) -> Option<DelayedTask> {
        let action = self.definition.action(from)?.clone();
        let target = from + 1;

        inner
            .view
            .set_control(&action.id, &ControlState::busy(action.in_flight_label()));

        if action.delay.is_zero() {
            self.arrive(inner, target, true);
            return None;
        }

        inner.epoch += 1;
        inner.state.busy = true;
        if action.shows_busy {
            inner.view.set_busy(true);
        }

        let task = DelayedTask::spawn(action.delay, self.completion(inner.epoch, target));
        inner.pending = Some(task.cancellation_token());
        Some(task)
    }

    fn completion(&self, epoch: u64, target: usize) -> Completion {
        let controller = self.clone();
        Box::pin(async move {
            let mut inner = controller.inner.lock().await;
            if inner.epoch != epoch || !inner.state.busy {
                debug!(demo = %controller.definition.id, target, "stale completion dropped");
                return false;
            }
            inner.pending = None;
            controller.arrive(&mut inner, target, true);
            true
        })
    }
}

/// Apply the presentational state of `step` to a view
fn render<V: StepView>(definition: &DemoDefinition, view: &mut V, step: usize) {
    for index in 1..=definition.total_steps() {
        view.set_indicator(index, index <= step);
        view.set_panel(index, index == step);
    }

    for (owner, action) in definition.actions() {
        let state = if owner == step && action.trigger == Trigger::Manual {
            ControlState::shown(&action.label)
        } else {
            ControlState::hidden(&action.label)
        };
        view.set_control(&action.id, &state);
    }

    let restart = &definition.restart;
    let state = if step == definition.total_steps() {
        ControlState::shown(&restart.label)
    } else {
        ControlState::hidden(&restart.label)
    };
    view.set_control(&restart.id, &state);

    view.set_busy(false);
}
