//! View bindings
//!
//! Controllers never look up page elements themselves. Each widget is handed
//! a binding that owns its scoped elements and applies presentational state.
//! A binding whose element is absent from the markup ignores the call.

pub mod memory;

use crate::contact::{ContactForm, Notice};
use crate::pillar::ModalContent;
use serde::{Deserialize, Serialize};

pub use memory::{MemoryFormView, MemoryModalView, MemoryNoticeView, MemorySelectorView, MemoryStepView};

/// Presentational state of one action control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub visible: bool,
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    pub fn shown(label: impl Into<String>) -> Self {
        Self {
            visible: true,
            enabled: true,
            label: label.into(),
        }
    }

    pub fn hidden(label: impl Into<String>) -> Self {
        Self {
            visible: false,
            enabled: true,
            label: label.into(),
        }
    }

    /// Hidden and disabled while a simulated request is in flight
    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            visible: false,
            enabled: false,
            label: label.into(),
        }
    }
}

/// Elements of one demo widget: step indicators, content panels, action
/// controls and the busy indicator. Steps are 1-based.
pub trait StepView: Send + 'static {
    fn set_indicator(&mut self, step: usize, active: bool);

    fn set_panel(&mut self, step: usize, visible: bool);

    fn set_control(&mut self, control_id: &str, state: &ControlState);

    fn set_busy(&mut self, busy: bool);
}

/// Tab strip and containers of the demo section
pub trait SelectorView {
    fn set_tab_active(&mut self, demo_id: &str, active: bool);

    fn set_container_visible(&mut self, demo_id: &str, visible: bool);
}

/// The shared pillar overlay
pub trait ModalView {
    /// Replace the overlay content
    fn render(&mut self, content: &ModalContent);

    fn open(&mut self);

    fn close(&mut self);
}

/// Contact form fields
pub trait FormView {
    fn read_form(&self) -> ContactForm;

    fn clear_form(&mut self);
}

/// Transient on-screen notice area
pub trait NoticeView: Send + 'static {
    fn show_notice(&mut self, notice: &Notice);

    fn dismiss_notice(&mut self);
}
