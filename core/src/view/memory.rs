//! In-memory view bindings
//!
//! These hold the presentational state a page would show, which makes them
//! usable both for assertions and for rendering snapshots in the terminal.

use super::{ControlState, FormView, ModalView, NoticeView, SelectorView, StepView};
use crate::contact::{ContactForm, Notice};
use crate::pillar::ModalContent;
use std::collections::{BTreeMap, HashMap};

/// Recorded state of one demo widget
#[derive(Debug, Clone, Default)]
pub struct MemoryStepView {
    indicators: BTreeMap<usize, bool>,
    panels: BTreeMap<usize, bool>,
    controls: HashMap<String, ControlState>,
    busy: bool,
    /// Number of times the busy indicator was switched on
    pub busy_shown: usize,
}

impl MemoryStepView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps whose indicator is active, ascending
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .filter(|(_, active)| **active)
            .map(|(step, _)| *step)
            .collect()
    }

    /// Steps whose panel is visible, ascending
    pub fn visible_panels(&self) -> Vec<usize> {
        self.panels
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(step, _)| *step)
            .collect()
    }

    pub fn control(&self, control_id: &str) -> Option<&ControlState> {
        self.controls.get(control_id)
    }

    /// Ids of visible controls, sorted
    pub fn visible_controls(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .controls
            .iter()
            .filter(|(_, state)| state.visible)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

impl StepView for MemoryStepView {
    fn set_indicator(&mut self, step: usize, active: bool) {
        self.indicators.insert(step, active);
    }

    fn set_panel(&mut self, step: usize, visible: bool) {
        self.panels.insert(step, visible);
    }

    fn set_control(&mut self, control_id: &str, state: &ControlState) {
        self.controls.insert(control_id.to_string(), state.clone());
    }

    fn set_busy(&mut self, busy: bool) {
        if busy && !self.busy {
            self.busy_shown += 1;
        }
        self.busy = busy;
    }
}

/// Recorded state of the demo tab strip
#[derive(Debug, Clone, Default)]
pub struct MemorySelectorView {
    tabs: BTreeMap<String, bool>,
    containers: BTreeMap<String, bool>,
}

impl MemorySelectorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tabs(&self) -> Vec<&str> {
        self.tabs
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn visible_containers(&self) -> Vec<&str> {
        self.containers
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl SelectorView for MemorySelectorView {
    fn set_tab_active(&mut self, demo_id: &str, active: bool) {
        self.tabs.insert(demo_id.to_string(), active);
    }

    fn set_container_visible(&mut self, demo_id: &str, visible: bool) {
        self.containers.insert(demo_id.to_string(), visible);
    }
}

/// Recorded state of the pillar overlay
#[derive(Debug, Clone, Default)]
pub struct MemoryModalView {
    content: Option<ModalContent>,
    open: bool,
    pub render_count: usize,
}

impl MemoryModalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl ModalView for MemoryModalView {
    fn render(&mut self, content: &ModalContent) {
        self.content = Some(content.clone());
        self.render_count += 1;
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Contact form holding field values
#[derive(Debug, Clone, Default)]
pub struct MemoryFormView {
    pub fields: ContactForm,
}

impl MemoryFormView {
    pub fn with_fields(fields: ContactForm) -> Self {
        Self { fields }
    }
}

impl FormView for MemoryFormView {
    fn read_form(&self) -> ContactForm {
        self.fields.clone()
    }

    fn clear_form(&mut self) {
        self.fields = ContactForm::default();
    }
}

/// Notice area keeping the current notice and everything ever shown
#[derive(Debug, Clone, Default)]
pub struct MemoryNoticeView {
    current: Option<Notice>,
    pub shown: Vec<Notice>,
}

impl MemoryNoticeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

impl NoticeView for MemoryNoticeView {
    fn show_notice(&mut self, notice: &Notice) {
        self.current = Some(notice.clone());
        self.shown.push(notice.clone());
    }

    fn dismiss_notice(&mut self) {
        self.current = None;
    }
}
