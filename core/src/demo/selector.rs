//! Demo selector
//!
//! The product demo section shows one demo container at a time, chosen from
//! a tab strip. Selecting a tab never touches the demos' own step state.

use crate::error::DemoError;
use crate::view::SelectorView;
use tracing::debug;

/// Tab strip over a fixed set of demos
#[derive(Debug)]
pub struct DemoSelector<V: SelectorView> {
    demo_ids: Vec<String>,
    current: Option<String>,
    view: V,
}

impl<V: SelectorView> DemoSelector<V> {
    /// Create a selector; no demo is shown until one is selected
    pub fn new<I, S>(demo_ids: I, view: V) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            demo_ids: demo_ids.into_iter().map(Into::into).collect(),
            current: None,
            view,
        }
    }

    /// Show `demo_id` and hide every other container
    pub fn select(&mut self, demo_id: &str) -> Result<(), DemoError> {
        if !self.demo_ids.iter().any(|id| id == demo_id) {
            return Err(DemoError::UnknownDemo {
                id: demo_id.to_string(),
            });
        }

        for id in &self.demo_ids {
            let selected = id == demo_id;
            self.view.set_tab_active(id, selected);
            self.view.set_container_visible(id, selected);
        }

        debug!(demo = demo_id, "demo selected");
        self.current = Some(demo_id.to_string());
        Ok(())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
