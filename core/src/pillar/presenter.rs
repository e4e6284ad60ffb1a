//! Pillar modal presenter
//!
//! Maps a clicked pillar id to its record and renders it into the shared
//! overlay. The id comes from page markup and can drift out of sync with the
//! table, so an unknown id leaves the overlay exactly as it was.

use super::catalog::PillarCatalog;
use super::record::{PainPoint, PillarDemo, PillarDemoAction, PillarRecord};
use crate::view::ModalView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the overlay displays for one pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalContent {
    pub pillar_id: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub pain_points: Vec<PainPoint>,
    pub security_badges: Vec<String>,
    pub stacking: String,
    /// `None` hides the demo button
    pub demo_button: Option<PillarDemo>,
}

impl From<&PillarRecord> for ModalContent {
    fn from(record: &PillarRecord) -> Self {
        Self {
            pillar_id: record.id.clone(),
            icon: record.icon.clone(),
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            pain_points: record.pain_points.clone(),
            security_badges: record.security.clone(),
            stacking: record.stacking.clone(),
            demo_button: record.demo.clone(),
        }
    }
}

/// Presenter bound to one overlay
pub struct PillarModalPresenter<V: ModalView> {
    catalog: Arc<PillarCatalog>,
    view: V,
    presented: Option<String>,
    open: bool,
}

impl<V: ModalView> PillarModalPresenter<V> {
    pub fn new(catalog: Arc<PillarCatalog>, view: V) -> Self {
        Self {
            catalog,
            view,
            presented: None,
            open: false,
        }
    }

    /// Render and open the overlay for `pillar_id`.
    /// Returns false, touching nothing, when the id is not in the table.
    pub fn present(&mut self, pillar_id: &str) -> bool {
        let Some(record) = self.catalog.get(pillar_id) else {
            warn!(pillar = pillar_id, "unknown pillar id, overlay left unchanged");
            return false;
        };

        let content = ModalContent::from(record);
        debug!(
            pillar = pillar_id,
            pain_points = content.pain_points.len(),
            badges = content.security_badges.len(),
            demo = content.demo_button.is_some(),
            "presenting pillar"
        );

        self.view.render(&content);
        self.view.open();
        self.presented = Some(pillar_id.to_string());
        self.open = true;
        true
    }

    /// Close the overlay; always allowed
    pub fn dismiss(&mut self) {
        self.view.close();
        self.open = false;
    }

    /// Press the demo button: closes the overlay and returns what to launch.
    /// `None` when the presented pillar has no demo or nothing is open.
    pub fn activate_demo(&mut self) -> Option<PillarDemoAction> {
        if !self.open {
            return None;
        }

        let action = self
            .presented
            .as_deref()
            .and_then(|id| self.catalog.get(id))
            .and_then(|record| record.demo.as_ref())
            .map(|demo| demo.action)?;

        debug!(?action, "pillar demo activated");
        self.dismiss();
        Some(action)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn presented(&self) -> Option<&str> {
        self.presented.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemoryModalView;

    fn presenter() -> PillarModalPresenter<MemoryModalView> {
        let catalog = Arc::new(PillarCatalog::builtin().unwrap());
        PillarModalPresenter::new(catalog, MemoryModalView::new())
    }

    #[test]
    fn test_unknown_pillar_leaves_overlay_closed() {
        let mut presenter = presenter();
        assert!(!presenter.present("hydro"));
        assert!(!presenter.is_open());
        assert!(!presenter.view().is_open());
        assert!(presenter.view().content().is_none());
        assert_eq!(presenter.view().render_count, 0);
    }

    #[test]
    fn test_unknown_pillar_keeps_previous_content() {
        let mut presenter = presenter();
        assert!(presenter.present("grid"));
        presenter.dismiss();

        assert!(!presenter.present("not-a-pillar"));
        assert_eq!(presenter.view().content().unwrap().title, "NEXA Grid");
        assert_eq!(presenter.view().render_count, 1);
        assert!(!presenter.view().is_open());
    }

    #[test]
    fn test_known_pillar_preserves_order() {
        let mut presenter = presenter();
        assert!(presenter.present("core"));

        let content = presenter.view().content().unwrap();
        let titles: Vec<&str> = content.pain_points.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Manual Spec Verification",
                "Compliance Violations",
                "Go-Backs & Rework"
            ]
        );
        assert_eq!(
            content.security_badges,
            vec!["SOC 2 Compliant", "End-to-End Encryption", "NERC CIP Ready"]
        );
        assert!(presenter.view().is_open());
    }

    #[test]
    fn test_vault_has_no_demo_button() {
        let mut presenter = presenter();
        assert!(presenter.present("vault"));

        let content = presenter.view().content().unwrap();
        assert_eq!(content.pain_points.len(), 3);
        assert_eq!(content.security_badges.len(), 4);
        assert!(content.demo_button.is_none());
        assert_eq!(presenter.activate_demo(), None);
        assert!(presenter.is_open());
    }

    #[test]
    fn test_demo_button_labels() {
        let mut presenter = presenter();

        presenter.present("field");
        let button = presenter.view().content().unwrap().demo_button.clone().unwrap();
        assert_eq!(button.label, "Watch Demo");

        presenter.present("supply");
        let button = presenter.view().content().unwrap().demo_button.clone().unwrap();
        assert_eq!(button.label, "View Demo");
    }

    #[test]
    fn test_activate_demo_closes_overlay() {
        let mut presenter = presenter();
        presenter.present("supply");

        assert_eq!(presenter.activate_demo(), Some(PillarDemoAction::SupplyDemo));
        assert!(!presenter.is_open());
        assert!(!presenter.view().is_open());
        // Nothing open any more
        assert_eq!(presenter.activate_demo(), None);
    }

    #[test]
    fn test_dismiss_always_allowed() {
        let mut presenter = presenter();
        presenter.dismiss();
        assert!(!presenter.is_open());

        presenter.present("insights");
        presenter.dismiss();
        assert!(!presenter.view().is_open());
    }
}
