//! Pillar records

use serde::{Deserialize, Serialize};

/// A problem one pillar solves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPoint {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Entry point into a pillar's demo from the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarDemoAction {
    /// Reveal the insights dashboard and scroll to the top
    InsightsDashboard,
    /// Play the field assistant video
    FieldVideo,
    /// Open the supply chain demo at its first step
    SupplyDemo,
}

/// Demo button shown in the overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarDemo {
    pub label: String,
    pub action: PillarDemoAction,
}

/// One product line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarRecord {
    /// Lookup key used by the page markup (`data-pillar`)
    pub id: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub pain_points: Vec<PainPoint>,
    /// Security feature labels, displayed as badges
    pub security: Vec<String>,
    pub stacking: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<PillarDemo>,
}
