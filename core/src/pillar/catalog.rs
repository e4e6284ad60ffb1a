//! Embedded pillar table

use super::record::PillarRecord;
use crate::error::PillarError;
use std::collections::HashSet;

const BUILTIN_TABLE: &str = include_str!("../../data/pillars.json");

/// Read-only pillar table, in page order
#[derive(Debug, Clone)]
pub struct PillarCatalog {
    records: Vec<PillarRecord>,
}

impl PillarCatalog {
    /// The table shipped with the site
    pub fn builtin() -> Result<Self, PillarError> {
        Self::from_json(BUILTIN_TABLE)
    }

    /// Parse a table, rejecting duplicate ids
    pub fn from_json(json: &str) -> Result<Self, PillarError> {
        let records: Vec<PillarRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(PillarError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        Ok(Self { records })
    }

    pub fn get(&self, id: &str) -> Option<&PillarRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PillarRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::PillarDemoAction;

    #[test]
    fn test_builtin_table_loads_in_page_order() {
        let catalog = PillarCatalog::builtin().unwrap();
        assert_eq!(
            catalog.ids(),
            vec!["core", "storm", "grid", "supply", "field", "design", "insights", "vault"]
        );
    }

    #[test]
    fn test_vault_record() {
        let catalog = PillarCatalog::builtin().unwrap();
        let vault = catalog.get("vault").unwrap();
        assert_eq!(vault.title, "NEXA Vault");
        assert_eq!(vault.pain_points.len(), 3);
        assert_eq!(vault.security.len(), 4);
        assert!(vault.demo.is_none());
    }

    #[test]
    fn test_only_three_pillars_have_demos() {
        let catalog = PillarCatalog::builtin().unwrap();
        let mut with_demo: Vec<(&str, PillarDemoAction)> = catalog
            .iter()
            .filter_map(|record| record.demo.as_ref().map(|demo| (record.id.as_str(), demo.action)))
            .collect();
        with_demo.sort_by_key(|(id, _)| *id);

        assert_eq!(
            with_demo,
            vec![
                ("field", PillarDemoAction::FieldVideo),
                ("insights", PillarDemoAction::InsightsDashboard),
                ("supply", PillarDemoAction::SupplyDemo),
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "a", "icon": "i", "title": "A", "subtitle": "", "description": "",
             "pain_points": [], "security": [], "stacking": ""},
            {"id": "a", "icon": "i", "title": "A2", "subtitle": "", "description": "",
             "pain_points": [], "security": [], "stacking": ""}
        ]"#;
        assert!(matches!(
            PillarCatalog::from_json(json),
            Err(PillarError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_malformed_table_rejected() {
        assert!(matches!(
            PillarCatalog::from_json("{}"),
            Err(PillarError::InvalidTable(_))
        ));
    }
}
