//! Built-in product demos
//!
//! Element ids match the markup of the product demo section and the supply
//! chain overlay. Default delays reproduce the narrative pacing of the page.

use super::definition::{ActionControl, DemoDefinition};
use crate::config::SiteConfig;
use crate::error::{ConfigError, DemoError, Result};

pub const JOB_PACKAGE: &str = "job-package";
pub const COMPLIANCE: &str = "compliance";
pub const CREW_SCHEDULING: &str = "crew-scheduling";
pub const UNDERGROUND_DESIGN: &str = "underground-design";
pub const SUPPLY_CHAIN: &str = "supply-chain";

fn job_package() -> std::result::Result<DemoDefinition, DemoError> {
    DemoDefinition::builder(JOB_PACKAGE, "Job Package")
        .step(
            "Upload job package",
            ActionControl::manual("start-jp-demo", "Start Demo")
                .with_delay_ms(1500)
                .with_busy_indicator(),
        )
        .step(
            "Extract specs",
            ActionControl::manual("next-jp-2", "Next Step"),
        )
        .step(
            "Pre-flight compliance",
            ActionControl::manual("next-jp-3", "Next Step"),
        )
        .finish("Ready for the field", "restart-jp-demo", "Restart Demo")
}

fn compliance() -> std::result::Result<DemoDefinition, DemoError> {
    DemoDefinition::builder(COMPLIANCE, "Compliance")
        .step(
            "Capture site photo",
            ActionControl::manual("simulate-photo-upload", "Simulate Photo Upload")
                .with_delay_ms(1500)
                .with_busy_label("Uploading..."),
        )
        .step(
            "Photo uploaded",
            ActionControl::on_arrival("compliance-analysis", "Analyzing photo")
                .with_delay_ms(1000),
        )
        .finish(
            "Compliance results",
            "restart-compliance-demo",
            "Restart Demo",
        )
}

fn crew_scheduling() -> std::result::Result<DemoDefinition, DemoError> {
    DemoDefinition::builder(CREW_SCHEDULING, "Crew Scheduling")
        .step(
            "Unscheduled jobs",
            ActionControl::manual("auto-schedule-btn", "Auto-Schedule Crews")
                .with_delay_ms(2000)
                .with_busy_label("Optimizing..."),
        )
        .step(
            "Optimized schedule",
            ActionControl::manual("review-crews-btn", "Review Crews"),
        )
        .finish(
            "Crew recommendations",
            "restart-schedule-demo",
            "Restart Demo",
        )
}

fn underground_design() -> std::result::Result<DemoDefinition, DemoError> {
    DemoDefinition::builder(UNDERGROUND_DESIGN, "Underground Design")
        .step(
            "Submit undesigned job",
            ActionControl::manual("submit-design-btn", "Generate Underground Design")
                .with_delay_ms(3200)
                .with_busy_indicator()
                .with_busy_label("Processing..."),
        )
        .step(
            "Engineered design",
            ActionControl::manual("permit-package-btn", "Build Permit Package"),
        )
        .finish("Permit package", "restart-design-demo", "Restart Demo")
}

fn supply_chain() -> std::result::Result<DemoDefinition, DemoError> {
    DemoDefinition::builder(SUPPLY_CHAIN, "Supply Chain")
        .step("Material request", ActionControl::manual("next-supply-2", "Next"))
        .step("Inventory match", ActionControl::manual("next-supply-3", "Next"))
        .finish("Delivery scheduled", "restart-supply-demo", "Start Over")
}

/// Ordered collection of demo definitions with configuration applied
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    demos: Vec<DemoDefinition>,
}

impl DemoCatalog {
    /// Built-in demos at their default pacing
    pub fn defaults() -> Result<Self> {
        let demos = vec![
            job_package()?,
            compliance()?,
            crew_scheduling()?,
            underground_design()?,
            supply_chain()?,
        ];
        Ok(Self { demos })
    }

    /// Built-in demos with pacing overrides and instant mode applied
    pub fn builtin(config: &SiteConfig) -> Result<Self> {
        let mut catalog = Self::defaults()?;

        for demo_id in config.demos.keys() {
            if catalog.get(demo_id).is_none() {
                return Err(ConfigError::UnknownDemo {
                    demo: demo_id.clone(),
                }
                .into());
            }
        }

        catalog.demos = catalog
            .demos
            .into_iter()
            .map(|demo| {
                let demo = match config.pacing(&demo.id) {
                    Some(pacing) => demo.with_pacing(pacing)?,
                    None => demo,
                };
                Ok(if config.instant_demos {
                    demo.instant()
                } else {
                    demo
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&DemoDefinition> {
        self.demos.iter().find(|demo| demo.id == id)
    }

    /// Look up a demo, failing for unknown ids
    pub fn require(&self, id: &str) -> std::result::Result<&DemoDefinition, DemoError> {
        self.get(id).ok_or_else(|| DemoError::UnknownDemo { id: id.to_string() })
    }

    pub fn ids(&self) -> Vec<&str> {
        self.demos.iter().map(|demo| demo.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DemoDefinition> {
        self.demos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoPacing;
    use std::time::Duration;

    #[test]
    fn test_default_pacing_matches_page() {
        let catalog = DemoCatalog::defaults().unwrap();
        assert_eq!(
            catalog.get(JOB_PACKAGE).unwrap().pacing().step_delays_ms,
            vec![1500, 0, 0]
        );
        assert_eq!(
            catalog.get(COMPLIANCE).unwrap().pacing().step_delays_ms,
            vec![1500, 1000]
        );
        assert_eq!(
            catalog.get(CREW_SCHEDULING).unwrap().action(1).unwrap().delay,
            Duration::from_millis(2000)
        );
        assert_eq!(
            catalog.get(UNDERGROUND_DESIGN).unwrap().action(1).unwrap().delay,
            Duration::from_millis(3200)
        );
    }

    #[test]
    fn test_step_counts() {
        let catalog = DemoCatalog::defaults().unwrap();
        for demo in catalog.iter() {
            let total = demo.total_steps();
            assert!(total == 3 || total == 4, "{} has {} steps", demo.id, total);
        }
        assert_eq!(catalog.get(JOB_PACKAGE).unwrap().total_steps(), 4);
    }

    #[test]
    fn test_config_overrides_and_instant_mode() {
        let config = SiteConfig::default().with_pacing(JOB_PACKAGE, DemoPacing::new(vec![10, 20, 30]));
        let catalog = DemoCatalog::builtin(&config).unwrap();
        assert_eq!(
            catalog.get(JOB_PACKAGE).unwrap().pacing().step_delays_ms,
            vec![10, 20, 30]
        );

        let instant = DemoCatalog::builtin(&config.with_instant_demos(true)).unwrap();
        assert!(instant
            .iter()
            .all(|demo| demo.pacing().step_delays_ms.iter().all(|ms| *ms == 0)));
    }

    #[test]
    fn test_unknown_demo_in_config_rejected() {
        let config = SiteConfig::default().with_pacing("storm", DemoPacing::new(vec![1]));
        assert!(DemoCatalog::builtin(&config).is_err());
    }

    #[test]
    fn test_require_unknown_demo() {
        let catalog = DemoCatalog::defaults().unwrap();
        assert!(catalog.require("vault").is_err());
        assert_eq!(catalog.ids().len(), 5);
    }
}
