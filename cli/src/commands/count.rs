//! Stat counter preview

use anyhow::{anyhow, Result};
use nexa_site_core::animation::{parse_stat_target, CounterAnimation};
use nexa_site_core::SiteConfig;
use std::io::Write;
use std::time::Duration;

/// Animate a stat counter in place
pub async fn count_command(target: String, config: SiteConfig) -> Result<()> {
    let value = parse_stat_target(None, &target)
        .ok_or_else(|| anyhow!("Not a stat number: {}", target))?;
    let animation = CounterAnimation::new(value, &config.counter);
    let frame = Duration::from_millis(config.counter.frame_ms);

    let mut stdout = std::io::stdout();
    for shown in animation.frames() {
        write!(stdout, "\r{}", shown)?;
        stdout.flush()?;
        if !config.instant_demos {
            tokio::time::sleep(frame).await;
        }
    }
    writeln!(stdout)?;

    Ok(())
}
