//! Terminal rendering for the site widgets

use colored::Colorize;
use nexa_site_core::contact::{Notice, NoticeKind};
use nexa_site_core::demo::DemoDefinition;
use nexa_site_core::pillar::ModalContent;
use nexa_site_core::view::{MemoryStepView, ModalView, NoticeView};

/// Render one frame of a demo widget from its recorded view state
pub fn format_demo_frame(definition: &DemoDefinition, view: &MemoryStepView) -> String {
    let active = view.active_indicators();
    let visible = view.visible_panels();

    let indicators: Vec<String> = definition
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let number = index + 1;
            let text = format!("{} {}", number, step.label);
            if active.contains(&number) {
                text.green().bold().to_string()
            } else {
                text.dimmed().to_string()
            }
        })
        .collect();

    let mut lines = vec![format!("{}  {}", "▸".cyan(), indicators.join("  →  "))];

    for number in &visible {
        if let Some(step) = definition.step(*number) {
            lines.push(format!("   {} {}", "panel:".dimmed(), step.label.bold()));
        }
    }

    if view.is_busy() {
        lines.push(format!("   {}", "⏳ working...".yellow()));
    }

    for id in view.visible_controls() {
        if let Some(control) = view.control(id) {
            lines.push(format!("   [{}] {}", control.label.cyan(), format!("#{}", id).dimmed()));
        }
    }

    lines.join("\n")
}

/// Render the pillar overlay
pub fn format_modal(content: &ModalContent) -> String {
    let mut lines = vec![
        format!("{} {}", content.title.bold(), format!("({})", content.icon).dimmed()),
        content.subtitle.blue().to_string(),
        content.description.clone(),
        String::new(),
        "Pain Points We Solve".yellow().bold().to_string(),
    ];

    for point in &content.pain_points {
        lines.push(format!("  {} {}", "•".red(), point.title.bold()));
        lines.push(format!("    {}", point.description.dimmed()));
    }

    lines.push(String::new());
    lines.push("Security Features".green().bold().to_string());
    let badges: Vec<String> = content
        .security_badges
        .iter()
        .map(|badge| format!("✓ {}", badge).green().to_string())
        .collect();
    lines.push(format!("  {}", badges.join("  ")));

    lines.push(String::new());
    lines.push("Strategic Stacking".cyan().bold().to_string());
    lines.push(format!("  {}", content.stacking));

    if let Some(demo) = &content.demo_button {
        lines.push(String::new());
        lines.push(format!("[{}]", demo.label.cyan().bold()));
    }

    lines.join("\n")
}

pub fn format_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✔ {}", notice.message).green().to_string(),
        NoticeKind::Error => format!("✖ {}", notice.message).red().to_string(),
    }
}

/// Overlay printed to stdout when opened
#[derive(Debug, Default)]
pub struct TerminalModalView {
    rendered: Option<String>,
}

impl ModalView for TerminalModalView {
    fn render(&mut self, content: &ModalContent) {
        self.rendered = Some(format_modal(content));
    }

    fn open(&mut self) {
        if let Some(rendered) = &self.rendered {
            println!("{}", rendered);
        }
    }

    fn close(&mut self) {
        println!("{}", "(overlay closed)".dimmed());
    }
}

/// Notice area printed to stdout
#[derive(Debug, Default)]
pub struct TerminalNoticeView;

impl NoticeView for TerminalNoticeView {
    fn show_notice(&mut self, notice: &Notice) {
        println!("{}", format_notice(notice));
    }

    fn dismiss_notice(&mut self) {}
}
