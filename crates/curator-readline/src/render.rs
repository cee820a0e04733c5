//! Grid and pager presentations of the decision store.
//!
//! Both render to `String` so the REPL can print them and tests can inspect
//! them.

use colored::Colorize;
use curator_core::config::LayoutPreference;
use curator_core::decision::{Decision, DecisionStore, Pager, ReviewAction};
use curator_core::photo::StagedPhoto;
use std::fmt::Write;

/// Terminals narrower than this use the pager under `auto`.
pub const NARROW_TERMINAL_COLUMNS: u16 = 100;

pub const EMPTY_STAGING: &str = "No photos in staging";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Grid,
    Pager,
}

/// Resolves the preference against the terminal width (`None` when unknown).
pub fn resolve_layout(preference: LayoutPreference, width: Option<u16>) -> Layout {
    match preference {
        LayoutPreference::Grid => Layout::Grid,
        LayoutPreference::Pager => Layout::Pager,
        LayoutPreference::Auto => match width {
            Some(w) if w < NARROW_TERMINAL_COLUMNS => Layout::Pager,
            _ => Layout::Grid,
        },
    }
}

pub fn terminal_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(cols, _)| cols)
}

/// "x to approve • y to reject".
pub fn counts_line(store: &DecisionStore) -> String {
    let counts = store.counts();
    format!("{} to approve • {} to reject", counts.approve, counts.reject)
}

pub fn header(store: &DecisionStore) -> String {
    format!(
        "{}\n{}  ({} total remaining)",
        "Staging Review".bright_magenta().bold(),
        counts_line(store).bright_white(),
        store.total_remaining()
    )
}

fn action_badge(decision: Option<&Decision>) -> String {
    match decision.and_then(|d| d.action) {
        Some(ReviewAction::Approve) => "✓ APPROVE".green().bold().to_string(),
        Some(ReviewAction::Reject) => "✗ REJECT".red().bold().to_string(),
        None => "· pending".bright_black().to_string(),
    }
}

fn context_text(decision: Option<&Decision>) -> &str {
    match decision.map(|d| d.context.as_str()) {
        Some(context) if !context.is_empty() => context,
        _ => "-",
    }
}

fn size_text(photo: &StagedPhoto) -> String {
    format!("{:.2} MB", photo.size_megabytes())
}

/// Every photo as a card. `selected` marks the current photo.
pub fn render_grid(store: &DecisionStore, selected: usize) -> String {
    if store.is_empty() {
        return EMPTY_STAGING.bright_black().to_string();
    }

    let mut out = String::new();
    for (i, photo) in store.photos().iter().enumerate() {
        let decision = store.decision(&photo.ulid);
        let marker = if i == selected { ">" } else { " " };
        let _ = writeln!(
            out,
            "{} [{}] {}  {}  {}",
            marker.bright_cyan(),
            i + 1,
            photo.filename.bold(),
            size_text(photo).bright_black(),
            action_badge(decision)
        );
        let _ = writeln!(
            out,
            "      Visibility: {}  |  Context: {}",
            decision.map(|d| d.visibility.label()).unwrap_or("Public"),
            context_text(decision)
        );
    }
    out.trim_end().to_string()
}

/// The photo under the pager cursor with its position and navigation hints.
pub fn render_pager(store: &DecisionStore, pager: &Pager) -> String {
    let index = pager.index();
    let Some(photo) = store.photo(index) else {
        return EMPTY_STAGING.bright_black().to_string();
    };
    let decision = store.decision(&photo.ulid);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "Photo {} of {} • {} total remaining",
            index + 1,
            store.len(),
            store.total_remaining()
        )
        .bright_cyan()
    );
    let _ = writeln!(out, "{}  ({})", photo.filename.bold(), size_text(photo));
    let _ = writeln!(out, "  Decision:   {}", action_badge(decision));
    let _ = writeln!(
        out,
        "  Visibility: {}",
        decision.map(|d| d.visibility.label()).unwrap_or("Public")
    );
    let _ = writeln!(out, "  Context:    {}", context_text(decision));
    let _ = writeln!(out, "  URL:        {}", photo.url.underline());

    let prev = if pager.has_prev() { "[p]rev" } else { "      " };
    let next = if pager.has_next(store.len()) { "[n]ext" } else { "" };
    let _ = write!(out, "{}", format!("{}  {}", prev, next).trim_end().bright_black());
    out
}
