//! Aggregate stats bar
//!
//! One-line summary of backend stats. Stale values stay on screen when a
//! refresh fails; the list and the stats update independently.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Stats;

/// Props for the StatsBar component
#[derive(Default, Props)]
pub struct StatsBarProps {
    /// Latest stats snapshot, if any fetch has succeeded yet
    pub stats: Option<Stats>,
}

/// Horizontal bar showing total, open and per-day average counts
#[component]
pub fn StatsBar(props: &StatsBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let content = match &props.stats {
        Some(stats) => format!(
            "Total: {}   Open: {}   Avg/day: {}",
            stats.total_tickets,
            stats.open_tickets,
            stats.avg_per_day_rounded(),
        ),
        None => "Stats unavailable".to_string(),
    };
    let color = if props.stats.is_some() {
        theme.text
    } else {
        theme.text_dimmed
    };

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: content, color: color)
        }
    }
}
