//! Debug tracing infrastructure for layout diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! proportion, handle and drag state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug` - per-message layout diffs only
//! - `RUST_LOG=dockgroup::model=trace` - every drag step
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockgroup/logs/dockgroup.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DockGroup, Rect};
use crate::panel::Panel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/dockgroup/logs/dockgroup.log` with daily rotation. Hosts that
/// install their own subscriber should not call this.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockgroup.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a group's layout for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub panel_count: usize,
    pub panels: Vec<PanelInfo>,
    pub proportions: Vec<f64>,
    pub handle_positions: Vec<f64>,
    pub panel_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub rect: Rect,
    pub visible: bool,
}

impl LayoutSnapshot {
    pub fn from_group<P: Panel>(group: &DockGroup<P>) -> Self {
        Self {
            panel_count: group.panels().len(),
            panels: group
                .panels()
                .iter()
                .map(|p| PanelInfo {
                    rect: p.geometry(),
                    visible: p.is_visible(),
                })
                .collect(),
            proportions: group.proportions().to_vec(),
            handle_positions: group.handles().iter().map(|h| h.position).collect(),
            panel_size: group.panel_size(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        if self.panel_count != other.panel_count {
            return Some(format!(
                "panel count: {} → {}",
                self.panel_count, other.panel_count
            ));
        }

        let mut changes = Vec::new();
        for (i, (before, after)) in self.panels.iter().zip(&other.panels).enumerate() {
            if before.rect != after.rect {
                changes.push(format!(
                    "#{}: ({:.1},{:.1} {:.1}x{:.1}) → ({:.1},{:.1} {:.1}x{:.1})",
                    i,
                    before.rect.x,
                    before.rect.y,
                    before.rect.width,
                    before.rect.height,
                    after.rect.x,
                    after.rect.y,
                    after.rect.width,
                    after.rect.height
                ));
            }
            if before.visible != after.visible {
                let status = if after.visible { "shown" } else { "hidden" };
                changes.push(format!("#{}: {}", i, status));
            }
        }

        if self.proportions != other.proportions {
            changes.push(format!("proportions: {:.3?}", other.proportions));
        }
        if self.handle_positions != other.handle_positions {
            changes.push(format!("handles: {:.1?}", other.handle_positions));
        }
        if self.panel_size != other.panel_size {
            changes.push(format!(
                "panel size: {:.1} → {:.1}",
                self.panel_size, other.panel_size
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Area, DisplayType, DockWidget, PanelId};

    #[test]
    fn test_snapshot_diff_reports_nothing_for_identical_layouts() {
        let mut group: DockGroup = DockGroup::new(Area::Right, DisplayType::SplitView);
        group.insert_panel(DockWidget::new(PanelId(1), "One"));
        group.set_geometry(Rect::new(0.0, 0.0, 300.0, 200.0));

        let a = LayoutSnapshot::from_group(&group);
        let b = LayoutSnapshot::from_group(&group);
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_snapshot_diff_reports_panel_count() {
        let mut group: DockGroup = DockGroup::new(Area::Right, DisplayType::SplitView);
        let before = LayoutSnapshot::from_group(&group);
        group.insert_panel(DockWidget::new(PanelId(1), "One"));
        let after = LayoutSnapshot::from_group(&group);

        assert_eq!(before.diff(&after).as_deref(), Some("panel count: 0 → 1"));
    }
}
