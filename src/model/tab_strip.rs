//! Tab strip - ordered tab labels with one active index

use super::geometry::{Point, Rect};

/// Tab labels for a dock group, one per panel
#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    labels: Vec<String>,
    current: Option<usize>,
    /// Bounds in the group's parent space (set on geometry change)
    pub rect: Rect,
    pub visible: bool,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab. The active index is left alone.
    pub fn add_tab(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Remove the tab at `index`, returning its label.
    ///
    /// The active index stays valid (clamped to the new last tab, or None if
    /// the strip is empty) but callers should set it again explicitly.
    pub fn remove_tab(&mut self, index: usize) -> Option<String> {
        if index >= self.labels.len() {
            return None;
        }
        let label = self.labels.remove(index);
        self.current = match self.current {
            _ if self.labels.is_empty() => None,
            Some(current) => Some(current.min(self.labels.len() - 1)),
            None => None,
        };
        Some(label)
    }

    /// Activate tab `index`.
    ///
    /// Returns the new active index as the change notification, or None (and
    /// leaves the strip untouched) when `index` is out of range.
    pub fn set_current_index(&mut self, index: usize) -> Option<usize> {
        if index >= self.labels.len() {
            return None;
        }
        self.current = Some(index);
        Some(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Tab under a point, dividing the strip evenly among tabs
    pub fn tab_at(&self, p: Point) -> Option<usize> {
        if !self.visible || self.labels.is_empty() || !self.rect.contains(p) {
            return None;
        }
        let tab_width = self.rect.width / self.labels.len() as f64;
        let index = ((p.x - self.rect.x) / tab_width).floor() as usize;
        Some(index.min(self.labels.len() - 1))
    }
}
