//! Panel collaborator interface
//!
//! The engine never looks inside a panel. It only positions it, sizes it,
//! toggles its visibility and reads its title for the tab strip.

use crate::model::Rect;

/// Unique identifier for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

/// Content-bearing child managed by a dock group
pub trait Panel {
    fn id(&self) -> PanelId;

    /// Label shown on the panel's tab
    fn title(&self) -> &str;

    /// Current bounds in the group's parent space
    fn geometry(&self) -> Rect;

    fn set_position(&mut self, x: f64, y: f64);

    fn set_size(&mut self, width: f64, height: f64);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn set_geometry(&mut self, rect: Rect) {
        self.set_position(rect.x, rect.y);
        self.set_size(rect.width, rect.height);
    }
}

/// Plain panel that just records what the engine tells it
#[derive(Debug, Clone, PartialEq)]
pub struct DockWidget {
    pub id: PanelId,
    pub title: String,
    pub rect: Rect,
    pub visible: bool,
}

impl DockWidget {
    pub fn new(id: PanelId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            rect: Rect::default(),
            visible: true,
        }
    }
}

impl Panel for DockWidget {
    fn id(&self) -> PanelId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn geometry(&self) -> Rect {
        self.rect
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.rect.x = x;
        self.rect.y = y;
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.rect.width = width;
        self.rect.height = height;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
