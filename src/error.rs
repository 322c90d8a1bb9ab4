//! Error types for dock group operations
//!
//! None of these are fatal: the group is left untouched and the caller may
//! ignore the error.

use thiserror::Error;

use crate::panel::PanelId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DockError {
    /// Remove was called with a panel this group does not own
    #[error("panel {0:?} is not a member of this dock group")]
    PanelNotFound(PanelId),

    /// Tab activation with an index past the end of the strip
    #[error("tab index {index} out of range for {len} tabs")]
    TabOutOfRange { index: usize, len: usize },
}
