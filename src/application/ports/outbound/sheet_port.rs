//! Sheet port - the host's window registry and button slot on each sheet

use anyhow::Result;

use crate::domain::entities::DocumentKind;
use crate::domain::value_objects::{ButtonView, CharacterId, SheetId};

/// A sheet window currently open in the host.
#[derive(Debug, Clone)]
pub struct OpenSheet {
    pub sheet_id: SheetId,
    pub character_id: CharacterId,
    pub kind: DocumentKind,
}

/// Port over the host's sheet windows.
///
/// Synchronous on purpose: the host's window registry and DOM mutations
/// run inline inside its render dispatch, there is nothing to await.
pub trait SheetRegistryPort: Send + Sync {
    /// Sheet windows currently open in the host.
    fn open_sheets(&self) -> Vec<OpenSheet>;

    /// Ask the host to re-render the open sheet for a character, without
    /// waiting for its own reactive update cycle. No-op when no sheet for
    /// that character is open.
    fn render(&self, character_id: CharacterId);

    /// Whether a Tag Team button is already mounted on this sheet.
    fn has_button(&self, sheet_id: SheetId) -> bool;

    /// Mount the button into the sheet's details row. Implementations also
    /// apply the row layout (flex, gap, button pushed to the row end) and
    /// wire the click handler back to the activation entry point.
    fn mount_button(&self, sheet_id: SheetId, view: &ButtonView) -> Result<()>;
}
