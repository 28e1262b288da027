use std::sync::Arc;

use super::ScriptExtender;

/// Capability: describe the game's save files.
pub trait SaveGameInfo: Send + Sync {
    /// Extension of the game's own save files, without the dot.
    fn extension(&self) -> &str;

    /// Extension of the script-extender co-save written next to each save,
    /// when the game has a script extender.
    fn co_save_extension(&self) -> Option<&str>;
}

/// Skyrim save files (`.ess`, with an SKSE co-save).
pub struct SkyrimSaveGameInfo {
    script_extender: Arc<dyn ScriptExtender>,
}

impl SkyrimSaveGameInfo {
    pub fn new(script_extender: Arc<dyn ScriptExtender>) -> Self {
        Self { script_extender }
    }
}

impl SaveGameInfo for SkyrimSaveGameInfo {
    fn extension(&self) -> &str {
        "ess"
    }

    fn co_save_extension(&self) -> Option<&str> {
        Some(self.script_extender.savegame_extension())
    }
}
