/// Capability: locate a third-party script-extender for the game.
pub trait ScriptExtender: Send + Sync {
    /// Short display name of the extender.
    fn name(&self) -> &str;

    /// File name of the loader users launch instead of the game binary.
    fn loader_name(&self) -> &str;

    /// Directory, relative to the game's data folder, extender plugins live in.
    fn plugin_path(&self) -> &str;

    /// Extension of the co-save file the extender writes next to each save.
    fn savegame_extension(&self) -> &str;
}

/// The Skyrim Script Extender (SKSE).
#[derive(Debug, Default)]
pub struct SkyrimScriptExtender;

impl ScriptExtender for SkyrimScriptExtender {
    fn name(&self) -> &str {
        "SKSE"
    }

    fn loader_name(&self) -> &str {
        "skse_loader.exe"
    }

    fn plugin_path(&self) -> &str {
        "SKSE/plugins"
    }

    fn savegame_extension(&self) -> &str {
        "skse"
    }
}
