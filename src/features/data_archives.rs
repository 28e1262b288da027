/// Capability: enumerate the game's data archives.
pub trait DataArchives: Send + Sync {
    /// Archive files shipped with the base game, in load order.
    fn vanilla_archives(&self) -> Vec<&str>;
}

/// Skyrim's BSA archive set.
#[derive(Debug, Default)]
pub struct SkyrimDataArchives;

impl DataArchives for SkyrimDataArchives {
    fn vanilla_archives(&self) -> Vec<&str> {
        vec![
            "Skyrim - Misc.bsa",
            "Skyrim - Shaders.bsa",
            "Skyrim - Textures.bsa",
            "Skyrim - Interface.bsa",
            "Skyrim - Animations.bsa",
            "Skyrim - Meshes.bsa",
            "Skyrim - Sounds.bsa",
            "Skyrim - Voices.bsa",
            "Skyrim - VoicesExtra.bsa",
        ]
    }
}
