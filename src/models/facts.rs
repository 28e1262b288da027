use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Per-game constants consumed by the shared gamebryo base.
///
/// A gamebryo-family title is described by one of these records plus a thin
/// descriptor supplying the behavior that actually differs per game. The
/// record is serializable so hosts can surface it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFacts {
    /// Folder name under `steamapps/common`.
    pub steam_folder_name: String,

    /// Folder name under the user's `Documents/My Games`.
    pub my_games_folder_name: String,

    /// Folder name under the local application-data directory.
    pub local_app_folder_name: String,

    /// File name of the game's main binary.
    pub binary_name: String,

    /// File name of the game's launcher binary.
    pub launcher_name: String,

    /// Registry keys under HKLM that may carry the install path, probed in
    /// order.
    pub registry_keys: Vec<String>,

    /// Value name holding the install path under [`registry_keys`](Self::registry_keys).
    pub registry_value: String,

    /// Environment variable overriding all discovery when set.
    pub env_override: String,
}

/// Folders resolved for a game during `init`.
///
/// `game_dir` is the installation folder; `my_games_dir` and `local_app_dir`
/// are the game's per-user folders (configuration and plugin-list files
/// respectively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    pub game_dir: Utf8PathBuf,
    pub my_games_dir: Utf8PathBuf,
    pub local_app_dir: Utf8PathBuf,
}

impl GamePaths {
    pub fn new(
        game_dir: impl AsRef<Utf8Path>,
        my_games_dir: impl AsRef<Utf8Path>,
        local_app_dir: impl AsRef<Utf8Path>,
    ) -> Self {
        Self {
            game_dir: game_dir.as_ref().to_path_buf(),
            my_games_dir: my_games_dir.as_ref().to_path_buf(),
            local_app_dir: local_app_dir.as_ref().to_path_buf(),
        }
    }
}
