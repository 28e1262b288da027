use camino::Utf8PathBuf;

/// One launchable program associated with a game.
///
/// Produced fresh on each [`executables`](crate::plugin::GamePlugin::executables)
/// query; never persisted. The path is resolved but not checked for existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableInfo {
    pub title: String,
    pub binary_path: Utf8PathBuf,
    pub steam_app_id: Option<String>,
}

impl ExecutableInfo {
    pub fn new(title: impl Into<String>, binary_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            title: title.into(),
            binary_path: binary_path.into(),
            steam_app_id: None,
        }
    }

    /// Tag this executable with the Steam application id it launches under.
    pub fn with_steam_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.steam_app_id = Some(app_id.into());
        self
    }
}
