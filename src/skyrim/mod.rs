//! The Skyrim game descriptor.
//!
//! Implements [`GamePlugin`] for The Elder Scrolls V: Skyrim (the 2011
//! edition, Steam app 72850). The descriptor is pure data plus a handful of
//! filesystem rules; all lifecycle and dispatch belongs to the organizer.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;

use crate::features::{
    BsaInvalidation, DataArchives, SaveGameInfo, ScriptExtender, SkyrimBsaInvalidation,
    SkyrimDataArchives, SkyrimSaveGameInfo, SkyrimScriptExtender,
};
use crate::gamebryo::{self, GamebryoBase};
use crate::models::{ExecutableInfo, GameFacts, ProfileSettings, VersionInfo};
use crate::plugin::{GamePlugin, LoadOrderMechanism, Organizer, PluginSetting};
use crate::services::discovery;
use crate::services::file_version::{FixedFileVersion, read_file_version};

/// Game builds from 1.4.26 on maintain load order in plugins.txt; older
/// builds fall back to file timestamps. Packed major.minor / build.revision
/// words of that boundary build.
const PLUGINS_TXT_MIN_MS: u32 = 0x0001_0004;
const PLUGINS_TXT_MIN_LS: u32 = 0x001A_0000;

/// Constants of the Skyrim installation layout.
pub fn skyrim_facts() -> GameFacts {
    GameFacts {
        steam_folder_name: "Skyrim".to_string(),
        my_games_folder_name: "Skyrim".to_string(),
        local_app_folder_name: "Skyrim".to_string(),
        binary_name: "TESV.exe".to_string(),
        launcher_name: "SkyrimLauncher.exe".to_string(),
        registry_keys: vec![
            r"SOFTWARE\Bethesda Softworks\Skyrim".to_string(),
            r"SOFTWARE\WOW6432Node\Bethesda Softworks\Skyrim".to_string(),
        ],
        registry_value: "Installed Path".to_string(),
        env_override: "SKYRIM_PATH".to_string(),
    }
}

/// Game descriptor for Skyrim.
///
/// Construct with [`GameSkyrim::new`], then let the organizer call
/// [`init`](GamePlugin::init) once. Identity queries that return fixed
/// literals work at any time; queries that need the resolved installation
/// (executables, profile initialization, load-order mechanism) are only
/// contracted after a successful `init`.
pub struct GameSkyrim {
    organizer: Option<Arc<dyn Organizer>>,
    base: Option<GamebryoBase>,
    script_extender: Option<Arc<dyn ScriptExtender>>,
    data_archives: Option<Arc<dyn DataArchives>>,
    bsa_invalidation: Option<Arc<dyn BsaInvalidation>>,
    savegame_info: Option<Arc<dyn SaveGameInfo>>,
}

impl GameSkyrim {
    pub fn new() -> Self {
        Self {
            organizer: None,
            base: None,
            script_extender: None,
            data_archives: None,
            bsa_invalidation: None,
            savegame_info: None,
        }
    }

    /// Pick the load-order mechanism for a given binary version.
    pub fn mechanism_for_version(version: FixedFileVersion) -> LoadOrderMechanism {
        // Equality on the major.minor word falls through to build.revision.
        if version.ms > PLUGINS_TXT_MIN_MS
            || (version.ms == PLUGINS_TXT_MIN_MS && version.ls >= PLUGINS_TXT_MIN_LS)
        {
            LoadOrderMechanism::PluginsTxt
        } else {
            LoadOrderMechanism::FileTime
        }
    }

    fn base(&self) -> &GamebryoBase {
        self.base
            .as_ref()
            .expect("init() must succeed before game queries")
    }

    /// The script-extender collaborator. Contracted after `init`.
    pub fn script_extender(&self) -> Arc<dyn ScriptExtender> {
        Arc::clone(
            self.script_extender
                .as_ref()
                .expect("init() must succeed before game queries"),
        )
    }

    /// The data-archives collaborator. Contracted after `init`.
    pub fn data_archives(&self) -> Arc<dyn DataArchives> {
        Arc::clone(
            self.data_archives
                .as_ref()
                .expect("init() must succeed before game queries"),
        )
    }

    /// The archive-invalidation collaborator. Contracted after `init`.
    pub fn bsa_invalidation(&self) -> Arc<dyn BsaInvalidation> {
        Arc::clone(
            self.bsa_invalidation
                .as_ref()
                .expect("init() must succeed before game queries"),
        )
    }

    /// The save-game collaborator. Contracted after `init`.
    pub fn savegame_info(&self) -> Arc<dyn SaveGameInfo> {
        Arc::clone(
            self.savegame_info
                .as_ref()
                .expect("init() must succeed before game queries"),
        )
    }
}

impl Default for GameSkyrim {
    fn default() -> Self {
        Self::new()
    }
}

impl GamePlugin for GameSkyrim {
    fn init(&mut self, organizer: Arc<dyn Organizer>) -> Result<()> {
        if self.base.is_some() {
            bail!("the Skyrim descriptor is already initialized");
        }

        let facts = skyrim_facts();
        let paths = organizer
            .resolve_game_paths(&facts)
            .context("Skyrim path resolution failed")?;
        let base = GamebryoBase::new(facts, paths);

        let script_extender: Arc<dyn ScriptExtender> = Arc::new(SkyrimScriptExtender);
        let data_archives: Arc<dyn DataArchives> = Arc::new(SkyrimDataArchives);
        let bsa_invalidation: Arc<dyn BsaInvalidation> =
            Arc::new(SkyrimBsaInvalidation::new(Arc::clone(&data_archives)));
        let savegame_info: Arc<dyn SaveGameInfo> =
            Arc::new(SkyrimSaveGameInfo::new(Arc::clone(&script_extender)));

        tracing::info!("Skyrim support initialized at {}", base.game_directory());

        self.organizer = Some(organizer);
        self.base = Some(base);
        self.script_extender = Some(script_extender);
        self.data_archives = Some(data_archives);
        self.bsa_invalidation = Some(bsa_invalidation);
        self.savegame_info = Some(savegame_info);
        Ok(())
    }

    fn game_name(&self) -> &'static str {
        "Skyrim"
    }

    fn plugin_name(&self) -> &'static str {
        "Skyrim Support Plugin"
    }

    fn author(&self) -> &'static str {
        "Tannin"
    }

    fn description(&self) -> String {
        "Adds support for the game Skyrim".to_string()
    }

    fn version(&self) -> VersionInfo {
        VersionInfo::final_release(1, 0, 0)
    }

    fn is_active(&self) -> bool {
        self.organizer
            .as_ref()
            .is_some_and(|organizer| organizer.is_managed_game(self))
    }

    fn settings(&self) -> Vec<PluginSetting> {
        Vec::new()
    }

    fn executables(&self) -> Vec<ExecutableInfo> {
        let base = self.base();
        vec![
            ExecutableInfo::new(
                "SKSE",
                base.find_in_game_folder(self.script_extender().loader_name()),
            ),
            ExecutableInfo::new("SBW", base.find_in_game_folder("SBW.exe")),
            ExecutableInfo::new("Skyrim", base.find_in_game_folder(self.binary_name())),
            ExecutableInfo::new(
                "Skyrim Launcher",
                base.find_in_game_folder(&base.facts().launcher_name),
            ),
            ExecutableInfo::new("BOSS", base.find_in_game_folder("BOSS/BOSS.exe")),
            ExecutableInfo::new("LOOT", discovery::loot_install_path()),
            ExecutableInfo::new("Creation Kit", base.find_in_game_folder("CreationKit.exe"))
                .with_steam_app_id("202480"),
        ]
    }

    fn initialize_profile(&self, profile_dir: &Utf8Path, settings: ProfileSettings) {
        let base = self.base();

        if settings.contains(ProfileSettings::MODS) {
            gamebryo::copy_to_profile(base.local_app_folder(), profile_dir, "plugins.txt");
            gamebryo::copy_to_profile(base.local_app_folder(), profile_dir, "loadorder.txt");
        }

        if settings.contains(ProfileSettings::CONFIGURATION) {
            if settings.contains(ProfileSettings::PREFER_DEFAULTS)
                || !base.my_games_path().join("skyrim.ini").is_file()
            {
                gamebryo::copy_to_profile_as(
                    base.game_directory(),
                    profile_dir,
                    "skyrim_default.ini",
                    "skyrim.ini",
                );
            } else {
                gamebryo::copy_to_profile(base.my_games_path(), profile_dir, "skyrim.ini");
            }

            gamebryo::copy_to_profile(base.my_games_path(), profile_dir, "skyrimprefs.ini");
        }
    }

    fn savegame_extension(&self) -> &'static str {
        "ess"
    }

    fn steam_app_id(&self) -> &'static str {
        "72850"
    }

    fn primary_plugins(&self) -> Vec<&'static str> {
        vec!["skyrim.esm", "update.esm"]
    }

    fn dlc_plugins(&self) -> Vec<&'static str> {
        vec![
            "Dawnguard.esm",
            "Dragonborn.esm",
            "HearthFires.esm",
            "HighResTexturePack01.esp",
            "HighResTexturePack02.esp",
            "HighResTexturePack03.esp",
        ]
    }

    fn ini_files(&self) -> Vec<&'static str> {
        vec!["skyrim.ini", "skyrimprefs.ini"]
    }

    fn binary_name(&self) -> &'static str {
        "TESV.exe"
    }

    fn short_name(&self) -> &'static str {
        "Skyrim"
    }

    fn load_order_mechanism(&self) -> LoadOrderMechanism {
        let binary = self.base().find_in_game_folder(self.binary_name());
        match read_file_version(&binary) {
            Ok(version) => {
                tracing::debug!("{} reports version {}", self.binary_name(), version);
                Self::mechanism_for_version(version)
            }
            Err(err) => {
                tracing::error!("{} is invalid: {}", self.binary_name(), err);
                LoadOrderMechanism::FileTime
            }
        }
    }

    fn nexus_mod_organizer_id(&self) -> u32 {
        1334
    }

    fn nexus_game_id(&self) -> u32 {
        110
    }
}
