//! Host-facing plugin contract.
//!
//! The organizer (the host application) drives everything: it constructs a
//! game descriptor, calls [`GamePlugin::init`] exactly once, and then issues
//! read-only queries at will, in no particular order, for the lifetime of the
//! process. The descriptor owns no threads and performs no background work.
//!
//! The descriptor never reaches into host globals. Everything it needs from
//! the host arrives through the [`Organizer`] handle passed to `init`, which
//! keeps the contract substitutable in tests.

use std::sync::Arc;

use anyhow::Result;
use camino::Utf8Path;

use crate::models::{ExecutableInfo, GameFacts, GamePaths, ProfileSettings, VersionInfo};
use crate::services::discovery;

/// Strategy by which the relative ordering of game content files is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrderMechanism {
    /// Filesystem modification time of the master files decides the order.
    /// Legacy behavior of game builds predating the ordered list file.
    FileTime,
    /// A textual `plugins.txt` load-order file is authoritative.
    PluginsTxt,
}

/// One user-configurable option a plugin declares to the organizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSetting {
    pub key: String,
    pub description: String,
    pub default_value: String,
}

/// The host's side of the contract.
///
/// Hosts implement this once per process. Tests substitute it to pin the
/// managed-game slot and the discovered paths without touching the real
/// filesystem layout.
pub trait Organizer: Send + Sync {
    /// Whether `game` is the descriptor the host currently has selected.
    ///
    /// Compared by identity, not by value: two descriptors with equal facts
    /// are still distinct plugins.
    fn is_managed_game(&self, game: &dyn GamePlugin) -> bool;

    /// Resolve the installation and per-user folders for a game.
    ///
    /// The default implementation performs the generic discovery chain
    /// (environment override, Steam library, Windows registry). Failure here
    /// is the `init` failure path: the descriptor propagates it and
    /// constructs nothing.
    fn resolve_game_paths(&self, facts: &GameFacts) -> Result<GamePaths> {
        discovery::resolve_game_paths(facts)
    }
}

/// A game descriptor as seen by the organizer.
///
/// All query methods are pure reads of values fixed at compile time or
/// resolved during [`init`](Self::init). The host guarantees `init` is called
/// (successfully) before any other method; behavior before that point is not
/// contracted.
pub trait GamePlugin {
    /// Resolve game paths through the organizer and construct the feature
    /// collaborators. Called exactly once; a repeated call is an error.
    fn init(&mut self, organizer: Arc<dyn Organizer>) -> Result<()>;

    /// Display name of the game.
    fn game_name(&self) -> &'static str;

    /// Display name of this plugin.
    fn plugin_name(&self) -> &'static str;

    fn author(&self) -> &'static str;

    fn description(&self) -> String;

    /// Version of this plugin (not of the game).
    fn version(&self) -> VersionInfo;

    /// Whether this descriptor is the game the organizer currently manages.
    fn is_active(&self) -> bool;

    /// User-configurable options this plugin declares. May be empty.
    fn settings(&self) -> Vec<PluginSetting>;

    /// Launchable programs associated with the game, in display order.
    /// Entries are returned even when their path does not exist on disk;
    /// existence is the organizer's concern.
    fn executables(&self) -> Vec<ExecutableInfo>;

    /// Materialize the per-profile files selected by `settings` into
    /// `profile_dir`. Best-effort: individual copy failures are logged and
    /// never surfaced, and partial completion is accepted.
    fn initialize_profile(&self, profile_dir: &Utf8Path, settings: ProfileSettings);

    /// File extension of the game's save files, without the dot.
    fn savegame_extension(&self) -> &'static str;

    /// Steam application id, in the string form Steam URLs use.
    fn steam_app_id(&self) -> &'static str;

    /// Master files the game always loads, lowercased on-disk names.
    fn primary_plugins(&self) -> Vec<&'static str>;

    /// Master files added by official DLC.
    fn dlc_plugins(&self) -> Vec<&'static str>;

    /// Configuration files the game reads from the per-user folder.
    fn ini_files(&self) -> Vec<&'static str>;

    /// File name of the game's main binary.
    fn binary_name(&self) -> &'static str;

    /// Short identifying token for the game.
    fn short_name(&self) -> &'static str;

    /// Decide how load order is determined for the installed game build.
    fn load_order_mechanism(&self) -> LoadOrderMechanism;

    /// Game id in the Nexus mod-organizer catalog.
    fn nexus_mod_organizer_id(&self) -> u32;

    /// Game id in the Nexus game catalog.
    fn nexus_game_id(&self) -> u32;
}
