//! Shared behavior of gamebryo-family titles.
//!
//! The engine family shares its on-disk layout: an installation folder with
//! the binaries and a bundled default configuration, a `Documents/My Games`
//! folder with the live configuration, and a local-appdata folder with the
//! plugin-list files. [`GamebryoBase`] holds the folders resolved at `init`
//! plus the [`GameFacts`] record, and game descriptors compose it instead of
//! subclassing anything.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::models::{GameFacts, GamePaths};

/// Resolved per-game state every gamebryo descriptor carries after `init`.
#[derive(Debug, Clone)]
pub struct GamebryoBase {
    facts: GameFacts,
    paths: GamePaths,
}

impl GamebryoBase {
    pub fn new(facts: GameFacts, paths: GamePaths) -> Self {
        Self { facts, paths }
    }

    pub fn facts(&self) -> &GameFacts {
        &self.facts
    }

    /// The game installation folder discovered during `init`.
    pub fn game_directory(&self) -> &Utf8Path {
        &self.paths.game_dir
    }

    /// The game's folder under the user's `Documents/My Games`.
    pub fn my_games_path(&self) -> &Utf8Path {
        &self.paths.my_games_dir
    }

    /// The game's folder under the local application-data directory.
    pub fn local_app_folder(&self) -> &Utf8Path {
        &self.paths.local_app_dir
    }

    /// Resolve `name` against the game installation folder. The result is not
    /// checked for existence.
    pub fn find_in_game_folder(&self, name: &str) -> Utf8PathBuf {
        self.paths.game_dir.join(name)
    }
}

/// Copy `file_name` from `src_dir` into `profile_dir`, keeping the name.
///
/// Best-effort: a missing source is skipped, an I/O failure is logged and
/// swallowed, an existing destination is overwritten. The source is never
/// touched.
pub fn copy_to_profile(src_dir: &Utf8Path, profile_dir: &Utf8Path, file_name: &str) {
    copy_to_profile_as(src_dir, profile_dir, file_name, file_name);
}

/// Copy `src_name` from `src_dir` into `profile_dir` under `dest_name`.
/// Same best-effort semantics as [`copy_to_profile`].
pub fn copy_to_profile_as(
    src_dir: &Utf8Path,
    profile_dir: &Utf8Path,
    src_name: &str,
    dest_name: &str,
) {
    let src = src_dir.join(src_name);
    if !src.is_file() {
        tracing::debug!("{} not present, nothing to copy into the profile", src);
        return;
    }

    let dest = profile_dir.join(dest_name);
    if let Err(err) = fs::copy(&src, &dest) {
        tracing::warn!("Failed to copy {} to {}: {}", src, dest, err);
    }
}
