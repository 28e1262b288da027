//! Shared fixtures for the integration tests.
//!
//! `GameFixture` lays out a throwaway Skyrim installation (game folder,
//! `My Games` folder, local-appdata folder, profile folder) under a temp
//! directory, and `TestOrganizer` stands in for the host, pinning path
//! resolution to that layout.

// Not every test binary touches every helper.
#![allow(dead_code)]

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use skyrim_support::models::{GameFacts, GamePaths};
use skyrim_support::plugin::{GamePlugin, Organizer};
use skyrim_support::GameSkyrim;
use tempfile::TempDir;

/// Organizer double with a settable managed-game slot and fixed paths.
pub struct TestOrganizer {
    paths: GamePaths,
    /// Address of the descriptor currently designated active; 0 when none.
    managed_game: AtomicUsize,
}

impl TestOrganizer {
    pub fn new(paths: GamePaths) -> Self {
        Self {
            paths,
            managed_game: AtomicUsize::new(0),
        }
    }

    pub fn set_managed_game(&self, game: &dyn GamePlugin) {
        self.managed_game
            .store(descriptor_address(game), Ordering::SeqCst);
    }
}

impl Organizer for TestOrganizer {
    fn is_managed_game(&self, game: &dyn GamePlugin) -> bool {
        let address = descriptor_address(game);
        address != 0 && address == self.managed_game.load(Ordering::SeqCst)
    }

    fn resolve_game_paths(&self, _facts: &GameFacts) -> Result<GamePaths> {
        Ok(self.paths.clone())
    }
}

/// Identity of a descriptor, as the host tracks it: the instance address.
fn descriptor_address(game: &dyn GamePlugin) -> usize {
    game as *const dyn GamePlugin as *const () as usize
}

/// Organizer double whose path resolution always fails.
pub struct FailingOrganizer;

impl Organizer for FailingOrganizer {
    fn is_managed_game(&self, _game: &dyn GamePlugin) -> bool {
        false
    }

    fn resolve_game_paths(&self, _facts: &GameFacts) -> Result<GamePaths> {
        anyhow::bail!("no game installation on this machine")
    }
}

pub struct GameFixture {
    _root: TempDir,
    pub game_dir: Utf8PathBuf,
    pub my_games_dir: Utf8PathBuf,
    pub local_app_dir: Utf8PathBuf,
    pub profile_dir: Utf8PathBuf,
}

impl GameFixture {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let root_path = Utf8PathBuf::from_path_buf(root.path().to_path_buf()).unwrap();

        let game_dir = root_path.join("game");
        let my_games_dir = root_path.join("My Games").join("Skyrim");
        let local_app_dir = root_path.join("AppData").join("Local").join("Skyrim");
        let profile_dir = root_path.join("profile");
        for dir in [&game_dir, &my_games_dir, &local_app_dir, &profile_dir] {
            fs::create_dir_all(dir).unwrap();
        }

        Self {
            _root: root,
            game_dir,
            my_games_dir,
            local_app_dir,
            profile_dir,
        }
    }

    pub fn paths(&self) -> GamePaths {
        GamePaths::new(&self.game_dir, &self.my_games_dir, &self.local_app_dir)
    }

    pub fn organizer(&self) -> Arc<TestOrganizer> {
        Arc::new(TestOrganizer::new(self.paths()))
    }

    /// A descriptor initialized against this fixture.
    pub fn init_game(&self) -> GameSkyrim {
        let mut game = GameSkyrim::new();
        game.init(self.organizer()).unwrap();
        game
    }

    pub fn write_game_file(&self, name: &str, contents: &str) {
        write_file(&self.game_dir, name, contents);
    }

    pub fn write_my_games_file(&self, name: &str, contents: &str) {
        write_file(&self.my_games_dir, name, contents);
    }

    pub fn write_local_app_file(&self, name: &str, contents: &str) {
        write_file(&self.local_app_dir, name, contents);
    }

    pub fn profile_file(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.profile_dir.join(name)).ok()
    }
}

fn write_file(dir: &Utf8Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
