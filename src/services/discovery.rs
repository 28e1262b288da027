//! Game installation and tool-path discovery.
//!
//! Discovery runs once, inside `init`, and attempts the following in order:
//! 1. The game's environment-variable override (e.g. `SKYRIM_PATH`)
//! 2. Steam library folders (`steamapps/common/<folder>`)
//! 3. Windows registry keys (Windows builds only)
//!
//! The per-user folders come from the platform user directories (Documents
//! and the local application-data folder).

use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8PathBuf;

use crate::models::{GameFacts, GamePaths};

/// Resolve all folders for `facts`, failing when the installation cannot be
/// located or the user folders are unavailable.
pub fn resolve_game_paths(facts: &GameFacts) -> Result<GamePaths> {
    let game_dir = locate_game_folder(facts)?;
    let my_games_dir = my_games_folder(facts)?;
    let local_app_dir = local_app_folder(facts)?;

    tracing::info!(
        "Resolved {} at {} (user folders: {}, {})",
        facts.steam_folder_name,
        game_dir,
        my_games_dir,
        local_app_dir
    );

    Ok(GamePaths {
        game_dir,
        my_games_dir,
        local_app_dir,
    })
}

fn locate_game_folder(facts: &GameFacts) -> Result<Utf8PathBuf> {
    if let Ok(override_path) = std::env::var(&facts.env_override) {
        let path = Utf8PathBuf::from(override_path);
        if path.is_dir() {
            tracing::debug!("Found game via {}: {}", facts.env_override, path);
            return Ok(path);
        }
        tracing::warn!(
            "{} is set but {} is not a directory, continuing discovery",
            facts.env_override,
            path
        );
    }

    for steam_root in steam_roots() {
        let candidate = steam_root
            .join("steamapps")
            .join("common")
            .join(&facts.steam_folder_name);
        if candidate.is_dir() {
            tracing::debug!("Found game in Steam library: {}", candidate);
            return Ok(candidate);
        }
    }

    #[cfg(windows)]
    if let Some(path) = registry_install_path(facts) {
        if path.is_dir() {
            tracing::debug!("Found game via registry: {}", path);
            return Ok(path);
        }
    }

    bail!(
        "could not locate the {} installation; set {} to the game directory",
        facts.steam_folder_name,
        facts.env_override
    );
}

/// Candidate Steam installation roots for the current platform.
fn steam_roots() -> Vec<Utf8PathBuf> {
    let mut roots = Vec::new();

    #[cfg(windows)]
    {
        if let Ok(program_files) = std::env::var("PROGRAMFILES(X86)") {
            roots.push(Utf8PathBuf::from(program_files).join("Steam"));
        }
        if let Ok(program_files) = std::env::var("PROGRAMFILES") {
            roots.push(Utf8PathBuf::from(program_files).join("Steam"));
        }
    }

    #[cfg(unix)]
    {
        if let Ok(home) = std::env::var("HOME") {
            roots.push(Utf8PathBuf::from(&home).join(".steam").join("steam"));
            roots.push(
                Utf8PathBuf::from(&home)
                    .join(".local")
                    .join("share")
                    .join("Steam"),
            );
        }
    }

    roots
}

#[cfg(windows)]
fn registry_install_path(facts: &GameFacts) -> Option<Utf8PathBuf> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    for registry_key in &facts.registry_keys {
        if let Ok(key) = hklm.open_subkey(registry_key) {
            if let Ok(install_path) = key.get_value::<String, _>(&facts.registry_value) {
                return Some(Utf8PathBuf::from(install_path));
            }
        }
    }
    None
}

fn my_games_folder(facts: &GameFacts) -> Result<Utf8PathBuf> {
    let documents = dirs::document_dir().context("no documents folder for the current user")?;
    let documents = Utf8PathBuf::from_path_buf(documents)
        .map_err(|p| anyhow!("documents folder is not valid UTF-8: {}", p.display()))?;
    Ok(documents.join("My Games").join(&facts.my_games_folder_name))
}

fn local_app_folder(facts: &GameFacts) -> Result<Utf8PathBuf> {
    let local = dirs::data_local_dir().context("no local app-data folder for the current user")?;
    let local = Utf8PathBuf::from_path_buf(local)
        .map_err(|p| anyhow!("local app-data folder is not valid UTF-8: {}", p.display()))?;
    Ok(local.join(&facts.local_app_folder_name))
}

/// Locate the LOOT executable.
///
/// Resolution is delegated to the `LOOT_PATH` environment variable and, on
/// Windows, the key LOOT's installer writes. When neither yields a path, an
/// empty path is returned; the organizer treats nonexistent executables as
/// not-installed rather than an error.
pub fn loot_install_path() -> Utf8PathBuf {
    if let Ok(loot_dir) = std::env::var("LOOT_PATH") {
        return Utf8PathBuf::from(loot_dir).join("LOOT.exe");
    }

    #[cfg(windows)]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_LOCAL_MACHINE;

        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        if let Ok(key) = hklm.open_subkey(r"Software\LOOT") {
            if let Ok(install_path) = key.get_value::<String, _>("Installed Path") {
                return Utf8PathBuf::from(install_path).join("LOOT.exe");
            }
        }
    }

    tracing::debug!("LOOT installation not found");
    Utf8PathBuf::new()
}
