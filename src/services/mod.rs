//! Services module - host-independent helpers the descriptors build on.
//!
//! - [`discovery`]: locating the game installation and external tooling
//!   (environment override, Steam library folders, Windows registry)
//! - [`file_version`]: reading the version record embedded in a game binary,
//!   used to pick the load-order mechanism for the installed build
//!
//! Nothing in here touches the organizer: all inputs are explicit parameters,
//! which keeps the services testable without a host.

pub mod discovery;
pub mod file_version;

pub use discovery::{loot_install_path, resolve_game_paths};
pub use file_version::{FileVersionError, FixedFileVersion, read_file_version};
