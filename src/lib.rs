// Skyrim Support Plugin - game descriptor for mod organizer frontends
//
// This is the library crate containing the host-facing plugin contract and the
// Skyrim game descriptor. The organizer loads the descriptor, calls `init` once,
// and thereafter queries it for game facts (identifiers, executables, profile
// rules, load-order strategy).

pub mod features;
pub mod gamebryo;
pub mod logging;
pub mod models;
pub mod plugin;
pub mod services;
pub mod skyrim;

// Re-export commonly used types for convenience
pub use models::{ExecutableInfo, GameFacts, GamePaths, ProfileSettings, VersionInfo};
pub use plugin::{GamePlugin, LoadOrderMechanism, Organizer, PluginSetting};
pub use skyrim::GameSkyrim;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
