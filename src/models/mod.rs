//! Value types shared between the plugin contract and the game descriptors:
//! - [`ExecutableInfo`]: one launchable program associated with a game
//! - [`ProfileSettings`]: flag set selecting which per-profile files to materialize
//! - [`VersionInfo`]: plugin metadata version
//! - [`GameFacts`]: per-game constants consumed by the shared gamebryo base
//! - [`GamePaths`]: folders resolved for a game at `init` time

pub mod executable;
pub mod facts;
pub mod profile;
pub mod version;

pub use executable::ExecutableInfo;
pub use facts::{GameFacts, GamePaths};
pub use profile::ProfileSettings;
pub use version::{ReleaseType, VersionInfo};
