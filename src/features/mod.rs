//! Game feature collaborators.
//!
//! Each capability a game may offer to the organizer is one small trait:
//! locating a script-extender loader, enumerating data archives, recognizing
//! the archive-invalidation file, describing save games. A descriptor
//! constructs its implementations once during `init` and hands out shared
//! handles; the host and the descriptor may both hold them.
//!
//! None of the implementations hold a reference back to their descriptor.
//! Whatever a collaborator needs is passed at construction, which keeps the
//! ownership graph acyclic under plain `Arc` sharing.

pub mod bsa_invalidation;
pub mod data_archives;
pub mod savegame_info;
pub mod script_extender;

pub use bsa_invalidation::{BsaInvalidation, SkyrimBsaInvalidation};
pub use data_archives::{DataArchives, SkyrimDataArchives};
pub use savegame_info::{SaveGameInfo, SkyrimSaveGameInfo};
pub use script_extender::{ScriptExtender, SkyrimScriptExtender};
