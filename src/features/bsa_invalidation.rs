use std::sync::Arc;

use super::DataArchives;

/// Capability: detect and order the archive-invalidation file.
pub trait BsaInvalidation: Send + Sync {
    /// File name of the invalidation archive the organizer maintains.
    fn invalidation_bsa_name(&self) -> &str;

    /// Whether `archive_name` is the invalidation archive.
    fn is_invalidation_bsa(&self, archive_name: &str) -> bool;

    /// Archive list a fresh profile starts from: the invalidation archive
    /// ahead of the vanilla set, so loose-file overrides win.
    fn profile_archive_list(&self) -> Vec<String>;
}

/// Skyrim's BSA invalidation, layered over the game's archive set.
pub struct SkyrimBsaInvalidation {
    data_archives: Arc<dyn DataArchives>,
}

impl SkyrimBsaInvalidation {
    const INVALIDATION_BSA: &'static str = "Skyrim - Invalidation.bsa";

    pub fn new(data_archives: Arc<dyn DataArchives>) -> Self {
        Self { data_archives }
    }
}

impl BsaInvalidation for SkyrimBsaInvalidation {
    fn invalidation_bsa_name(&self) -> &str {
        Self::INVALIDATION_BSA
    }

    fn is_invalidation_bsa(&self, archive_name: &str) -> bool {
        archive_name.eq_ignore_ascii_case(Self::INVALIDATION_BSA)
    }

    fn profile_archive_list(&self) -> Vec<String> {
        let mut archives = vec![Self::INVALIDATION_BSA.to_string()];
        archives.extend(
            self.data_archives
                .vanilla_archives()
                .into_iter()
                .map(str::to_string),
        );
        archives
    }
}
