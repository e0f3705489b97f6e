use crate::registry::PathRegistry;

/// Summary of what a registry exposes and what is actually on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Registered paths.
    pub registered: usize,
    /// Registered paths that show up in the listing.
    pub listed: usize,
    /// Registered paths outside the base, which can never be opened.
    pub hidden: usize,
    /// Listed files whose stat failed, usually because they are gone.
    pub missing: usize,
    /// Combined size in bytes of the listed files that are present.
    pub total_size: u64,
}

impl RegistryStats {
    /// Stat every listed file of `registry`. No file is opened.
    pub fn collect(registry: &PathRegistry) -> Self {
        let mut stats = Self {
            registered: registry.len(),
            ..Self::default()
        };

        for (_, file) in registry.iter() {
            stats.listed += 1;
            match file.stat() {
                Ok(metadata) => stats.total_size += metadata.len(),
                Err(_) => stats.missing += 1,
            }
        }
        stats.hidden = stats.registered - stats.listed;

        stats
    }
}
