use gatefs::stats::RegistryStats;

use crate::commands::RegistrySource;
use crate::error::Result;
use crate::utils;

pub fn execute(source: &RegistrySource) -> Result<()> {
    let registry = source.load()?;
    utils::print_header(&format!("Statistics for {}", registry.base().display()));

    let stats = RegistryStats::collect(&registry);
    println!("Registered paths: {}", stats.registered);
    println!("Listed files:     {}", stats.listed);
    println!("Hidden paths:     {}", stats.hidden);
    println!("Total size:       {}", utils::format_size(stats.total_size));

    if stats.hidden > 0 {
        utils::print_warning(&format!(
            "{} registered path(s) lie outside the base and can never be opened",
            stats.hidden
        ));
    }
    if stats.missing > 0 {
        utils::print_warning(&format!(
            "{} listed file(s) are missing on disk",
            stats.missing
        ));
    }

    Ok(())
}
