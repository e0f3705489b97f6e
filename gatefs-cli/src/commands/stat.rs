use std::time::UNIX_EPOCH;

use crate::commands::RegistrySource;
use crate::error::Result;
use crate::utils;

pub fn execute(source: &RegistrySource, name: &str) -> Result<()> {
    let registry = source.load()?;
    let file = registry.open(name)?;
    let metadata = file.stat()?;

    utils::print_header(&format!("Stat {name}"));

    let kind = if metadata.is_file() {
        "regular file"
    } else if metadata.is_dir() {
        "directory"
    } else {
        "other"
    };

    println!("Path:      {}", file.path().display());
    println!("Type:      {kind}");
    println!(
        "Size:      {} ({} bytes)",
        utils::format_size(metadata.len()),
        metadata.len()
    );
    println!("Read-only: {}", metadata.permissions().readonly());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        println!("Mode:      {:o}", metadata.permissions().mode() & 0o7777);
    }
    if let Ok(modified) = metadata.modified() {
        if let Ok(since_epoch) = modified.duration_since(UNIX_EPOCH) {
            println!("Modified:  {} (unix time)", since_epoch.as_secs());
        }
    }

    Ok(())
}
