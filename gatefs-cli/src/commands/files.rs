use tabled::{Table, Tabled};

use crate::commands::RegistrySource;
use crate::error::Result;
use crate::utils;

#[derive(Tabled)]
struct FileInfo {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
}

pub fn execute(source: &RegistrySource, json: bool) -> Result<()> {
    let registry = source.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&registry.manifest())?);
        return Ok(());
    }

    utils::print_header(&format!("Files under {}", registry.base().display()));

    let mut files: Vec<FileInfo> = registry
        .iter()
        .map(|(name, file)| {
            let size = match file.stat() {
                Ok(metadata) => utils::format_size(metadata.len()),
                Err(_) => "missing".to_string(),
            };
            FileInfo { name, size }
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    if files.is_empty() {
        utils::print_info("No files are exposed by this registry.");
    } else {
        let len = files.len();
        let table = Table::new(files);
        println!("{}", table);
        println!();
        utils::print_info(&format!("Found {} file(s)", len));
    }

    Ok(())
}
