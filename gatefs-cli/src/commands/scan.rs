use std::path::{Path, PathBuf};
use std::time::Duration;

use console::style;
use gatefs::PathRegistry;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config;
use crate::error::Result;
use crate::utils;

pub async fn execute(dir: &Path, output: Option<PathBuf>) -> Result<PathBuf> {
    let base = std::fs::canonicalize(dir)?;
    utils::print_header(&format!("Scanning {}", base.display()));

    let pb = ProgressBar::new_spinner();
    if let Ok(spinner) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(spinner);
    }
    pb.set_message("Collecting files...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let scan_base = base.clone();
    let registry = tokio::task::spawn_blocking(move || PathRegistry::from_dir(scan_base)).await;
    pb.finish_and_clear();
    let registry = registry??;

    let manifest = registry.manifest();
    let output = output.unwrap_or_else(config::get_manifest_path);
    manifest.save(&output)?;

    utils::print_success(&format!("Registered {} file(s)", manifest.files.len()));
    utils::print_info(&format!(
        "Manifest saved to: {}",
        style(output.display()).cyan()
    ));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gatefs::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_scan_writes_manifest() {
        let dir = TempDir::new().unwrap();
        let plugins = dir.path().join("plugins");
        fs::create_dir_all(plugins.join("app")).unwrap();
        fs::write(plugins.join("app/plugin.json"), "{}").unwrap();

        let output = dir.path().join("manifest.json");
        let written = execute(&plugins, Some(output.clone())).await.unwrap();
        assert_eq!(written, output);

        let manifest = Manifest::load(&output).unwrap();
        assert_eq!(manifest.base, fs::canonicalize(&plugins).unwrap());
        assert_eq!(manifest.files, vec![PathBuf::from("app/plugin.json")]);
    }
}
