use std::env;
use std::path::PathBuf;

const DEFAULT_GATEFS_DIR: &str = "~/.gatefs";
const MANIFEST_FILE_NAME: &str = "manifest.json";

pub fn get_gatefs_dir() -> PathBuf {
    let gatefs_dir = env::var("GATEFS_DIR").unwrap_or(DEFAULT_GATEFS_DIR.to_string());
    expand_home(&gatefs_dir)
}

/// Manifest used when neither `--dir` nor `--manifest` is given.
pub fn get_manifest_path() -> PathBuf {
    match env::var("GATEFS_MANIFEST") {
        Ok(manifest) => expand_home(&manifest),
        Err(_) => get_gatefs_dir().join(MANIFEST_FILE_NAME),
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        if path == "~" {
            return home_dir;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home_dir.join(rest);
        }
    }

    path.into()
}
