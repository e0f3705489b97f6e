use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::PathRegistry;

/// On-disk description of a whitelist.
///
/// ```json
/// {
///   "base": "/var/lib/plugins",
///   "files": ["app/plugin.json", "/var/lib/plugins/app/module.js"]
/// }
/// ```
///
/// Relative entries in `files` are resolved against `base`, absolute ones
/// are registered as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub base: PathBuf,
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Manifest {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self {
            base: base.into(),
            files: Vec::new(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(json.parse()?)
    }

    /// Write the manifest as pretty printed JSON, creating parent
    /// directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The entries of `files` as the absolute paths they register.
    pub fn registered_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|file| {
            if file.is_absolute() {
                file.clone()
            } else {
                self.base.join(file)
            }
        })
    }

    pub fn into_registry(self) -> PathRegistry {
        let paths: Vec<PathBuf> = self.registered_paths().collect();
        PathRegistry::new(paths, self.base)
    }
}

impl FromStr for Manifest {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse() {
        let manifest: Manifest = r#"{
            "base": "/data/plugins",
            "files": ["app/plugin.json", "/data/plugins/app/module.js", "/etc/passwd"]
        }"#
        .parse()
        .unwrap();

        let paths: Vec<_> = manifest.registered_paths().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/data/plugins/app/plugin.json"),
                PathBuf::from("/data/plugins/app/module.js"),
                PathBuf::from("/etc/passwd"),
            ]
        );

        let registry = manifest.into_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.sorted_files(), vec!["app/module.js", "app/plugin.json"]);
    }

    #[test]
    fn test_files_default_to_empty() {
        let manifest: Manifest = r#"{"base": "/data"}"#.parse().unwrap();
        assert_eq!(manifest, Manifest::new("/data"));
    }

    #[test]
    fn test_malformed_manifest() {
        assert!(r#"{"files": []}"#.parse::<Manifest>().is_err());

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Manifest::load(&path),
            Err(crate::GateFsError::Manifest(_))
        ));
        assert!(matches!(
            Manifest::load(dir.path().join("missing.json")),
            Err(crate::GateFsError::Io(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/manifest.json");

        let registry = PathRegistry::new(["/p/b.txt", "/p/a.txt"], "/p");
        registry.manifest().save(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(loaded.into_registry().contains("b.txt"));
    }
}
