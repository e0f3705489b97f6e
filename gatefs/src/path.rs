//! Path handling shared by lookups and listings.
//!
//! Lookups are strict: a name that cannot be normalized without leaving the
//! base is an error. Listings are lenient: a registered path that does not
//! sit under the base is simply left out.

use std::path::{Component, Path, PathBuf};

use crate::error::{GateFsError, Result};

/// Normalize a caller supplied name into a path relative to the base.
///
/// A leading `/` is ignored and `.` components are dropped. A `..` removes
/// the previous component and fails once there is nothing left to remove,
/// so `app/../plugin.json` is accepted while `../etc/passwd` is not. The
/// empty name and `.` normalize to the empty path, i.e. the base itself.
pub fn clean_relative_path(name: &str) -> Result<PathBuf> {
    if name.contains('\0') {
        return Err(GateFsError::invalid_path(name, "contains a NUL byte"));
    }

    let mut cleaned = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    return Err(GateFsError::invalid_path(
                        name,
                        "escapes the base directory",
                    ));
                }
            }
            Component::Normal(part) => cleaned.push(part),
            Component::Prefix(_) => {
                return Err(GateFsError::invalid_path(
                    name,
                    "drive and UNC prefixes are not allowed",
                ));
            }
        }
    }

    Ok(cleaned)
}

/// Compute the listing name of a registered path, if it has one.
///
/// Returns `None` when `path` is not under `base`, when the remainder would
/// need a traversal marker, when it is the base itself, or when it is not
/// valid UTF-8. Every name returned here survives [`clean_relative_path`].
pub fn relative_to_base(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    relative.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_plain_paths() {
        assert_eq!(
            clean_relative_path("app/plugin.json").unwrap(),
            PathBuf::from("app/plugin.json")
        );
        assert_eq!(
            clean_relative_path("/app/./plugin.json").unwrap(),
            PathBuf::from("app/plugin.json")
        );
        assert_eq!(
            clean_relative_path("app//img/../plugin.json").unwrap(),
            PathBuf::from("app/plugin.json")
        );
    }

    #[test]
    fn test_clean_base_itself() {
        assert_eq!(clean_relative_path("").unwrap(), PathBuf::new());
        assert_eq!(clean_relative_path(".").unwrap(), PathBuf::new());
        assert_eq!(clean_relative_path("app/..").unwrap(), PathBuf::new());
    }

    #[test]
    fn test_clean_rejects_traversal() {
        for name in ["..", "../../etc/passwd", "app/../../secret", "/../x", "a/b/../../../c"] {
            let err = clean_relative_path(name).unwrap_err();
            assert!(err.is_path_validation(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_clean_rejects_nul() {
        let err = clean_relative_path("app/plu\0gin.json").unwrap_err();
        assert!(err.is_path_validation());
    }

    #[test]
    fn test_relative_to_base() {
        let base = Path::new("/data/plugins");
        assert_eq!(
            relative_to_base(Path::new("/data/plugins/app/plugin.json"), base).as_deref(),
            Some("app/plugin.json")
        );
        assert_eq!(relative_to_base(Path::new("/data/other/x.json"), base), None);
        assert_eq!(relative_to_base(Path::new("/data/plugins"), base), None);
        assert_eq!(
            relative_to_base(Path::new("/data/plugins/../secrets.txt"), base),
            None
        );
    }

    #[test]
    fn test_relative_names_round_trip() {
        let base = Path::new("/data/plugins");
        let registered = Path::new("/data/plugins/app/./img/logo.svg");
        let name = relative_to_base(registered, base).unwrap();
        let cleaned = clean_relative_path(&name).unwrap();
        assert_eq!(base.join(cleaned), registered);
    }
}
