use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

/// Collect every regular file below `dir`, recursively.
///
/// Symlinks are not followed, neither to files nor to directories.
pub fn collect_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    collect_files_recursive(dir.as_ref(), &mut result)?;
    Ok(result)
}

fn collect_files_recursive(path: &Path, result: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(path)?;
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            collect_files_recursive(&entry.path(), result)?;
        } else if file_type.is_file() {
            result.push(entry.path());
        }
    }

    Ok(())
}
