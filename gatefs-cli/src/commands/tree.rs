use gatefs::tree::DirectoryTree;

use crate::commands::RegistrySource;
use crate::error::{GateFsCliError, Result};
use crate::utils;

pub fn execute(source: &RegistrySource, depth: usize, path: Option<String>) -> Result<()> {
    let registry = source.load()?;
    let base = registry.base().display().to_string();
    utils::print_header(&format!("File Tree for {base}"));

    let tree = DirectoryTree::from_names(&base, registry.files());
    let node = match path.as_deref() {
        Some(path) => tree
            .find(path)
            .ok_or_else(|| GateFsCliError::Input(format!("Path {path} not found")))?,
        None => tree.root(),
    };

    print!("{}", node.render(depth));
    Ok(())
}
