use std::io::{self, Write};

use crate::commands::RegistrySource;
use crate::error::Result;

pub fn execute(source: &RegistrySource, name: &str) -> Result<()> {
    let registry = source.load()?;
    let mut file = registry.open(name)?;

    let mut stdout = io::stdout().lock();
    io::copy(&mut file, &mut stdout)?;
    stdout.flush()?;

    file.close()?;
    Ok(())
}
