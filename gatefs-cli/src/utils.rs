use console::style;
use indicatif::HumanBytes;

use crate::commands::RegistrySource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
    Warning,
}

impl Tone {
    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "✅",
            Tone::Error => "❌",
            Tone::Info => "ℹ️",
            Tone::Warning => "⚠️",
        }
    }
}

pub fn print_status(tone: Tone, message: &str) {
    let line = format!("{} {}", tone.icon(), message);
    let styled = match tone {
        Tone::Success => style(line).green(),
        Tone::Error => style(line).red(),
        Tone::Info => style(line).blue(),
        Tone::Warning => style(line).yellow(),
    };
    println!("{styled}");
}

pub fn print_success(message: &str) {
    print_status(Tone::Success, message);
}

pub fn print_error(message: &str) {
    print_status(Tone::Error, message);
}

pub fn print_info(message: &str) {
    print_status(Tone::Info, message);
}

pub fn print_warning(message: &str) {
    print_status(Tone::Warning, message);
}

/// Human readable size, e.g. `1.50 KiB`.
pub fn format_size(bytes: u64) -> String {
    HumanBytes(bytes).to_string()
}

pub fn print_header(title: &str) {
    let rule = style("─".repeat(60)).dim();
    println!("\n{rule}\n{}\n{rule}", style(title).bold().cyan());
}

/// One line describing where the whitelist comes from.
pub fn describe_source(source: &RegistrySource) -> String {
    match source {
        RegistrySource::Dir(dir) => format!("every file below {}", dir.display()),
        RegistrySource::Manifest(path) => format!("manifest {}", path.display()),
    }
}

/// Banner for interactive mode, summarizing the registry that will be
/// browsed.
pub fn print_welcome(source: &RegistrySource) {
    println!("{}", style("🔒 gatefs, whitelisted file explorer").bold().cyan());
    println!("{}", style(format!("Source: {}", describe_source(source))).dim());

    match source.load() {
        Ok(registry) => print_info(&format!(
            "{} file(s) exposed under {}",
            registry.files().len(),
            registry.base().display()
        )),
        Err(e) => print_warning(&format!("No registry loaded yet: {e}")),
    }
}
