use std::path::PathBuf;

use console::style;
use inquire::{Select, Text};

use crate::commands::{self, RegistrySource};
use crate::error::Result;
use crate::utils;

const MENU_OPTIONS: &[&str] = &[
    "📋 List exposed files",
    "🌳 Browse file tree",
    "📄 Show file content",
    "🔎 Show file metadata",
    "📊 Show registry statistics",
    "🗂️ Scan a directory",
    "❌ Exit",
];

pub async fn run(source: &RegistrySource) -> Result<()> {
    utils::print_welcome(source);

    let mut source = source.clone();
    loop {
        println!();
        let choice = Select::new("What would you like to do?", MENU_OPTIONS.to_vec()).prompt()?;

        match choice {
            "📋 List exposed files" => {
                if let Err(e) = commands::files::execute(&source, false) {
                    utils::print_error(&format!("Failed to list files: {}", e));
                }
            }
            "🌳 Browse file tree" => {
                if let Err(e) = handle_browse_tree(&source) {
                    utils::print_error(&format!("Failed to browse files: {}", e));
                }
            }
            "📄 Show file content" => {
                if let Err(e) = handle_show_file(&source) {
                    utils::print_error(&format!("Failed to show file: {}", e));
                }
            }
            "🔎 Show file metadata" => {
                if let Err(e) = handle_stat_file(&source) {
                    utils::print_error(&format!("Failed to stat file: {}", e));
                }
            }
            "📊 Show registry statistics" => {
                if let Err(e) = commands::stats::execute(&source) {
                    utils::print_error(&format!("Failed to collect statistics: {}", e));
                }
            }
            "🗂️ Scan a directory" => match handle_scan().await {
                Ok(manifest) => source = RegistrySource::Manifest(manifest),
                Err(e) => utils::print_error(&format!("Failed to scan directory: {}", e)),
            },
            "❌ Exit" => {
                utils::print_success("Goodbye! 👋");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn select_file(source: &RegistrySource) -> Result<Option<String>> {
    let files = source.load()?.sorted_files();
    if files.is_empty() {
        utils::print_info("No files are exposed by this registry.");
        return Ok(None);
    }

    let name = Select::new("Which file?", files).prompt()?;
    Ok(Some(name))
}

fn handle_browse_tree(source: &RegistrySource) -> Result<()> {
    println!("\n{}", style("🌳 Browse File Tree").bold().green());

    let depth = Text::new("Maximum depth:")
        .with_default("3")
        .with_help_message("How deep to show the tree")
        .prompt()?;

    let depth: usize = depth.parse().unwrap_or(3);

    commands::tree::execute(source, depth, None)
}

fn handle_show_file(source: &RegistrySource) -> Result<()> {
    if let Some(name) = select_file(source)? {
        utils::print_header(&name);
        commands::cat::execute(source, &name)?;
        println!();
    }
    Ok(())
}

fn handle_stat_file(source: &RegistrySource) -> Result<()> {
    if let Some(name) = select_file(source)? {
        commands::stat::execute(source, &name)?;
    }
    Ok(())
}

async fn handle_scan() -> Result<PathBuf> {
    println!("\n{}", style("🗂️ Scan Directory").bold().cyan());

    let dir = Text::new("Directory to expose:")
        .with_help_message("Every regular file below it will be registered")
        .prompt()?;

    commands::scan::execute(PathBuf::from(dir).as_path(), None).await
}
