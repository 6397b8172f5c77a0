use std::fs;
use std::path::{Path, PathBuf};

use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::builder::{build_hierarchy, set_descriptions};
use crate::domain::error::DocError;
use crate::domain::hierarchy::HierarchyNode;
use crate::exports::{read_export_names, resolve_exports, Export};
use crate::listing::{format_for, Listing};
use crate::render::html::{render_page, write_page, HtmlTheme};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config_dir.as_deref())?;
    match &cli.command {
        Some(Commands::Generate {
            listing,
            exports,
            output,
            title,
        }) => generate(listing, exports, output.as_deref(), title.as_deref(), &settings),
        Some(Commands::Tree { listing, exports }) => tree(listing, exports, &settings),
        Some(Commands::Labels { listing, exports }) => labels(listing, exports, &settings),
        Some(Commands::Config { command }) => config_cmd(command, &settings),
        // Completion is handled in main before logging is set up
        Some(Commands::Completion { .. }) | None => Ok(()),
    }
}

/// Load listing and exports, build the described hierarchy.
fn load_hierarchy(
    listing_path: &Path,
    exports_path: &Path,
    settings: &Settings,
) -> CliResult<(HierarchyNode, Vec<Export>)> {
    let listing = Listing::load(listing_path)?;
    let format = format_for(listing_path, settings);
    let names = read_export_names(exports_path)?;
    debug!("{} exported labels", names.len());

    let exports = resolve_exports(&names, &listing, format.as_ref());
    let mut root = build_hierarchy(exports.iter().map(|e| (e.path.as_str(), e.line)));
    set_descriptions(&mut root, &listing.lines, format.as_ref());
    Ok((root, exports))
}

#[instrument(skip(settings))]
fn generate(
    listing_path: &Path,
    exports_path: &Path,
    output_path: Option<&Path>,
    title: Option<&str>,
    settings: &Settings,
) -> CliResult<()> {
    let (root, exports) = load_hierarchy(listing_path, exports_path, settings)?;

    let theme = HtmlTheme {
        title: title.unwrap_or(&settings.title).to_string(),
    };
    let html = render_page(&root, &exports, &theme);

    let out: PathBuf = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.output.clone());
    write_page(&out, &html)?;
    output::success(&format!(
        "{} labels documented in {}",
        exports.len(),
        out.display()
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn tree(listing_path: &Path, exports_path: &Path, settings: &Settings) -> CliResult<()> {
    let (root, _) = load_hierarchy(listing_path, exports_path, settings)?;
    for (segment, child) in root.children() {
        println!("{}", to_termtree(segment, child));
    }
    Ok(())
}

/// Nodes carrying a comment block are marked with `*`.
fn to_termtree(segment: &str, node: &HierarchyNode) -> Tree<String> {
    let label = if node.description.as_deref().is_some_and(|d| !d.is_empty()) {
        format!("{} *", segment)
    } else {
        segment.to_string()
    };
    Tree::new(label).with_leaves(node.children().map(|(s, n)| to_termtree(s, n)))
}

#[instrument(skip(settings))]
fn labels(listing_path: &Path, exports_path: &Path, settings: &Settings) -> CliResult<()> {
    let (_, exports) = load_hierarchy(listing_path, exports_path, settings)?;
    for export in &exports {
        let line = export
            .line
            .map(|l| (l + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<40} {:<10} {:>6}", export.path, export.kind, line);
    }
    Ok(())
}

fn config_cmd(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(settings)
                .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
            output::header("# merged configuration");
            print!("{}", rendered);
            Ok(())
        }
        ConfigCommands::Init => {
            let path = Path::new("asmdoc.toml");
            if path.exists() {
                return Err(CliError::InvalidArgs(
                    "asmdoc.toml already exists".to_string(),
                ));
            }
            fs::write(path, Settings::template()).map_err(|e| DocError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            output::action("created", &path.display());
            Ok(())
        }
        ConfigCommands::Path => {
            if let Some(global) = Settings::global_config_path() {
                output::detail(&format!("global: {}", global.display()));
            }
            output::detail("local: ./asmdoc.toml");
            Ok(())
        }
    }
}
