//bharat/src/main.rs
use std::io::{self, Write};
use std::{env, fs};

use bharat::kernel::explorer::ExplorerRow;
use bharat::kernel::services::adapters::{ensure_settings_file, load_settings};
use bharat::kernel::services::ports::Settings;
use bharat::kernel::snapshot::decode_tree;
use bharat::kernel::{Store, WorkspaceState};
use bharat::models::NodeKind;

mod logging;

fn main() -> io::Result<()> {
    let logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let state = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let tree = decode_tree(&text).map_err(|e| {
                tracing::error!(path = %path, error = %e, "failed to restore workspace");
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
            tracing::info!(path = %path, nodes = tree.len(), "workspace restored");
            WorkspaceState::from_tree(tree, &settings)
        }
        None => WorkspaceState::new(&settings),
    };
    let store = Store::new(state);

    let mut out = io::stdout().lock();
    print_workspace(&mut out, &store, &settings)?;
    if let Some(logging) = logging.as_ref() {
        writeln!(out, "logs: {}", logging.log_dir().display())?;
    }
    Ok(())
}

fn print_workspace(out: &mut impl Write, store: &Store, settings: &Settings) -> io::Result<()> {
    let state = store.state();
    writeln!(out, "EXPLORER")?;
    for row in state.explorer_rows() {
        match row {
            ExplorerRow::Node {
                depth,
                name,
                kind,
                is_expanded,
                is_selected,
                ..
            } => {
                let marker = match (kind, is_expanded) {
                    (NodeKind::Folder, true) => "v ",
                    (NodeKind::Folder, false) => "> ",
                    (NodeKind::File, _) => "  ",
                };
                let selected = if is_selected { " *" } else { "" };
                writeln!(out, "{}{marker}{name}{selected}", "  ".repeat(depth as usize))?;
            }
            ExplorerRow::PendingInput { depth, input, .. } => {
                writeln!(out, "{}  [{input}]", "  ".repeat(depth as usize))?;
            }
        }
    }

    let open = state.open_files();
    let tabs: Vec<&str> = open.iter().map(|node| node.name()).collect();
    writeln!(out, "TABS: {}", tabs.join(" | "))?;
    match state.selected_file() {
        Some(file) => writeln!(
            out,
            "SELECTED: {} ({})",
            file.name,
            file.language.display_name()
        )?,
        None => writeln!(
            out,
            "SELECTED: none (default language {})",
            settings.default_language.display_name()
        )?,
    }
    Ok(())
}
