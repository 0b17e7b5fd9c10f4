//! gapedit - a small gap-buffer terminal text editor
//! Main entry point

use anyhow::{anyhow, Context};
use gapedit::editor::Editor;
use gapedit::logging;
use gapedit::settings::Settings;
use gapedit::term::crossterm::CrosstermBackend;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [file_name] = args.as_slice() else {
        eprintln!("Usage\ngapedit <filename>");
        std::process::exit(1);
    };

    if let Err(e) = run(PathBuf::from(file_name)) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(path: PathBuf) -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let _log_guard = logging::init(&settings)
        .map_err(|e| anyhow!(e))
        .context("failed to initialize logging")?;

    let mut editor = Editor::open(CrosstermBackend::new(), settings, &path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    editor.run().context("editor error")?;
    Ok(())
}
