use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use chrono::Utc;

use planview_core::plan_source::load_tokens;
use planview_core::prefs::load_prefs_file;
use planview_term::render::{FrameSize, RenderFrame};
use planview_tui::view_model::ViewModel;
use planview_tui::{default_theme, detected_theme, interactive_runtime};

/// Frame size used when stdout is not a terminal.
const SNAPSHOT_SIZE: FrameSize = FrameSize {
    width: 100,
    height: 32,
};

fn main() {
    let Some(plan_path) = resolve_plan_path() else {
        eprintln!("usage: planview <tokens.json>  (or set PLANVIEW_PLAN)");
        std::process::exit(2);
    };
    let prefs_path = resolve_prefs_path();

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if interactive {
        if let Err(err) = interactive_runtime::run(&plan_path, &prefs_path, detected_theme()) {
            eprintln!("planview: {err}");
            std::process::exit(1);
        }
    } else {
        match render_snapshot_text(&plan_path, &prefs_path) {
            Ok(text) => print!("{text}"),
            Err(err) => {
                eprintln!("planview: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn resolve_plan_path() -> Option<PathBuf> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Some(PathBuf::from(arg));
    }
    std::env::var_os("PLANVIEW_PLAN").map(PathBuf::from)
}

fn resolve_prefs_path() -> PathBuf {
    if let Some(path) = std::env::var_os("PLANVIEW_PREFS") {
        return PathBuf::from(path);
    }
    if let Some(home) = std::env::var_os("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        path.push("planview");
        path.push("prefs.json");
        return path;
    }
    PathBuf::from("prefs.json")
}

/// One plain-text frame for piped output. Preferences are read but
/// never written here; only the interactive session persists.
fn render_snapshot_text(plan_path: &Path, prefs_path: &Path) -> Result<String, String> {
    let tokens = load_tokens(plan_path)?;
    let outcome = load_prefs_file(prefs_path, Utc::now());

    let mut vm = ViewModel::new(tokens, plan_label(plan_path), outcome.store);
    if !outcome.warnings.is_empty() {
        vm.set_notice(outcome.warnings.join("; "));
    }

    let mut frame = RenderFrame::new(SNAPSHOT_SIZE, default_theme());
    vm.render(&mut frame);
    let mut text = frame.snapshot();
    text.push('\n');
    Ok(text)
}

fn plan_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
