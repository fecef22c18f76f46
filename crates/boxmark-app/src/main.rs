//! Replay a recorded gesture session and print the resulting shapes.

use std::path::PathBuf;
use std::process::ExitCode;

use boxmark_app::{AppError, load_config, load_session, replay};
use boxmark_core::Editor;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "boxmark", about = "Replay BoxMark gesture sessions")]
struct Cli {
    /// Editor configuration (JSON). Defaults apply when omitted.
    #[arg(long, env = "BOXMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Stop at the first rejected event instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Recorded session (JSON).
    session: PathBuf,
}

fn run(cli: &Cli) -> Result<String, AppError> {
    let config = load_config(cli.config.as_deref())?;
    let session = load_session(&cli.session)?;

    let mut editor = Editor::new(config);
    let summary = replay(&mut editor, &session, cli.strict)?;
    log::info!(
        "Replayed {} steps: {} mutations, {} rejected, {} shapes",
        summary.steps,
        summary.mutations,
        summary.rejected,
        editor.store().len()
    );

    Ok(editor.store().to_json()?)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Replaying {}", cli.session.display());

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
