use std::io;
use std::process::ExitCode;

use semantic_median_cli::config::Config;
use semantic_median_cli::{app, logging, model};

fn main() -> ExitCode {
    let config = Config::load();
    let _guard = logging::init_tracing(&config.log_level);

    let table = match model::load_text(&config.model) {
        Ok(table) => table,
        Err(err) => {
            tracing::error!(error = %err, path = %config.model.display(), "failed to load model");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match app::run(&config, &table, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "semantic median failed");
            ExitCode::FAILURE
        }
    }
}
