mod app;
mod cli;
mod config;
mod logging;
mod output;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let (config, config_path) = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init_logging(cli.debug);
    if let Some(path) = config_path {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
