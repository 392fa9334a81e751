use clap::Parser;
use tracing::Level;

use task_tracker::cli::Cli;
use task_tracker::cmd::perform_action;
use task_tracker::TaskStore;

fn set_up_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    set_up_logging(cli.verbose);
    tracing::debug!("Started");

    let store = TaskStore::new(&cli.db);
    let result = perform_action(&store, cli.action());
    tracing::debug!("Finished");

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
