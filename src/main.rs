mod batch;
mod config;

use batch::Batch;
use config::Config;

fn main() {
    // Initialize logging at a fixed level; RUST_LOG is not consulted
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let report = Batch::new(Config::default().targets()).run();

    log::info!(
        "Done: {} saved, {} missing, {} failed",
        report.saved(),
        report.missing(),
        report.failed()
    );
}
