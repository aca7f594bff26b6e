use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use trajprep::{split_dataset, SplitArgs};

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SplitArgs::parse();

    info!("Splitting {} into train/test sets...", args.data_dir.display());

    let report = split_dataset(&args)?;
    if !report.cleanup_failures.is_empty() {
        warn!(
            "{} entries could not be removed from the split directories",
            report.cleanup_failures.len()
        );
    }

    info!("Done");
    Ok(())
}
