use anyhow::Result;
use clap::Parser;
use log::info;

use trajprep::{process_archive, ConvertArgs, Hdf5Opener};

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ConvertArgs::parse();

    info!("STARTING PROCESSING RECON DATASET");
    process_archive(&args, &Hdf5Opener)?;
    info!("FINISHED PROCESSING RECON DATASET");

    Ok(())
}
