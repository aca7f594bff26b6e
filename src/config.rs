use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line arguments for splitting trajectory folders into train/test sets.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct SplitArgs {
    /// Directory containing the trajectory folders
    #[arg(short = 'i', long = "data-dir")]
    pub data_dir: PathBuf,

    /// Name of the dataset, used as the output subfolder
    #[arg(short = 'd', long = "dataset-name")]
    pub dataset_name: String,

    /// Proportion of the trajectories assigned to the train split
    #[arg(short = 's', long = "split", default_value_t = 0.8, value_parser = validate_size)]
    pub split: f64,

    /// Root directory for the data splits
    #[arg(
        short = 'o',
        long = "data-splits-dir",
        default_value = "vint_train/data/data_splits"
    )]
    pub data_splits_dir: PathBuf,

    /// Seed for random shuffling (system entropy when omitted)
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

/// Command-line arguments for converting the recon archive into trajectory folders.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ConvertArgs {
    /// Path of the recon dataset (the directory holding `recon_release`)
    #[arg(short = 'i', long = "input-dir")]
    pub input_dir: PathBuf,

    /// Path for the processed recon dataset
    #[arg(short = 'o', long = "output-dir", default_value = "datasets/recon/")]
    pub output_dir: PathBuf,

    /// Number of trajectories to process (negative processes all of them)
    #[arg(
        short = 'n',
        long = "num-trajs",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub num_trajs: i64,
}

impl ConvertArgs {
    /// The trajectory cap, or `None` when every entry should be processed
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.num_trajs).ok()
    }
}

// Validate that the size is between 0.0 and 1.0
pub fn validate_size(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("SPLIT must be between 0.0 and 1.0".to_string()),
    }
}
