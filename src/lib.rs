//! Recon trajectory dataset preparation
//!
//! This library converts the raw recon sensor-log archive into one folder per
//! trajectory and splits those folders into train/test manifests for training.

pub mod archive;
pub mod config;
pub mod conversion;
pub mod dataset;
pub mod io;
pub mod layout;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use archive::{ArchiveOpener, TrajectoryArchive};
pub use config::{ConvertArgs, SplitArgs};
pub use conversion::process_archive;
pub use dataset::{split_dataset, split_dataset_with_rng};
pub use types::{CleanupFailure, ProcessingStats, SplitData, SplitReport, TrajData};

#[cfg(feature = "hdf5")]
pub use archive::Hdf5Opener;
