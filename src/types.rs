use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

// Position (x, y) and yaw per timestep, stored as `traj_data.pkl`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrajData {
    pub position: Vec<(f64, f64)>,
    pub yaw: Vec<f64>,
}

impl TrajData {
    /// Number of timesteps, taken from the position samples
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
}

// Struct to hold the trajectory names assigned to each split
#[derive(Debug, Default, Clone)]
pub struct SplitData {
    pub train: Vec<String>,
    pub test: Vec<String>,
}

// An entry that could not be removed while clearing a split directory
#[derive(Debug)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

// Outcome of a split run
#[derive(Debug, Default)]
pub struct SplitReport {
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    pub split: SplitData,
    pub cleanup_failures: Vec<CleanupFailure>,
}

// Struct to hold processing statistics for an archive conversion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_entries: usize,
    pub converted: usize,
    pub skipped_unreadable: usize,
    pub frames_written: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_converted(&mut self, frames: usize) {
        self.converted += 1;
        self.frames_written += frames;
    }

    pub fn increment_skipped_unreadable(&mut self) {
        self.skipped_unreadable += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Archive entries selected: {}", self.total_entries);
        log::info!("Trajectories converted: {}", self.converted);
        log::info!("Frames written: {}", self.frames_written);
        if self.skipped_unreadable > 0 {
            log::warn!(
                "Skipped (unreadable archive): {}",
                self.skipped_unreadable
            );
        }
    }
}
