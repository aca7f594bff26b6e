//! On-disk layout shared by the converter (which writes trajectory folders)
//! and the splitter (which reads them).

use std::path::{Path, PathBuf};

/// Marker file identifying a completed trajectory folder
pub const TRAJ_DATA_FILE: &str = "traj_data.pkl";

/// Manifest file written into each split directory
pub const TRAJ_NAMES_FILE: &str = "traj_names.txt";

/// Extension of the frames written into a trajectory folder
pub const IMAGE_EXTENSION: &str = "jpg";

/// Subfolder of the raw archive root holding one file per trajectory
pub const RECON_SUBDIR: &str = "recon_release";

pub const TRAIN_DIR: &str = "train";
pub const TEST_DIR: &str = "test";

/// A folder holding one trajectory: its data file plus `0.jpg`, `1.jpg`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrajectoryDir {
    path: PathBuf,
}

impl TrajectoryDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The folder for `traj_name` under `root`
    pub fn in_root(root: &Path, traj_name: &str) -> Self {
        Self::new(root.join(traj_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_path(&self) -> PathBuf {
        self.path.join(TRAJ_DATA_FILE)
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.path.join(format!("{}.{}", index, IMAGE_EXTENSION))
    }

    /// Whether the folder carries the trajectory data marker
    pub fn is_complete(&self) -> bool {
        self.data_path().is_file()
    }
}

/// Train and test directories for `dataset_name` under the splits root
pub fn split_dirs(splits_root: &Path, dataset_name: &str) -> (PathBuf, PathBuf) {
    let dataset_dir = splits_root.join(dataset_name);
    (dataset_dir.join(TRAIN_DIR), dataset_dir.join(TEST_DIR))
}
