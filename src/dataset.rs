use anyhow::{Context, Result};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

use crate::config::SplitArgs;
use crate::io::write_traj_names;
use crate::layout::{split_dirs, TrajectoryDir};
use crate::types::{CleanupFailure, SplitData, SplitReport};
use crate::utils::{clear_dir, list_entries};

/// Names of the immediate subdirectories of `data_dir` holding the trajectory data marker.
///
/// Folders whose names are not valid UTF-8 cannot be written to a manifest and are skipped
/// with a warning.
pub fn find_trajectory_folders(data_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for path in list_entries(data_dir)? {
        if !path.is_dir() || !TrajectoryDir::new(&path).is_complete() {
            continue;
        }
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => names.push(name.to_string()),
            None => warn!(
                "Skipping {}: folder name is not valid UTF-8",
                path.display()
            ),
        }
    }
    Ok(names)
}

/// Shuffle the names and split them into train and test sets.
///
/// The first `floor(split * len)` shuffled names go to train, the rest to test.
pub fn split_names<R: Rng + ?Sized>(
    mut names: Vec<String>,
    split: f64,
    rng: &mut R,
) -> SplitData {
    names.shuffle(rng);

    let split_index = ((split * names.len() as f64).floor() as usize).min(names.len());
    let test = names.split_off(split_index);

    SplitData { train: names, test }
}

/// Make `dir` an existing, empty directory.
///
/// Existing contents are removed best-effort; entries that could not be
/// removed are returned.
pub fn prepare_split_dir(dir: &Path) -> std::io::Result<Vec<CleanupFailure>> {
    if dir.exists() {
        info!("Clearing files from {} for new data split", dir.display());
        Ok(clear_dir(dir))
    } else {
        info!("Creating {}", dir.display());
        fs::create_dir_all(dir)?;
        Ok(Vec::new())
    }
}

/// Random source for shuffling: seeded when asked, otherwise from system entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Split the trajectory folders of `args.data_dir` and write the two manifests
pub fn split_dataset(args: &SplitArgs) -> Result<SplitReport> {
    let mut rng = make_rng(args.seed);
    split_dataset_with_rng(args, &mut rng)
}

/// Same as [`split_dataset`], shuffling with the supplied random source
pub fn split_dataset_with_rng<R: Rng + ?Sized>(
    args: &SplitArgs,
    rng: &mut R,
) -> Result<SplitReport> {
    let folder_names = find_trajectory_folders(&args.data_dir)
        .with_context(|| format!("Failed to read data dir {}", args.data_dir.display()))?;
    info!(
        "Found {} trajectories in {}",
        folder_names.len(),
        args.data_dir.display()
    );

    let split = split_names(folder_names, args.split, rng);

    let (train_dir, test_dir) = split_dirs(&args.data_splits_dir, &args.dataset_name);
    let mut cleanup_failures = Vec::new();
    for dir in [&train_dir, &test_dir] {
        let failures = prepare_split_dir(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        cleanup_failures.extend(failures);
    }

    write_traj_names(&train_dir, &split.train)
        .with_context(|| format!("Failed to write train split to {}", train_dir.display()))?;
    write_traj_names(&test_dir, &split.test)
        .with_context(|| format!("Failed to write test split to {}", test_dir.display()))?;
    info!(
        "Wrote {} train and {} test trajectories",
        split.train.len(),
        split.test.len()
    );

    Ok(SplitReport {
        train_dir,
        test_dir,
        split,
        cleanup_failures,
    })
}
