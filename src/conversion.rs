use anyhow::{Context, Result};
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveOpener, TrajectoryArchive};
use crate::config::ConvertArgs;
use crate::io::{save_frames, save_traj_data};
use crate::layout::{TrajectoryDir, RECON_SUBDIR};
use crate::types::{ProcessingStats, TrajData};
use crate::utils::{create_progress_bar, list_entries};

/// Entries of the archive folder in listing order, keeping the first `limit` when given
pub fn list_archive_entries(
    recon_dir: &Path,
    limit: Option<usize>,
) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = list_entries(recon_dir)?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    Ok(entries)
}

/// Trajectory name for an archive entry: everything before the first `.`
pub fn traj_name_from_entry(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Read position and yaw from an opened archive
pub fn read_traj_data<A: TrajectoryArchive>(archive: &A) -> Result<TrajData> {
    let position = archive.position()?;
    let yaw = archive.yaw()?;
    if position.len() != yaw.len() {
        warn!(
            "Position has {} samples but yaw has {}",
            position.len(),
            yaw.len()
        );
    }
    Ok(TrajData { position, yaw })
}

/// Write the data file and all frames of one opened archive into `traj_dir`
pub fn convert_trajectory<A: TrajectoryArchive>(
    archive: &A,
    traj_dir: &TrajectoryDir,
) -> Result<usize> {
    let traj_data = read_traj_data(archive)?;

    fs::create_dir_all(traj_dir.path())
        .with_context(|| format!("Failed to create {}", traj_dir.path().display()))?;
    save_traj_data(traj_dir, &traj_data)?;

    let frames = archive.frames()?;
    save_frames(traj_dir, &frames)
}

/// Convert every selected archive entry into a trajectory folder under `args.output_dir`.
///
/// Entries that cannot be opened are logged and skipped; any later failure aborts the run.
pub fn process_archive<O: ArchiveOpener>(
    args: &ConvertArgs,
    opener: &O,
) -> Result<ProcessingStats> {
    let recon_dir = args.input_dir.join(RECON_SUBDIR);
    let output_dir = &args.output_dir;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;

    let entries = list_archive_entries(&recon_dir, args.limit())
        .with_context(|| format!("Failed to read archive dir {}", recon_dir.display()))?;
    info!(
        "Processing {} archive entries from {}",
        entries.len(),
        recon_dir.display()
    );

    let mut stats = ProcessingStats::new();
    stats.total_entries = entries.len();

    let pb = create_progress_bar(entries.len() as u64, "Trajectories processed");
    for entry in &entries {
        let file_name = entry
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let traj_name = traj_name_from_entry(&file_name);

        let archive = match opener.open(entry) {
            Ok(archive) => archive,
            Err(e) => {
                error!("Error loading {}. Skipping... ({:#})", file_name, e);
                stats.increment_skipped_unreadable();
                pb.inc(1);
                continue;
            }
        };

        let traj_dir = TrajectoryDir::in_root(output_dir, traj_name);
        let frames = convert_trajectory(&archive, &traj_dir)
            .with_context(|| format!("Failed to convert {}", file_name))?;
        stats.increment_converted(frames);
        pb.inc(1);
    }
    pb.finish_with_message("Trajectory processing complete");

    stats.print_summary();
    Ok(stats)
}
