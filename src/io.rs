use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::layout::{TrajectoryDir, TRAJ_NAMES_FILE};
use crate::types::TrajData;

/// Write one trajectory name per line into `dir/traj_names.txt`, replacing any existing file
pub fn write_traj_names(dir: &Path, names: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(dir.join(TRAJ_NAMES_FILE))?);
    for name in names {
        writer.write_all(name.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Read a manifest written by [`write_traj_names`]
pub fn read_traj_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(dir.join(TRAJ_NAMES_FILE))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Pickle the trajectory record into the folder's data file
pub fn save_traj_data(traj_dir: &TrajectoryDir, traj_data: &TrajData) -> Result<()> {
    let path = traj_dir.data_path();
    let mut writer = BufWriter::new(
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    serde_pickle::to_writer(&mut writer, traj_data, serde_pickle::SerOptions::new())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub fn load_traj_data(traj_dir: &TrajectoryDir) -> Result<TrajData> {
    let path = traj_dir.data_path();
    let reader = BufReader::new(
        File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?,
    );
    serde_pickle::from_reader(reader, serde_pickle::DeOptions::new())
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Decode each encoded frame and save it as `<index>.jpg`, in index order
pub fn save_frames<I, B>(traj_dir: &TrajectoryDir, frames: I) -> Result<usize>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut count = 0;
    for (index, buffer) in frames.into_iter().enumerate() {
        let path = traj_dir.frame_path(index);
        let image = image::load_from_memory(buffer.as_ref())
            .with_context(|| format!("Failed to decode frame {} for {}", index, path.display()))?;
        // JPEG has no alpha channel
        image
            .to_rgb8()
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        count += 1;
    }
    Ok(count)
}
