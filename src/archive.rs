//! Access to the raw per-trajectory sensor logs.
//!
//! The converter only talks to [`ArchiveOpener`] and [`TrajectoryArchive`].
//! The HDF5 backend used for the recon release lives behind the `hdf5` feature.

use anyhow::Result;
use std::path::Path;

/// One opened raw trajectory log
pub trait TrajectoryArchive {
    /// Position samples restricted to their (x, y) columns
    fn position(&self) -> Result<Vec<(f64, f64)>>;

    /// Heading per timestep
    fn yaw(&self) -> Result<Vec<f64>>;

    /// Encoded image buffers, in frame index order
    fn frames(&self) -> Result<Vec<Vec<u8>>>;
}

/// Opens archive files. An error from `open` marks the entry as unreadable.
pub trait ArchiveOpener {
    type Archive: TrajectoryArchive;

    fn open(&self, path: &Path) -> Result<Self::Archive>;
}

#[cfg(feature = "hdf5")]
pub use self::hdf5_backend::{Hdf5Archive, Hdf5Opener};

#[cfg(feature = "hdf5")]
mod hdf5_backend {
    use anyhow::{bail, Context, Result};
    use hdf5::types::VarLenArray;
    use std::path::Path;

    use super::{ArchiveOpener, TrajectoryArchive};

    const ROBOT_GROUP: &str = "jackal";
    const POSITION_DATASET: &str = "position";
    const YAW_DATASET: &str = "yaw";
    const IMAGES_GROUP: &str = "images";
    const RGB_LEFT_DATASET: &str = "rgb_left";

    /// Reads recon `.hdf5` trajectory files
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Hdf5Opener;

    impl ArchiveOpener for Hdf5Opener {
        type Archive = Hdf5Archive;

        fn open(&self, path: &Path) -> Result<Hdf5Archive> {
            let file = hdf5::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Hdf5Archive { file })
        }
    }

    pub struct Hdf5Archive {
        file: hdf5::File,
    }

    impl Hdf5Archive {
        fn dataset(&self, group: &str, name: &str) -> Result<hdf5::Dataset> {
            self.file
                .group(group)
                .and_then(|g| g.dataset(name))
                .with_context(|| format!("Missing dataset {}/{}", group, name))
        }
    }

    impl TrajectoryArchive for Hdf5Archive {
        fn position(&self) -> Result<Vec<(f64, f64)>> {
            let position = self
                .dataset(ROBOT_GROUP, POSITION_DATASET)?
                .read_2d::<f64>()
                .context("Failed to read position")?;
            if position.ncols() < 2 {
                bail!(
                    "Position has {} columns, expected at least x and y",
                    position.ncols()
                );
            }
            Ok(position.rows().into_iter().map(|row| (row[0], row[1])).collect())
        }

        fn yaw(&self) -> Result<Vec<f64>> {
            let yaw = self
                .dataset(ROBOT_GROUP, YAW_DATASET)?
                .read_1d::<f64>()
                .context("Failed to read yaw")?;
            Ok(yaw.to_vec())
        }

        fn frames(&self) -> Result<Vec<Vec<u8>>> {
            let frames = self
                .dataset(IMAGES_GROUP, RGB_LEFT_DATASET)?
                .read_1d::<VarLenArray<u8>>()
                .context("Failed to read images")?;
            Ok(frames.iter().map(|frame| frame.as_slice().to_vec()).collect())
        }
    }
}
