//! Fan-Out Service - hands the port list to every tool directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::ReconResult,
};

/// Copies one file into many directories.
pub struct FanOutService {
    filesystem: Arc<dyn Filesystem>,
}

impl FanOutService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Copy `source` into each of `destinations` under its own base name.
    ///
    /// Stops at the first failed copy; earlier copies are left in place.
    #[instrument(skip_all, fields(source = %source.display(), destinations = destinations.len()))]
    pub fn fan_out<P: AsRef<Path>>(
        &self,
        source: &Path,
        destinations: &[P],
    ) -> ReconResult<Vec<PathBuf>> {
        let file_name = source
            .file_name()
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: source.to_path_buf(),
                reason: "source has no file name".into(),
            })?;

        let mut copies = Vec::with_capacity(destinations.len());
        for dir in destinations {
            let target = dir.as_ref().join(file_name);
            debug!(to = %target.display(), "Copying");
            self.filesystem.copy_file(source, &target)?;
            copies.push(target);
        }

        info!(copies = copies.len(), "Fan-out finished");
        Ok(copies)
    }
}
