//! Archive file lifecycle.
//!
//! Opens the target path with create+truncate so a fallback attempt on the
//! same path starts from zero bytes instead of appending to a failed
//! attempt's partial write. Writes are pwrite-style so the curl write
//! callback can share the handle without a seek cursor.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(unix)]
use std::os::unix::fs::FileExt;

/// Write handle for the archive being downloaded. Cheap to clone into the
/// transfer callback; the file is closed when the last clone drops.
#[derive(Clone)]
pub struct ArchiveWriter {
    file: Arc<File>,
    path: PathBuf,
}

impl ArchiveWriter {
    /// Create the archive file at `path`, truncating any existing content.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(ArchiveWriter {
            file: Arc::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Write `data` at `offset`. Does not move a shared cursor.
    #[cfg(unix)]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> io::Result<()> {
        let n = self.file.write_at(data, offset)?;
        if n != data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {} of {}", n, data.len()),
            ));
        }
        Ok(())
    }

    /// Non-Unix fallback: seek + write on a cloned handle.
    #[cfg(not(unix))]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> io::Result<()> {
        use std::io::{Seek, SeekFrom, Write};
        let mut f = (*self.file).try_clone()?;
        f.seek(SeekFrom::Start(offset))?;
        f.write_all(data)?;
        Ok(())
    }

    /// Flush file data to disk. Call before reporting the transfer as done.
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Path the archive is being written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
