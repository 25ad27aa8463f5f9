use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest`, optionally replacing the copy with
    /// a `.zip` archive. Returns the final backup path.
    ///
    /// The caller decides about overwriting; an existing `dest` is replaced.
    pub fn backup(pool: &DbPool, db_path: &Path, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        if !db_path.exists() {
            return Err(AppError::NotFound(format!(
                "database file {}",
                db_path.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(db_path, dest)?;
        info!(dest = %dest.display(), "database copied");

        let final_path = if compress {
            let zipped = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warn!(path = %dest.display(), error = %e, "failed to remove uncompressed backup");
            }
            zipped
        } else {
            dest.to_path_buf()
        };

        ttlog_lenient(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Write `path` into `<path>.zip` (deflated) and return the archive path.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
