use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally replacing the copy
    /// with a zip archive. Returns the path actually written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if compress && final_target == dest {
            return Err(AppError::Other(
                "backup file must not use the .zip extension with --compress".into(),
            ));
        }
        if same_file(src, dest) || same_file(src, &final_target) {
            return Err(AppError::Other(format!(
                "backup file '{}' is the database itself",
                final_target.display()
            )));
        }
        ensure_writable(&final_target, force)?;

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // audit trail; a failure here does not undo the backup
        match DbPool::new(&cfg.database) {
            Ok(pool) => {
                let msg = if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                };
                if let Err(e) = ttlog(&pool.conn, "backup", &final_path.to_string_lossy(), msg) {
                    warning(format!("Failed to write internal log: {}", e));
                }
            }
            Err(e) => warning(format!("Failed to write internal log: {}", e)),
        }

        Ok(final_path)
    }
}

/// True when both paths resolve to the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    success(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
