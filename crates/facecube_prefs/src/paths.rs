//! Locations of files read and written by facecube.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result, WrapErr};

const PREFS_FILE_NAME: &str = "facecube-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

/// Environment variable that overrides the preferences file location.
pub const PREFS_FILE_ENV_VAR: &str = "FACECUBE_PREFS";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = prefs_file_path();
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE.as_deref().ok_or_eyre("no preferences path")
}

fn prefs_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(PREFS_FILE_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    match ProjectDirs::from("", "", "facecube") {
        Some(dirs) => Some(
            dirs.config_dir()
                .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
        ),
        None => {
            log::error!("error getting config directory");
            None
        }
    }
}

/// Moves the file at `path` aside to a timestamped backup in the same
/// directory and returns the backup's location, or `None` if there is no file
/// at `path`.
pub fn back_up_file(path: &Path) -> Result<Option<PathBuf>> {
    if !path.is_file() {
        return Ok(None);
    }
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let backup = backup_path(path, now);
    std::fs::rename(path, &backup)
        .wrap_err_with(|| format!("error backing up {}", path.display()))?;
    Ok(Some(backup))
}

fn backup_path(original: &Path, now: time::OffsetDateTime) -> PathBuf {
    let stem = original
        .file_stem()
        .map_or_else(|| "unknown".to_owned(), |s| s.to_string_lossy().into_owned());
    let extension = original
        .extension()
        .map_or_else(|| "txt".to_owned(), |s| s.to_string_lossy().into_owned());

    original.with_file_name(format!(
        "{stem}_{:04}-{:02}-{:02}_{:02}-{:02}-{:02}_bak.{extension}",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_back_up_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facecube-prefs.yaml");
        assert_eq!(back_up_file(&path).unwrap(), None);

        std::fs::write(&path, "junk").unwrap();
        let backup = back_up_file(&path).unwrap().unwrap();
        assert!(!path.exists());
        assert_eq!(backup.parent(), Some(dir.path()));
        assert!(backup.to_string_lossy().ends_with("_bak.yaml"));
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "junk");
    }

    #[test]
    fn test_backup_path() {
        let now = time::OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(90061);
        assert_eq!(
            backup_path(Path::new("/tmp/cfg/facecube-prefs.yaml"), now),
            PathBuf::from("/tmp/cfg/facecube-prefs_1970-01-02_01-01-01_bak.yaml"),
        );
        assert_eq!(
            backup_path(Path::new("prefs"), now),
            PathBuf::from("prefs_1970-01-02_01-01-01_bak.txt"),
        );
    }
}
