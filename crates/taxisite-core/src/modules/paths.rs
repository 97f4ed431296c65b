//! Path utilities for on-device data.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// Directory name for data storage under the home directory.
pub const DATA_DIR: &str = ".taxisite";
/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "TAXISITE_DATA_DIR";
/// Subdirectory for rolling log files.
pub const LOGS_DIR: &str = "logs";

/// Get the data directory path, creating it if needed.
///
/// Priority:
/// 1. `explicit` (from the command line)
/// 2. `TAXISITE_DATA_DIR` environment variable (for container deployments)
/// 3. `~/.taxisite`
pub fn get_data_dir(explicit: Option<&Path>) -> AppResult<PathBuf> {
    let data_dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::var_os(DATA_DIR_ENV) {
            Some(custom_dir) if !custom_dir.is_empty() => PathBuf::from(custom_dir),
            _ => dirs::home_dir()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Cannot get home directory"))?
                .join(DATA_DIR),
        },
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    Ok(data_dir)
}

/// Log directory inside `data_dir`, created on demand.
pub fn get_logs_dir(data_dir: &Path) -> AppResult<PathBuf> {
    let logs_dir = data_dir.join(LOGS_DIR);
    if !logs_dir.exists() {
        fs::create_dir_all(&logs_dir)?;
    }
    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested").join("data");

        let dir = get_data_dir(Some(&target)).unwrap();
        assert_eq!(dir, target);
        assert!(dir.is_dir());

        let logs = get_logs_dir(&dir).unwrap();
        assert!(logs.ends_with(LOGS_DIR));
        assert!(logs.is_dir());
    }
}
