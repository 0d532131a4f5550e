use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

const DATABASE_FILE: &str = "stardock.db";

/// Location of the client's persisted state
pub struct DataDir {
    data_dir: PathBuf,
}

impl DataDir {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "stardock")
                    .context("Could not determine data directory")?;
                proj_dirs.data_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(Self { data_dir })
    }

    /// Path to the key-value database
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let custom = tmp.path().join("nested").join("state");
        let dir = DataDir::new(Some(custom.clone())).unwrap();
        assert!(custom.is_dir());
        assert_eq!(dir.database_path(), custom.join("stardock.db"));
    }
}
