use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::SqlStorage;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResumesConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("resumes.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".resumes").join("resumes.db")
}

impl ResumesConfig {
    /// Read the config file.
    ///
    /// Without an explicit path a missing `resumes.toml` means defaults; an
    /// explicit path that can't be read is an error.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = default_config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Database path from, in order: the explicit flag, the config file, the default.
    /// Relative paths are taken from `base`.
    pub fn database_path(&self, flag: Option<PathBuf>, base: &Path) -> PathBuf {
        flag.or_else(|| self.database.as_ref().map(PathBuf::from))
            .map(|path| base.join(path))
            .unwrap_or_else(|| default_database_path_in(base))
    }

    /// Resolve the database path, create its directory and open the store
    pub fn open_storage(&self, flag: Option<PathBuf>, base: &Path) -> anyhow::Result<(PathBuf, SqlStorage)> {
        let db_path = self.database_path(flag, base);
        if let Some(dir) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating database directory {}", dir.display()))?;
        }

        let store = SqlStorage::open(&db_path)
            .with_context(|| format!("opening database {}", db_path.display()))?;
        Ok((db_path, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Resume, Storage};

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ResumesConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumes.toml");
        std::fs::write(&path, "database = \"data/cv.db\"\n").unwrap();

        let config = ResumesConfig::load(Some(&path)).unwrap();
        assert_eq!(config.database.as_deref(), Some("data/cv.db"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumes.toml");
        std::fs::write(&path, "database = [").unwrap();

        let err = ResumesConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn test_database_path_precedence() {
        let base = Path::new("/work");
        let config = ResumesConfig {
            database: Some("from-config.db".to_string()),
        };

        assert_eq!(
            config.database_path(Some(PathBuf::from("/abs/flag.db")), base),
            PathBuf::from("/abs/flag.db")
        );
        assert_eq!(
            config.database_path(None, base),
            PathBuf::from("/work/from-config.db")
        );
        assert_eq!(
            ResumesConfig::default().database_path(None, base),
            PathBuf::from("/work/.resumes/resumes.db")
        );
    }

    #[test]
    fn test_open_storage_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResumesConfig {
            database: Some("nested/deeper/resumes.db".to_string()),
        };

        let (db_path, mut store) = config.open_storage(None, dir.path()).unwrap();

        assert_eq!(db_path, dir.path().join("nested/deeper/resumes.db"));
        assert!(db_path.parent().unwrap().is_dir());
        store.save(&Resume::with_uuid("uuid1", "Name")).unwrap();
        assert_eq!(store.size().unwrap(), 1);
    }
}
