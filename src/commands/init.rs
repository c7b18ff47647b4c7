use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force).map(|path| {
        println!("Created {} configuration file", path.display());
    })
}

/// Write the default configuration into `dir`, returning its path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let contents = format!("# Stylemap Configuration\n\n{}", default_config_toml()?);
    io::write_file(&config_path, &contents)?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_from, StylemapConfig};

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), StylemapConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
