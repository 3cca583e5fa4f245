use anyhow::{Result, anyhow};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable that relocates the whole data directory.
pub const HOME_ENV_VAR: &str = "TASKLIST_HOME";

pub fn get_tasklist_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".tasklist"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_tasklist_dir()?;
    Ok(dir.join("config.toml"))
}

pub fn get_database_path() -> Result<PathBuf> {
    let dir = get_tasklist_dir()?;
    Ok(dir.join("tasks.db"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let dir = get_tasklist_dir()?;
    Ok(dir.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    let dir = get_tasklist_dir()?;
    Ok(dir.join("crash.log"))
}

pub fn ensure_tasklist_dir_exists() -> Result<PathBuf> {
    let dir = get_tasklist_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_default_dir_under_home() {
        // SAFETY: serialized with every other test touching this variable
        unsafe { env::remove_var(HOME_ENV_VAR) };
        let dir = get_tasklist_dir().unwrap();
        assert!(dir.to_string_lossy().ends_with(".tasklist"));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        let temp_dir = TempDir::new().unwrap();
        unsafe { env::set_var(HOME_ENV_VAR, temp_dir.path()) };

        assert_eq!(get_tasklist_dir().unwrap(), temp_dir.path());
        assert_eq!(get_config_path().unwrap(), temp_dir.path().join("config.toml"));
        assert_eq!(get_database_path().unwrap(), temp_dir.path().join("tasks.db"));
        assert_eq!(get_logs_dir().unwrap(), temp_dir.path().join("logs"));
        assert_eq!(get_crash_log_path().unwrap(), temp_dir.path().join("crash.log"));

        unsafe { env::remove_var(HOME_ENV_VAR) };
    }

    #[test]
    #[serial]
    fn test_empty_override_is_ignored() {
        unsafe { env::set_var(HOME_ENV_VAR, "") };
        let dir = get_tasklist_dir().unwrap();
        assert!(dir.to_string_lossy().ends_with(".tasklist"));
        unsafe { env::remove_var(HOME_ENV_VAR) };
    }

    #[test]
    #[serial]
    fn test_ensure_dir_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("data");
        unsafe { env::set_var(HOME_ENV_VAR, &target) };

        let dir = ensure_tasklist_dir_exists().unwrap();
        assert_eq!(dir, target);
        assert!(target.is_dir());

        unsafe { env::remove_var(HOME_ENV_VAR) };
    }
}
