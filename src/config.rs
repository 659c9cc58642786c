use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = ".minish.toml";

/// Bits `mkdir` may pass through to the kernel.
pub const PERMISSION_BITS: u32 = 0o7777;

#[derive(Debug, Deserialize, Default)]
pub struct MinishConfig {
    #[serde(default)]
    pub shell: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub prompt: String,
    pub mkdir_mode: u32,
    pub recall_depth: usize,
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            mkdir_mode: 0o700,
            recall_depth: 4,
            log_level: "warn".to_string(),
        }
    }
}

/// Load the configuration. An explicit path must exist; the default
/// `$HOME/.minish.toml` is only read when present.
pub fn load_config(explicit: Option<&Path>) -> Result<MinishConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(MinishConfig::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| Path::new(&home).join(DEFAULT_CONFIG_FILE))
}

fn read_config(path: &Path) -> Result<MinishConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<MinishConfig> {
    let config: MinishConfig = toml::from_str(content)?;

    if config.shell.mkdir_mode > PERMISSION_BITS {
        bail!(
            "mkdir_mode {:#o} is not a permission mode (max {:#o})",
            config.shell.mkdir_mode,
            PERMISSION_BITS
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.shell, SessionConfig::default());
        assert_eq!(config.shell.prompt, "> ");
        assert_eq!(config.shell.mkdir_mode, 0o700);
        assert_eq!(config.shell.recall_depth, 4);
    }

    #[test]
    fn test_partial_shell_section() {
        let config = parse_config(
            r#"
            [shell]
            prompt = "$ "
            mkdir_mode = 0o755
            "#,
        )
        .unwrap();
        assert_eq!(config.shell.prompt, "$ ");
        assert_eq!(config.shell.mkdir_mode, 0o755);
        assert_eq!(config.shell.recall_depth, 4);
        assert_eq!(config.shell.log_level, "warn");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse_config("[shell]\nrecall_depth = \"deep\"").is_err());
        assert!(parse_config("[shell]\nmkdir_mode = 0o17777").is_err());
        assert!(parse_config("[shell\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("minish_no_such_config_{}.toml", std::process::id()));
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_explicit_file_is_read() {
        let path = std::env::temp_dir().join(format!("minish_config_{}.toml", std::process::id()));
        fs::write(&path, "[shell]\nrecall_depth = 9\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.shell.recall_depth, 9);
    }
}
