use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::remote::{DEFAULT_READ_PATH, DEFAULT_SAVE_PATH, DEFAULT_SERVER, DEFAULT_TIMEOUT, Endpoints};

/// How long a read/save status stays on screen unless configured otherwise.
pub const DEFAULT_STATUS_MS: u64 = 1500;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub server: Option<String>,
    pub read_path: Option<String>,
    pub save_path: Option<String>,
    pub status_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub fetch_on_start: bool,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            server: other.server.clone().or_else(|| self.server.clone()),
            read_path: other.read_path.clone().or_else(|| self.read_path.clone()),
            save_path: other.save_path.clone().or_else(|| self.save_path.clone()),
            status_ms: other.status_ms.or(self.status_ms),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            fetch_on_start: self.fetch_on_start || other.fetch_on_start,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    pub fn server(&self) -> &str {
        self.server.as_deref().unwrap_or(DEFAULT_SERVER)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            read_path: self
                .read_path
                .clone()
                .unwrap_or_else(|| DEFAULT_READ_PATH.to_string()),
            save_path: self
                .save_path
                .clone()
                .unwrap_or_else(|| DEFAULT_SAVE_PATH.to_string()),
        }
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_ms.unwrap_or(DEFAULT_STATUS_MS))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("paramedit").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("paramedit")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("paramedit").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("paramedit")
                .join("config");
        }
    }

    PathBuf::from(".parameditrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".parameditrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# paramedit defaults (saved with --save)".to_string());
    if let Some(server) = &flags.server {
        lines.push(format!("--server {server}"));
    }
    if let Some(read_path) = &flags.read_path {
        lines.push(format!("--read-path {read_path}"));
    }
    if let Some(save_path) = &flags.save_path {
        lines.push(format!("--save-path {save_path}"));
    }
    if let Some(ms) = flags.status_ms {
        lines.push(format!("--status-ms {ms}"));
    }
    if let Some(secs) = flags.timeout_secs {
        lines.push(format!("--timeout {secs}"));
    }
    if flags.fetch_on_start {
        lines.push("--fetch".to_string());
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from command-line style tokens. Unknown tokens and
/// unparseable numbers are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
            _ => (token, None),
        };
        if name == "--fetch" {
            flags.fetch_on_start = true;
            i += 1;
            continue;
        }
        let takes_value = matches!(
            name,
            "--server" | "--read-path" | "--save-path" | "--status-ms" | "--timeout" | "--log-file"
        );
        if !takes_value {
            i += 1;
            continue;
        }
        let value = match inline {
            Some(value) => Some(value),
            None => {
                let next = tokens.get(i + 1).cloned();
                if next.is_some() {
                    i += 1;
                }
                next
            }
        };
        if let Some(value) = value {
            match name {
                "--server" => flags.server = Some(value),
                "--read-path" => flags.read_path = Some(value),
                "--save-path" => flags.save_path = Some(value),
                "--status-ms" => flags.status_ms = value.parse().ok(),
                "--timeout" => flags.timeout_secs = value.parse().ok(),
                "--log-file" => flags.log_file = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "paramedit".to_string(),
            "--server".to_string(),
            "robot:8000".to_string(),
            "--fetch".to_string(),
            "--status-ms=2500".to_string(),
            "--read-path=/raw".to_string(),
            "--log-file".to_string(),
            "edit.log".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.server.as_deref(), Some("robot:8000"));
        assert!(flags.fetch_on_start);
        assert_eq!(flags.status_ms, Some(2500));
        assert_eq!(flags.read_path.as_deref(), Some("/raw"));
        assert_eq!(flags.log_file, Some(PathBuf::from("edit.log")));
        assert_eq!(flags.save_path, None);
    }

    #[test]
    fn test_parse_flag_tokens_ignores_bad_numbers() {
        let args = vec!["--timeout".to_string(), "soon".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.timeout_secs, None);
        assert_eq!(flags.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_defaults_when_unset() {
        let flags = ConfigFlags::default();
        assert_eq!(flags.server(), "localhost:8000");
        assert_eq!(flags.endpoints(), Endpoints::default());
        assert_eq!(flags.status_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            fetch_on_start: true,
            server: Some("a:1".to_string()),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            server: Some("b:2".to_string()),
            status_ms: Some(500),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.fetch_on_start);
        assert_eq!(merged.server(), "b:2");
        assert_eq!(merged.status_ms, Some(500));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".parameditrc");
        let flags = ConfigFlags {
            server: Some("10.0.0.5:8000".to_string()),
            read_path: Some("/raw".to_string()),
            save_path: Some("/save".to_string()),
            status_ms: Some(900),
            timeout_secs: Some(3),
            fetch_on_start: true,
            log_file: Some(PathBuf::from("edit.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }
}
