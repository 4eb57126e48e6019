//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DeployWatchError, DeployWatchResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "deploywatch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolved configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployWatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployWatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration from an explicit file, the working directory,
/// the user config directory, or defaults, then apply env overrides.
///
/// An explicit path must exist; discovered files are optional. A file that
/// exists but does not parse is always an error.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> DeployWatchResult<LoadedConfig> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(cwd),
    };

    let (config, warnings) = match &source {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => {
            debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config)?,
        source,
        warnings,
    })
}

fn discover(cwd: &Path) -> Option<PathBuf> {
    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("deploywatch").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Apply environment variable overrides (DEPLOYWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> DeployWatchResult<Config> {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployWatchResult<Config> {
    // DEPLOYWATCH_COMMAND
    if let Some(command) = get_env("DEPLOYWATCH_COMMAND").filter(|c| !c.trim().is_empty()) {
        config.provider.command = command;
    }

    // DEPLOYWATCH_INTERVAL (seconds)
    if let Some(val) = get_env("DEPLOYWATCH_INTERVAL") {
        config.poll.interval_secs = parse_number("DEPLOYWATCH_INTERVAL", &val)?;
    }

    // DEPLOYWATCH_MAX_WAIT (seconds, 0 = no limit)
    if let Some(val) = get_env("DEPLOYWATCH_MAX_WAIT") {
        config.poll.max_wait_secs = parse_number("DEPLOYWATCH_MAX_WAIT", &val)?;
    }

    // DEPLOYWATCH_LOG_LIMIT
    if let Some(val) = get_env("DEPLOYWATCH_LOG_LIMIT") {
        config.logs.limit = parse_number("DEPLOYWATCH_LOG_LIMIT", &val)?;
    }

    // DEPLOYWATCH_REPORT_PATH
    if let Some(path) = get_env("DEPLOYWATCH_REPORT_PATH").filter(|p| !p.trim().is_empty()) {
        config.logs.report_path = PathBuf::from(path);
    }

    Ok(config)
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> DeployWatchResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DeployWatchError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "provider",
        "command",
        "args",
        "poll",
        "interval_secs",
        "max_wait_secs",
        "logs",
        "limit",
        "report_path",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
