//! Configuration management for renaming passes

use crate::error::{RenameError, Result};
use crate::naming::{SplitMode, DEFAULT_SKIP_TOKENS};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = ".wav";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rename: RenameConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    pub suffix: String,
    pub split_mode: SplitMode,
    pub skip_tokens: usize,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub verbose: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            split_mode: SplitMode::FullPath,
            skip_tokens: DEFAULT_SKIP_TOKENS,
            dry_run: false,
        }
    }
}

impl Config {
    pub fn suffix(&self) -> &str {
        &self.rename.suffix
    }

    pub fn split_mode(&self) -> SplitMode {
        self.rename.split_mode
    }

    pub fn skip_tokens(&self) -> usize {
        self.rename.skip_tokens
    }

    pub fn dry_run(&self) -> bool {
        self.rename.dry_run
    }

    pub fn verbose(&self) -> bool {
        self.output.verbose
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "rename-audio-files",
    about = "Prefix .wav files with their three-digit listing position",
    version
)]
pub struct Args {
    #[arg(help = "Directory containing the .wav files")]
    pub directory: PathBuf,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(
        short = 'n',
        long = "dry-run",
        help = "Print the planned renames without touching any file"
    )]
    pub dry_run: bool,

    #[arg(
        long = "split-mode",
        value_name = "MODE",
        help = "String whose leading tokens are dropped: full-path or file-name"
    )]
    pub split_mode: Option<SplitMode>,

    #[arg(
        long = "suffix",
        value_name = "SUFFIX",
        help = "Filename suffix that selects entries [default: .wav]"
    )]
    pub suffix: Option<String>,

    #[arg(
        long = "skip-tokens",
        value_name = "N",
        help = "Leading space-separated tokens to drop [default: 2]"
    )]
    pub skip_tokens: Option<usize>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create config from command line arguments and the optional config file.
    ///
    /// Flags given on the command line override file settings.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(suffix) = &args.suffix {
            config.rename.suffix = suffix.clone();
        }
        if let Some(mode) = args.split_mode {
            config.rename.split_mode = mode;
        }
        if let Some(skip) = args.skip_tokens {
            config.rename.skip_tokens = skip;
        }
        config.rename.dry_run |= args.dry_run;
        config.output.verbose |= args.verbose;

        config.validate()?;
        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenameError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| RenameError::config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.rename.suffix.is_empty() {
            return Err(RenameError::config("Suffix cannot be empty"));
        }
        if self.rename.suffix.contains(['/', std::path::MAIN_SEPARATOR]) {
            return Err(RenameError::config("Suffix cannot contain a path separator"));
        }
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RenameError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| RenameError::config(format!("Failed to write config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.suffix(), ".wav");
        assert_eq!(config.split_mode(), SplitMode::FullPath);
        assert_eq!(config.skip_tokens(), 2);
        assert!(!config.dry_run());
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.rename.suffix = String::new();
        assert!(config.validate().is_err());

        config.rename.suffix = "sub/x.wav".to_string();
        assert!(config.validate().is_err());

        config.rename.suffix = ".flac".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_args_require_directory() {
        assert!(Args::try_parse_from(["rename-audio-files"]).is_err());

        let args = parse(&["rename-audio-files", "/data/sounds"]);
        assert_eq!(args.directory, PathBuf::from("/data/sounds"));
        assert_eq!(Config::from_args(&args).unwrap(), Config::default());
    }

    #[test]
    fn test_args_override() {
        let args = parse(&[
            "rename-audio-files",
            "--split-mode",
            "file-name",
            "--suffix",
            ".WAV",
            "--skip-tokens",
            "1",
            "-n",
            "-v",
            "dir",
        ]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.split_mode(), SplitMode::FileName);
        assert_eq!(config.suffix(), ".WAV");
        assert_eq!(config.skip_tokens(), 1);
        assert!(config.dry_run());
        assert!(config.verbose());
    }

    #[test]
    fn test_invalid_split_mode_rejected() {
        let argv = ["rename-audio-files", "--split-mode", "stem", "dir"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.rename.split_mode = SplitMode::FileName;
        config.rename.skip_tokens = 1;

        assert!(config.save_to_file(&config_path).is_ok());
        let loaded = Config::from_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[rename]\nsplit_mode = \"file-name\"\n").unwrap();

        let args = parse(&["rename-audio-files", "-c", config_path.to_str().unwrap(), "dir"]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.split_mode(), SplitMode::FileName);
        assert_eq!(config.suffix(), ".wav");
        assert_eq!(config.skip_tokens(), 2);
    }

    #[test]
    fn test_cli_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let content = "[rename]\nsplit_mode = \"file-name\"\nskip_tokens = 3\n";
        std::fs::write(&config_path, content).unwrap();

        let args = parse(&[
            "rename-audio-files",
            "--config",
            config_path.to_str().unwrap(),
            "--skip-tokens",
            "2",
            "dir",
        ]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.split_mode(), SplitMode::FileName);
        assert_eq!(config.skip_tokens(), 2);
    }

    #[test]
    fn test_bad_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[rename\nsuffix = ").unwrap();
        assert!(Config::from_file(&config_path).is_err());
        assert!(Config::from_file(temp_dir.path().join("missing.toml")).is_err());
    }
}
