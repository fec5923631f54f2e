use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "extkit")]
#[command(about = "File helpers: hashing, gzip, AES encryption and zip archives")]
pub struct CliConfig {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a settings TOML file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the digest of a file
    Hash {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value = "sha256")]
        algorithm: HashAlgorithm,
    },
    /// Gzip a file (default output: <source>.gz)
    Gzip {
        source: PathBuf,
        dest: Option<PathBuf>,
    },
    /// Decompress a gzip file (default output: <source> without .gz)
    Gunzip {
        source: PathBuf,
        dest: Option<PathBuf>,
    },
    /// AES-CBC encrypt a file with a hex key and IV
    Encrypt {
        source: PathBuf,
        dest: PathBuf,
        #[arg(long)]
        key: String,
        #[arg(long)]
        iv: String,
    },
    /// AES-CBC decrypt a file with a hex key and IV
    Decrypt {
        source: PathBuf,
        dest: PathBuf,
        #[arg(long)]
        key: String,
        #[arg(long)]
        iv: String,
    },
    /// Zip a file or directory
    Zip { source: PathBuf, archive: PathBuf },
    /// Extract a zip archive into a directory
    Unzip { archive: PathBuf, dest: PathBuf },
    /// Print a human readable file size
    Size { path: PathBuf },
}

fn check_path(field: &str, path: &Path) -> Result<()> {
    validate_path(field, &path.to_string_lossy())
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Hash { path, .. } | Command::Size { path } => check_path("path", path),
            Command::Gzip { source, dest } | Command::Gunzip { source, dest } => {
                check_path("source", source)?;
                if let Some(dest) = dest {
                    check_path("dest", dest)?;
                }
                Ok(())
            }
            Command::Encrypt {
                source,
                dest,
                key,
                iv,
            }
            | Command::Decrypt {
                source,
                dest,
                key,
                iv,
            } => {
                check_path("source", source)?;
                check_path("dest", dest)?;
                validate_non_empty_string("key", key)?;
                validate_non_empty_string("iv", iv)
            }
            Command::Zip { source, archive } => {
                check_path("source", source)?;
                check_path("archive", archive)
            }
            Command::Unzip { archive, dest } => {
                check_path("archive", archive)?;
                check_path("dest", dest)
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            check_path("config", config)?;
        }
        self.command.validate()
    }
}
