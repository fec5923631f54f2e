use crate::config::cli::{Command, HashAlgorithm};
use crate::ext::bytes::from_hex;
use crate::ext::file::PathExt;
use crate::ext::numeric::IntegerExt;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Runs one CLI command and returns the line to print on success.
pub fn execute(command: &Command) -> Result<String> {
    command.validate()?;
    tracing::debug!("Executing {:?}", command);

    match command {
        Command::Hash { path, algorithm } => {
            let digest = match algorithm {
                HashAlgorithm::Md5 => path.md5_hex()?,
                HashAlgorithm::Sha256 => path.sha256_hex()?,
            };
            Ok(format!("{}  {}", digest, path.display()))
        }
        Command::Gzip { source, dest } => {
            let dest = dest.clone().unwrap_or_else(|| gzip_name(source));
            let read = source.gzip_to(&dest)?;
            Ok(format!(
                "Compressed {} ({}) -> {} ({})",
                source.display(),
                read.to_file_size(),
                dest.display(),
                dest.file_size_human()?
            ))
        }
        Command::Gunzip { source, dest } => {
            let dest = dest.clone().unwrap_or_else(|| gunzip_name(source));
            let written = source.gunzip_to(&dest)?;
            Ok(format!(
                "Decompressed {} -> {} ({})",
                source.display(),
                dest.display(),
                written.to_file_size()
            ))
        }
        Command::Encrypt {
            source,
            dest,
            key,
            iv,
        } => {
            let written = source.encrypt_to(dest, &from_hex(key)?, &from_hex(iv)?)?;
            Ok(format!("Encrypted {} -> {} ({} bytes)", source.display(), dest.display(), written))
        }
        Command::Decrypt {
            source,
            dest,
            key,
            iv,
        } => {
            let written = source.decrypt_to(dest, &from_hex(key)?, &from_hex(iv)?)?;
            Ok(format!("Decrypted {} -> {} ({} bytes)", source.display(), dest.display(), written))
        }
        Command::Zip { source, archive } => {
            let files = source.zip_to(archive)?;
            Ok(format!("Added {} files to {}", files, archive.display()))
        }
        Command::Unzip { archive, dest } => {
            let entries = archive.unzip_to(dest)?;
            Ok(format!("Extracted {} entries into {}", entries, dest.display()))
        }
        Command::Size { path } => Ok(format!("{}  {}", path.file_size_human()?, path.display())),
    }
}

fn gzip_name(source: &Path) -> PathBuf {
    PathBuf::from(format!("{}.gz", source.display()))
}

fn gunzip_name(source: &Path) -> PathBuf {
    match source.extension() {
        Some(ext) if ext == "gz" => source.with_extension(""),
        _ => PathBuf::from(format!("{}.out", source.display())),
    }
}
