use crate::ext::numeric::IntegerExt;
use crate::ext::stream::ReadExt;
use crate::utils::error::{ExtError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// File system helpers on paths. Writers create missing parent directories.
pub trait PathExt {
    fn read_text(&self) -> Result<String>;
    fn write_text(&self, content: &str) -> Result<()>;
    fn append_text(&self, content: &str) -> Result<()>;
    fn read_bytes(&self) -> Result<Vec<u8>>;
    fn write_bytes(&self, data: &[u8]) -> Result<()>;
    fn file_size(&self) -> Result<u64>;
    fn file_size_human(&self) -> Result<String>;
    fn line_count(&self) -> Result<usize>;
    fn md5_hex(&self) -> Result<String>;
    fn sha256_hex(&self) -> Result<String>;
    fn gzip_to(&self, dest: &Path) -> Result<u64>;
    fn gunzip_to(&self, dest: &Path) -> Result<u64>;
    fn encrypt_to(&self, dest: &Path, key: &[u8], iv: &[u8]) -> Result<u64>;
    fn decrypt_to(&self, dest: &Path, key: &[u8], iv: &[u8]) -> Result<u64>;
    /// Zips a single file or a whole directory tree. Returns the number of files added.
    fn zip_to(&self, archive: &Path) -> Result<usize>;
    /// Extracts this archive into `dir`. Returns the number of entries.
    fn unzip_to(&self, dir: &Path) -> Result<usize>;
    fn is_empty_dir(&self) -> Result<bool>;
    fn ensure_parent_dir(&self) -> Result<()>;
}

impl PathExt for Path {
    fn read_text(&self) -> Result<String> {
        Ok(fs::read_to_string(self)?)
    }

    fn write_text(&self, content: &str) -> Result<()> {
        self.write_bytes(content.as_bytes())
    }

    fn append_text(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut file = OpenOptions::new().create(true).append(true).open(self)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self)?)
    }

    fn write_bytes(&self, data: &[u8]) -> Result<()> {
        self.ensure_parent_dir()?;
        fs::write(self, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), self.display());
        Ok(())
    }

    fn file_size(&self) -> Result<u64> {
        Ok(fs::metadata(self)?.len())
    }

    fn file_size_human(&self) -> Result<String> {
        Ok(self.file_size()?.to_file_size())
    }

    fn line_count(&self) -> Result<usize> {
        let reader = BufReader::new(File::open(self)?);
        let mut count = 0;
        for line in reader.lines() {
            line?;
            count += 1;
        }
        Ok(count)
    }

    fn md5_hex(&self) -> Result<String> {
        File::open(self)?.digest_md5_hex()
    }

    fn sha256_hex(&self) -> Result<String> {
        File::open(self)?.digest_sha256_hex()
    }

    fn gzip_to(&self, dest: &Path) -> Result<u64> {
        let mut source = BufReader::new(File::open(self)?);
        dest.ensure_parent_dir()?;
        let writer = BufWriter::new(File::create(dest)?);
        let copied = source.gzip_to(writer)?;
        tracing::info!("Compressed {} -> {}", self.display(), dest.display());
        Ok(copied)
    }

    fn gunzip_to(&self, dest: &Path) -> Result<u64> {
        let mut source = BufReader::new(File::open(self)?);
        dest.ensure_parent_dir()?;
        let writer = BufWriter::new(File::create(dest)?);
        let copied = source.gunzip_to(writer)?;
        tracing::info!("Decompressed {} -> {}", self.display(), dest.display());
        Ok(copied)
    }

    fn encrypt_to(&self, dest: &Path, key: &[u8], iv: &[u8]) -> Result<u64> {
        let mut source = File::open(self)?;
        // 金鑰或 IV 不合法時不建立目的檔
        let ciphertext = {
            let mut buffer = Vec::new();
            source.encrypt_to(&mut buffer, key, iv)?;
            buffer
        };
        dest.write_bytes(&ciphertext)?;
        tracing::info!("Encrypted {} -> {}", self.display(), dest.display());
        Ok(ciphertext.len() as u64)
    }

    fn decrypt_to(&self, dest: &Path, key: &[u8], iv: &[u8]) -> Result<u64> {
        let mut source = File::open(self)?;
        // 先解密到記憶體，金鑰錯誤時不會留下半成品
        let plaintext = {
            let mut buffer = Vec::new();
            source.decrypt_to(&mut buffer, key, iv)?;
            buffer
        };
        dest.write_bytes(&plaintext)?;
        tracing::info!("Decrypted {} -> {}", self.display(), dest.display());
        Ok(plaintext.len() as u64)
    }

    fn zip_to(&self, archive: &Path) -> Result<usize> {
        if !self.exists() {
            return Err(ExtError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", self.display()),
            )));
        }

        if archive.exists() && fs::canonicalize(archive)? == fs::canonicalize(self)? {
            return Err(ExtError::invalid_value(
                "archive",
                archive.display(),
                "Archive path must differ from the source",
            ));
        }

        archive.ensure_parent_dir()?;
        let mut zip = ZipWriter::new(File::create(archive)?);
        // 壓縮檔可能位於來源目錄內，走訪時要略過它自己
        let archive_path = fs::canonicalize(archive)?;
        let options = SimpleFileOptions::default();
        let mut files_added = 0;

        if self.is_file() {
            let name = validate_required_field("file_name", &self.file_name())?
                .to_string_lossy()
                .into_owned();
            zip.start_file(name, options)?;
            io::copy(&mut File::open(self)?, &mut zip)?;
            files_added += 1;
        } else {
            for entry in WalkDir::new(self).min_depth(1).sort_by_file_name() {
                let entry = entry.map_err(|e| ExtError::IoError(e.into()))?;
                if entry.file_type().is_file() && fs::canonicalize(entry.path())? == archive_path {
                    continue;
                }
                let relative = entry
                    .path()
                    .strip_prefix(self)
                    .map_err(|e| ExtError::invalid_value("path", entry.path().display(), e.to_string()))?;
                let name = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");

                if entry.file_type().is_dir() {
                    zip.add_directory(format!("{}/", name), options)?;
                } else {
                    zip.start_file(name, options)?;
                    io::copy(&mut File::open(entry.path())?, &mut zip)?;
                    files_added += 1;
                }
            }
        }

        zip.finish()?;
        tracing::info!("Zipped {} files into {}", files_added, archive.display());
        Ok(files_added)
    }

    fn unzip_to(&self, dir: &Path) -> Result<usize> {
        let mut archive = ZipArchive::new(File::open(self)?)?;
        let entries = archive.len();
        fs::create_dir_all(dir)?;
        archive.extract(dir)?;
        tracing::info!("Extracted {} entries into {}", entries, dir.display());
        Ok(entries)
    }

    fn is_empty_dir(&self) -> Result<bool> {
        Ok(fs::read_dir(self)?.next().is_none())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
pub trait AsyncPathExt {
    async fn read_text_async(&self) -> Result<String>;
    async fn write_text_async(&self, content: &str) -> Result<()>;
    async fn read_bytes_async(&self) -> Result<Vec<u8>>;
    async fn write_bytes_async(&self, data: &[u8]) -> Result<()>;
}

#[async_trait]
impl AsyncPathExt for Path {
    async fn read_text_async(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(self).await?)
    }

    async fn write_text_async(&self, content: &str) -> Result<()> {
        self.write_bytes_async(content.as_bytes()).await
    }

    async fn read_bytes_async(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(self).await?)
    }

    async fn write_bytes_async(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(self, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_text_round_trip_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/note.txt");

        path.write_text("line one\n").unwrap();
        path.append_text("line two\n").unwrap();

        assert_eq!(path.read_text().unwrap(), "line one\nline two\n");
        assert_eq!(path.line_count().unwrap(), 2);
        assert_eq!(path.file_size().unwrap(), 18);
        assert_eq!(path.file_size_human().unwrap(), "18 B");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(missing.read_text(), Err(ExtError::IoError(_))));
    }

    #[test]
    fn test_file_digests() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.txt");
        path.write_bytes(b"abc").unwrap();
        assert_eq!(path.md5_hex().unwrap(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            path.sha256_hex().unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(dir.path().is_empty_dir().unwrap());
        dir.path().join("file").write_text("x").unwrap();
        assert!(!dir.path().is_empty_dir().unwrap());
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("async/data.txt");
        path.write_text_async("async text").await.unwrap();
        assert_eq!(path.read_text_async().await.unwrap(), "async text");
        assert_eq!(path.read_bytes_async().await.unwrap(), b"async text");
    }
}
