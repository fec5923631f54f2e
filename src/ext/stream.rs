use crate::config::settings::Settings;
use crate::ext::cipher;
use crate::ext::task::TaskExt;
use crate::utils::error::Result;
use async_trait::async_trait;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use md5::Md5;
use sha2::{Digest, Sha256};
use std::io::{self, Read, Write};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Helpers for any blocking reader. Every method consumes the reader to its end.
pub trait ReadExt: Read {
    fn read_all_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    fn read_all_string(&mut self) -> Result<String> {
        let mut buffer = String::new();
        self.read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    /// Returns the number of bytes copied.
    fn copy_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<u64> {
        Ok(io::copy(self, writer)?)
    }

    /// Gzip-compresses the reader into `writer`. Returns the uncompressed byte count.
    fn gzip_to<W: Write>(&mut self, writer: W) -> Result<u64> {
        let level = Compression::new(Settings::current().compression.level);
        let mut encoder = GzEncoder::new(writer, level);
        let copied = io::copy(self, &mut encoder)?;
        encoder.finish()?.flush()?;
        tracing::debug!("Gzip compressed {} bytes", copied);
        Ok(copied)
    }

    /// Returns the decompressed byte count.
    fn gunzip_to<W: Write>(&mut self, mut writer: W) -> Result<u64>
    where
        Self: Sized,
    {
        let mut decoder = GzDecoder::new(self);
        let copied = io::copy(&mut decoder, &mut writer)?;
        writer.flush()?;
        tracing::debug!("Gzip decompressed {} bytes", copied);
        Ok(copied)
    }

    /// Encrypts the whole stream with AES-CBC. Returns the ciphertext length.
    fn encrypt_to<W: Write>(&mut self, mut writer: W, key: &[u8], iv: &[u8]) -> Result<u64> {
        let plaintext = self.read_all_bytes()?;
        let ciphertext = cipher::encrypt(&plaintext, key, iv)?;
        writer.write_all(&ciphertext)?;
        writer.flush()?;
        Ok(ciphertext.len() as u64)
    }

    /// Returns the plaintext length.
    fn decrypt_to<W: Write>(&mut self, mut writer: W, key: &[u8], iv: &[u8]) -> Result<u64> {
        let ciphertext = self.read_all_bytes()?;
        let plaintext = cipher::decrypt(&ciphertext, key, iv)?;
        writer.write_all(&plaintext)?;
        writer.flush()?;
        Ok(plaintext.len() as u64)
    }

    fn digest_md5_hex(&mut self) -> Result<String> {
        let mut hasher = Md5::new();
        io::copy(self, &mut hasher)?;
        Ok(hex::encode(hasher.finalize()))
    }

    fn digest_sha256_hex(&mut self) -> Result<String> {
        let mut hasher = Sha256::new();
        io::copy(self, &mut hasher)?;
        Ok(hex::encode(hasher.finalize()))
    }
}

impl<R: Read + ?Sized> ReadExt for R {}

#[async_trait]
pub trait AsyncReadExtra {
    async fn read_all_bytes_async(&mut self) -> Result<Vec<u8>>;
    async fn read_all_string_async(&mut self) -> Result<String>;
    /// Fails with a timeout error when the reader does not reach its end in time.
    async fn read_all_bytes_timeout(&mut self, timeout: Duration) -> Result<Vec<u8>>;
}

#[async_trait]
impl<R> AsyncReadExtra for R
where
    R: AsyncRead + Unpin + Send + ?Sized,
{
    async fn read_all_bytes_async(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.read_to_end(&mut buffer).await?;
        Ok(buffer)
    }

    async fn read_all_string_async(&mut self) -> Result<String> {
        let mut buffer = String::new();
        self.read_to_string(&mut buffer).await?;
        Ok(buffer)
    }

    async fn read_all_bytes_timeout(&mut self, timeout: Duration) -> Result<Vec<u8>> {
        self.read_all_bytes_async().with_timeout(timeout).await?
    }
}
