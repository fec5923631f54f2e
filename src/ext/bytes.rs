use crate::config::settings::Settings;
use crate::ext::cipher;
use crate::ext::numeric::format_file_size;
use crate::utils::error::{ExtError, Result};
use crate::utils::validation::validate_length_multiple;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::read::{DeflateDecoder, GzDecoder};
use flate2::write::{DeflateEncoder, GzEncoder};
use flate2::Compression;
use md5::Md5;
use sha2::{Digest, Sha256};
use std::io::{Read, Write};
use uuid::Uuid;

const GUID_LEN: usize = 16;

pub fn from_hex(value: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(value.trim())?)
}

pub fn from_base64(value: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(value.trim())?)
}

pub trait BytesExt {
    fn to_hex(&self) -> String;
    fn to_base64(&self) -> String;
    fn to_utf8(&self) -> Result<String>;
    fn to_utf8_lossy(&self) -> String;
    fn md5_hex(&self) -> String;
    fn sha256_hex(&self) -> String;
    fn gzip(&self) -> Result<Vec<u8>>;
    fn gunzip(&self) -> Result<Vec<u8>>;
    fn deflate(&self) -> Result<Vec<u8>>;
    fn inflate(&self) -> Result<Vec<u8>>;
    fn encrypt_aes(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>>;
    fn decrypt_aes(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>>;
    /// XOR with `key`, repeating the key as needed. An empty key returns a copy.
    fn xor_with(&self, key: &[u8]) -> Vec<u8>;
    /// Packs every 16 bytes into one GUID.
    fn to_guids(&self) -> Result<Vec<Uuid>>;
    fn size_human(&self) -> String;
}

impl BytesExt for [u8] {
    fn to_hex(&self) -> String {
        hex::encode(self)
    }

    fn to_base64(&self) -> String {
        STANDARD.encode(self)
    }

    fn to_utf8(&self) -> Result<String> {
        Ok(String::from_utf8(self.to_vec())?)
    }

    fn to_utf8_lossy(&self) -> String {
        String::from_utf8_lossy(self).into_owned()
    }

    fn md5_hex(&self) -> String {
        hex::encode(Md5::digest(self))
    }

    fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(self))
    }

    fn gzip(&self) -> Result<Vec<u8>> {
        let level = Compression::new(Settings::current().compression.level);
        let mut encoder = GzEncoder::new(Vec::new(), level);
        encoder.write_all(self)?;
        Ok(encoder.finish()?)
    }

    fn gunzip(&self) -> Result<Vec<u8>> {
        let mut decoded = Vec::new();
        GzDecoder::new(self).read_to_end(&mut decoded)?;
        Ok(decoded)
    }

    fn deflate(&self) -> Result<Vec<u8>> {
        let level = Compression::new(Settings::current().compression.level);
        let mut encoder = DeflateEncoder::new(Vec::new(), level);
        encoder.write_all(self)?;
        Ok(encoder.finish()?)
    }

    fn inflate(&self) -> Result<Vec<u8>> {
        let mut decoded = Vec::new();
        DeflateDecoder::new(self).read_to_end(&mut decoded)?;
        Ok(decoded)
    }

    fn encrypt_aes(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        cipher::encrypt(self, key, iv)
    }

    fn decrypt_aes(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        cipher::decrypt(self, key, iv)
    }

    fn xor_with(&self, key: &[u8]) -> Vec<u8> {
        if key.is_empty() {
            return self.to_vec();
        }
        self.iter()
            .zip(key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect()
    }

    fn to_guids(&self) -> Result<Vec<Uuid>> {
        validate_length_multiple("bytes", self.len(), GUID_LEN)?;
        self.chunks_exact(GUID_LEN)
            .map(|chunk| Uuid::from_slice(chunk).map_err(ExtError::from))
            .collect()
    }

    fn size_human(&self) -> String {
        format_file_size(self.len() as f64)
    }
}
