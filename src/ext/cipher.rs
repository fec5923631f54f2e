//! AES-CBC with PKCS#7 padding over caller-supplied key and IV.

use crate::utils::error::{ExtError, Result};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub const IV_LEN: usize = 16;

fn invalid_key(key: &[u8], iv: &[u8]) -> ExtError {
    ExtError::CryptoError {
        message: format!(
            "key must be 16, 24 or 32 bytes and IV {} bytes (got key {}, IV {})",
            IV_LEN,
            key.len(),
            iv.len()
        ),
    }
}

pub fn encrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let ciphertext = match key.len() {
        16 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key, iv))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        24 => Aes192CbcEnc::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key, iv))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        32 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key, iv))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        _ => return Err(invalid_key(key, iv)),
    };
    Ok(ciphertext)
}

pub fn decrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let plaintext = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key, iv))?
            .decrypt_padded_vec_mut::<Pkcs7>(data),
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key, iv))?
            .decrypt_padded_vec_mut::<Pkcs7>(data),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key, iv))?
            .decrypt_padded_vec_mut::<Pkcs7>(data),
        _ => return Err(invalid_key(key, iv)),
    };
    plaintext.map_err(|_| ExtError::CryptoError {
        message: "invalid padding: wrong key, IV or corrupted data".to_string(),
    })
}
