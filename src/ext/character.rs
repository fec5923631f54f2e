use crate::utils::error::{ExtError, Result};

const VOWELS: &str = "aeiou";

pub trait CharExt {
    fn is_vowel(self) -> bool;
    fn is_consonant(self) -> bool;
    fn repeat(self, count: usize) -> String;
    /// Numeric value of an ASCII digit.
    fn to_digit_value(self) -> Result<u32>;
    /// 1-based position in the Latin alphabet, case-insensitive.
    fn alphabet_position(self) -> Result<u32>;
    fn toggle_case(self) -> char;
    fn is_any_of(self, set: &str) -> bool;
}

impl CharExt for char {
    fn is_vowel(self) -> bool {
        VOWELS.contains(self.to_ascii_lowercase())
    }

    fn is_consonant(self) -> bool {
        self.is_ascii_alphabetic() && !self.is_vowel()
    }

    fn repeat(self, count: usize) -> String {
        std::iter::repeat(self).take(count).collect()
    }

    fn to_digit_value(self) -> Result<u32> {
        if !self.is_ascii_digit() {
            return Err(ExtError::NotADigitError { value: self });
        }
        Ok(self as u32 - '0' as u32)
    }

    fn alphabet_position(self) -> Result<u32> {
        if !self.is_ascii_alphabetic() {
            return Err(ExtError::NotALetterError { value: self });
        }
        Ok(self.to_ascii_lowercase() as u32 - 'a' as u32 + 1)
    }

    fn toggle_case(self) -> char {
        if self.is_uppercase() {
            self.to_lowercase().next().unwrap_or(self)
        } else if self.is_lowercase() {
            self.to_uppercase().next().unwrap_or(self)
        } else {
            self
        }
    }

    fn is_any_of(self, set: &str) -> bool {
        set.contains(self)
    }
}
