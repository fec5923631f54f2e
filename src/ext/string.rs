use crate::ext::bytes::BytesExt;
use crate::ext::character::CharExt;
use crate::utils::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::LazyLock;
use url::Url;
use uuid::Uuid;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag regex"));

pub trait StrExt {
    fn is_blank(&self) -> bool;
    /// Non-empty and made only of ASCII digits.
    fn is_digits(&self) -> bool;
    /// Parses as a finite floating point number.
    fn is_numeric(&self) -> bool;
    fn is_alpha(&self) -> bool;
    fn is_alphanumeric(&self) -> bool;
    fn is_email(&self) -> bool;
    /// Absolute `http`/`https` URL.
    fn is_url(&self) -> bool;
    fn is_guid(&self) -> bool;
    fn is_ip_address(&self) -> bool;
    /// Compares alphanumeric characters only, ignoring case.
    fn is_palindrome(&self) -> bool;
    fn is_anagram_of(&self, other: &str) -> bool;
    fn contains_ignore_case(&self, needle: &str) -> bool;
    fn equals_ignore_case(&self, other: &str) -> bool;

    fn reverse(&self) -> String;
    /// Keeps the first `max` characters and appends `suffix` when the input is longer.
    fn truncate_to(&self, max: usize, suffix: &str) -> String;
    fn left(&self, count: usize) -> String;
    fn right(&self, count: usize) -> String;
    fn capitalize(&self) -> String;
    fn to_title_case(&self) -> String;
    fn to_camel_case(&self) -> String;
    fn to_pascal_case(&self) -> String;
    fn to_snake_case(&self) -> String;
    fn to_kebab_case(&self) -> String;
    fn to_slug(&self) -> String;
    fn remove_whitespace(&self) -> String;
    fn collapse_whitespace(&self) -> String;
    fn strip_html(&self) -> String;
    /// Replaces all but the last `visible` characters with `mask_char`.
    fn mask(&self, visible: usize, mask_char: char) -> String;
    fn ensure_prefix(&self, prefix: &str) -> String;
    fn ensure_suffix(&self, suffix: &str) -> String;
    fn remove_prefix(&self, prefix: &str) -> String;
    fn remove_suffix(&self, suffix: &str) -> String;

    fn count_occurrences(&self, pattern: &str) -> usize;
    fn word_count(&self) -> usize;
    fn count_vowels(&self) -> usize;

    fn to_base64(&self) -> String;
    fn from_base64(&self) -> Result<String>;
    fn md5_hex(&self) -> String;
    fn sha256_hex(&self) -> String;
    fn parse_or<T: FromStr>(&self, default: T) -> T;
    fn to_date(&self, format: &str) -> Result<NaiveDate>;
    fn to_date_time(&self, format: &str) -> Result<NaiveDateTime>;
    fn to_url(&self) -> Result<Url>;
    fn from_json<T: DeserializeOwned>(&self) -> Result<T>;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn is_digits(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_ascii_digit())
    }

    fn is_numeric(&self) -> bool {
        self.trim()
            .parse::<f64>()
            .map(|v| v.is_finite())
            .unwrap_or(false)
    }

    fn is_alpha(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_alphabetic)
    }

    fn is_alphanumeric(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_alphanumeric)
    }

    fn is_email(&self) -> bool {
        EMAIL_RE.is_match(self)
    }

    fn is_url(&self) -> bool {
        matches!(Url::parse(self), Ok(url) if matches!(url.scheme(), "http" | "https"))
    }

    fn is_guid(&self) -> bool {
        Uuid::parse_str(self.trim()).is_ok()
    }

    fn is_ip_address(&self) -> bool {
        self.trim().parse::<IpAddr>().is_ok()
    }

    fn is_palindrome(&self) -> bool {
        let normalized = normalized_chars(self);
        normalized.iter().eq(normalized.iter().rev())
    }

    fn is_anagram_of(&self, other: &str) -> bool {
        let mut left = normalized_chars(self);
        let mut right = normalized_chars(other);
        left.sort_unstable();
        right.sort_unstable();
        left == right
    }

    fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_lowercase().contains(&needle.to_lowercase())
    }

    fn equals_ignore_case(&self, other: &str) -> bool {
        self.to_lowercase() == other.to_lowercase()
    }

    fn reverse(&self) -> String {
        self.chars().rev().collect()
    }

    fn truncate_to(&self, max: usize, suffix: &str) -> String {
        if self.chars().count() <= max {
            return self.to_string();
        }
        let mut truncated: String = self.chars().take(max).collect();
        truncated.push_str(suffix);
        truncated
    }

    fn left(&self, count: usize) -> String {
        self.chars().take(count).collect()
    }

    fn right(&self, count: usize) -> String {
        let total = self.chars().count();
        self.chars().skip(total.saturating_sub(count)).collect()
    }

    fn capitalize(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn to_title_case(&self) -> String {
        self.split(' ')
            .map(|word| {
                let has_letters = word.chars().any(char::is_alphabetic);
                let all_upper = word
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .all(char::is_uppercase);
                // 全大寫視為縮寫，保留原樣
                if has_letters && all_upper {
                    word.to_string()
                } else {
                    word.to_lowercase().capitalize()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_camel_case(&self) -> String {
        split_words(self)
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    word.to_lowercase().capitalize()
                }
            })
            .collect()
    }

    fn to_pascal_case(&self) -> String {
        split_words(self)
            .iter()
            .map(|word| word.to_lowercase().capitalize())
            .collect()
    }

    fn to_snake_case(&self) -> String {
        join_lowercase(self, "_")
    }

    fn to_kebab_case(&self) -> String {
        join_lowercase(self, "-")
    }

    fn to_slug(&self) -> String {
        let mut slug = String::with_capacity(self.len());
        for c in self.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }

    fn remove_whitespace(&self) -> String {
        self.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn collapse_whitespace(&self) -> String {
        self.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn strip_html(&self) -> String {
        HTML_TAG_RE.replace_all(self, "").to_string()
    }

    fn mask(&self, visible: usize, mask_char: char) -> String {
        let total = self.chars().count();
        if total <= visible {
            return self.to_string();
        }
        let mut masked = mask_char.repeat(total - visible);
        masked.push_str(&self.right(visible));
        masked
    }

    fn ensure_prefix(&self, prefix: &str) -> String {
        if self.starts_with(prefix) {
            self.to_string()
        } else {
            format!("{}{}", prefix, self)
        }
    }

    fn ensure_suffix(&self, suffix: &str) -> String {
        if self.ends_with(suffix) {
            self.to_string()
        } else {
            format!("{}{}", self, suffix)
        }
    }

    fn remove_prefix(&self, prefix: &str) -> String {
        self.strip_prefix(prefix).unwrap_or(self).to_string()
    }

    fn remove_suffix(&self, suffix: &str) -> String {
        self.strip_suffix(suffix).unwrap_or(self).to_string()
    }

    fn count_occurrences(&self, pattern: &str) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        self.matches(pattern).count()
    }

    fn word_count(&self) -> usize {
        self.split_whitespace().count()
    }

    fn count_vowels(&self) -> usize {
        self.chars().filter(|c| c.is_vowel()).count()
    }

    fn to_base64(&self) -> String {
        self.as_bytes().to_base64()
    }

    fn from_base64(&self) -> Result<String> {
        let bytes = STANDARD.decode(self.trim())?;
        Ok(String::from_utf8(bytes)?)
    }

    fn md5_hex(&self) -> String {
        self.as_bytes().md5_hex()
    }

    fn sha256_hex(&self) -> String {
        self.as_bytes().sha256_hex()
    }

    fn parse_or<T: FromStr>(&self, default: T) -> T {
        self.trim().parse().unwrap_or(default)
    }

    fn to_date(&self, format: &str) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(self.trim(), format)?)
    }

    fn to_date_time(&self, format: &str) -> Result<NaiveDateTime> {
        Ok(NaiveDateTime::parse_from_str(self.trim(), format)?)
    }

    fn to_url(&self) -> Result<Url> {
        Ok(Url::parse(self.trim())?)
    }

    fn from_json<T: DeserializeOwned>(&self) -> Result<T> {
        crate::ext::object::from_json(self)
    }
}

fn normalized_chars(value: &str) -> Vec<char> {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn join_lowercase(value: &str, separator: &str) -> String {
    split_words(value)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Splits on non-alphanumeric separators and on case boundaries
/// (`fooBar`, `HTTPServer`, `v2Update`).
fn split_words(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
