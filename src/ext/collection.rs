use crate::utils::error::{ExtError, Result};
use crate::utils::validation::validate_positive_number;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

pub trait SliceExt<T> {
    fn join_to_string(&self, separator: &str) -> String
    where
        T: Display;
    /// Keeps the first element for every distinct key, preserving order.
    fn distinct_by<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K;
    /// 1-based page. Page 0 is treated as page 1; pages past the end are empty.
    fn paginate(&self, page: usize, page_size: usize) -> &[T];
    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;
    fn random_item(&self) -> Option<&T>;
    fn shuffled(&self) -> Vec<T>
    where
        T: Clone;
    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq;
    /// CSV with a header row taken from the element's field names.
    fn to_csv_string(&self) -> Result<String>
    where
        T: Serialize;
}

impl<T> SliceExt<T> for [T] {
    fn join_to_string(&self, separator: &str) -> String
    where
        T: Display,
    {
        self.iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn distinct_by<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(key(item)))
            .cloned()
            .collect()
    }

    fn paginate(&self, page: usize, page_size: usize) -> &[T] {
        let start = (page.max(1) - 1).saturating_mul(page_size);
        if start >= self.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(self.len());
        &self[start..end]
    }

    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        validate_positive_number("chunk_size", size, 1)?;
        Ok(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn random_item(&self) -> Option<&T> {
        self.choose(&mut rand::thread_rng())
    }

    fn shuffled(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = self.to_vec();
        items.shuffle(&mut rand::thread_rng());
        items
    }

    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        items.iter().all(|item| self.contains(item))
    }

    fn to_csv_string(&self) -> Result<String>
    where
        T: Serialize,
    {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for item in self {
            writer.serialize(item)?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| ExtError::IoError(e.into_error()))?;
        Ok(String::from_utf8(data)?)
    }
}

pub trait OptionVecExt {
    fn is_none_or_empty(&self) -> bool;
}

impl<T> OptionVecExt for Option<Vec<T>> {
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().map_or(true, Vec::is_empty)
    }
}

pub trait MapExt<K, V> {
    fn get_or_default(&self, key: &K) -> V
    where
        V: Clone + Default;
    /// Inserts `value` when `key` is absent, otherwise applies `update` to the existing value.
    fn add_or_update<F>(&mut self, key: K, value: V, update: F)
    where
        F: FnOnce(&mut V);
    /// URL-encoded `key=value` pairs sorted by key.
    fn to_query_string(&self) -> String
    where
        K: Display,
        V: Display;
}

impl<K: Eq + Hash, V> MapExt<K, V> for HashMap<K, V> {
    fn get_or_default(&self, key: &K) -> V
    where
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    fn add_or_update<F>(&mut self, key: K, value: V, update: F)
    where
        F: FnOnce(&mut V),
    {
        self.entry(key).and_modify(update).or_insert(value);
    }

    fn to_query_string(&self) -> String
    where
        K: Display,
        V: Display,
    {
        let mut pairs: Vec<(String, String)> = self
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.sort();
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }
}
