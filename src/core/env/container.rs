// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<EnvData>
//! clone shares Arc until the first set()/remove() (Arc::make_mut)
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use super::types::{EnvData, Platform};

/// Name of the search path variable.
pub const PATH_VAR: &str = "PATH";

/// A set of environment variables for one platform, with copy-on-write
/// semantics.
///
/// Clones share storage until one of them is modified, so a clone can never
/// observe writes made through another.
#[derive(Debug, Clone)]
pub struct Env {
    data: Arc<EnvData>,
}

impl Env {
    /// Creates an empty environment for `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            data: Arc::new(EnvData::new(platform)),
        }
    }

    /// Creates an environment for the current platform from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self::from_vars(Platform::current(), vars)
    }

    /// Creates an environment for `platform` from name/value pairs.
    ///
    /// Names are kept as given; a later pair with the exact same name
    /// overwrites an earlier one.
    pub fn from_vars<I, K, V>(platform: Platform, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = EnvData::new(platform);
        data.vars_mut()
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self {
            data: Arc::new(data),
        }
    }

    /// Platform this environment is laid out for.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.data.platform()
    }

    /// Sets an environment variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.data)
            .vars_mut()
            .insert(key.into(), value.into());
        self
    }

    /// Gets an environment variable value. Names match exactly.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.vars().get(key).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        Arc::make_mut(&mut self.data).vars_mut().remove(key);
        self
    }

    /// Name of the variable holding the search path.
    ///
    /// On Windows an existing `Path` (or any other casing of `PATH`) is
    /// reused, preferring an exact `PATH`. Everywhere else, and when no such
    /// variable exists, this is [`PATH_VAR`].
    #[must_use]
    pub fn search_path_key(&self) -> &str {
        let vars = self.data.vars();
        if !self.platform().folds_case() || vars.contains_key(PATH_VAR) {
            return PATH_VAR;
        }
        vars.keys()
            .find(|k| k.eq_ignore_ascii_case(PATH_VAR))
            .map_or(PATH_VAR, String::as_str)
    }

    /// Returns the search path, if set.
    #[must_use]
    pub fn search_path(&self) -> Option<&str> {
        self.get(self.search_path_key())
    }

    /// Prepends a directory to the search path, rewriting it under its
    /// existing name.
    ///
    /// A missing or empty search path becomes just `dir`, so no empty entry
    /// (which would mean "current directory" to the loader) is introduced.
    pub fn prepend_path(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        let dir = dir.as_ref().to_string_lossy();
        let separator = self.platform().path_separator();

        let value = match self.search_path() {
            Some(current) if !current.is_empty() => format!("{dir}{separator}{current}"),
            _ => dir.into_owned(),
        };
        let key = self.search_path_key().to_owned();
        self.set(key, value)
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }

    /// Returns true if both environments share the same storage.
    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Serialize for Env {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
