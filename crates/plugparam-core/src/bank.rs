//! Keyed, insertion-ordered parameter container.
//!
//! A plugin's parameters live in a [`ParamBank`] keyed by a strongly-typed
//! identifier, usually a fieldless enum. Positions are dense and follow
//! insertion order, which is what the index-based [`HostParams`](crate::HostParams)
//! view exposes to a host. Application code addresses parameters by key.
//!
//! # Example
//!
//! ```rust
//! use plugparam_core::{ParamBank, Parameter};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Param {
//!     Gain,
//!     Cutoff,
//! }
//!
//! let mut bank = ParamBank::new();
//! bank.insert(Param::Gain, Parameter::builder().name("Gain").range(-60.0, 12.0).build().unwrap());
//! bank.insert(Param::Cutoff, Parameter::builder().name("Cutoff").range(20.0, 20000.0).build().unwrap());
//!
//! bank.get_mut(&Param::Gain).unwrap().set_actual(0.0).unwrap();
//! assert_eq!(bank.index_of(&Param::Cutoff), Some(1));
//! ```
//!
//! Lookups scan the entries (O(n)). Parameter sets are small, and the dense
//! layout keeps index access O(1) for the host path.

use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::parameter::Parameter;

/// Dense mapping from parameter key to [`Parameter`], in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBank<K> {
    entries: Vec<(K, Parameter)>,
}

impl<K> ParamBank<K> {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty bank with room for `capacity` parameters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bank holds no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key at the given position.
    #[inline]
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.entries.get(index).map(|(k, _)| k)
    }

    /// Parameter at the given position.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&Parameter> {
        self.entries.get(index).map(|(_, p)| p)
    }

    /// Mutable parameter at the given position.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.entries.get_mut(index).map(|(_, p)| p)
    }

    /// Iterates `(key, parameter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Parameter)> {
        self.entries.iter().map(|(k, p)| (k, p))
    }

    /// Iterates `(key, parameter)` pairs mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut Parameter)> {
        self.entries.iter_mut().map(|(k, p)| (&*k, p))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns every parameter to its default value.
    pub fn reset_all(&mut self) {
        for (_, param) in &mut self.entries {
            param.reset();
        }
    }
}

impl<K: PartialEq> ParamBank<K> {
    /// Inserts a parameter under `key`.
    ///
    /// An existing entry for the key is replaced in place (its position is
    /// kept) and returned.
    pub fn insert(&mut self, key: K, param: Parameter) -> Option<Parameter> {
        match self.index_of(&key) {
            Some(index) => Some(core::mem::replace(&mut self.entries[index].1, param)),
            None => {
                self.entries.push((key, param));
                None
            }
        }
    }

    /// Position of `key`, if present.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().position(|(k, _)| k.borrow() == key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.index_of(key).is_some()
    }

    /// Parameter stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&Parameter>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.index_of(key).and_then(|i| self.at(i))
    }

    /// Mutable parameter stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Parameter>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.index_of(key).and_then(move |i| self.at_mut(i))
    }
}

impl<K> Default for ParamBank<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> FromIterator<(K, Parameter)> for ParamBank<K> {
    fn from_iter<I: IntoIterator<Item = (K, Parameter)>>(iter: I) -> Self {
        let mut bank = Self::new();
        bank.extend(iter);
        bank
    }
}

impl<K: PartialEq> Extend<(K, Parameter)> for ParamBank<K> {
    fn extend<I: IntoIterator<Item = (K, Parameter)>>(&mut self, iter: I) {
        for (key, param) in iter {
            self.insert(key, param);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Id {
        Gain,
        Mix,
        Tone,
    }

    fn param(name: &str, min: f32, max: f32) -> Parameter {
        Parameter::builder()
            .name(name)
            .range(min, max)
            .build()
            .unwrap()
    }

    #[test]
    fn preserves_insertion_order() {
        let bank: ParamBank<Id> = [
            (Id::Tone, param("Tone", 0.0, 1.0)),
            (Id::Gain, param("Gain", -60.0, 12.0)),
            (Id::Mix, param("Mix", 0.0, 100.0)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = bank.keys().copied().collect();
        assert_eq!(keys, [Id::Tone, Id::Gain, Id::Mix]);
        assert_eq!(bank.index_of(&Id::Gain), Some(1));
        assert_eq!(bank.key_at(2), Some(&Id::Mix));
        assert_eq!(bank.at(0).map(Parameter::name), Some("Tone"));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut bank = ParamBank::new();
        assert!(bank.insert(Id::Gain, param("Gain", 0.0, 1.0)).is_none());
        assert!(bank.insert(Id::Mix, param("Mix", 0.0, 1.0)).is_none());

        let old = bank.insert(Id::Gain, param("Level", -1.0, 1.0));
        assert_eq!(old.map(|p| p.name().to_string()), Some("Gain".to_string()));
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.index_of(&Id::Gain), Some(0));
        assert_eq!(bank.get(&Id::Gain).unwrap().name(), "Level");
    }

    #[test]
    fn missing_keys() {
        let mut bank = ParamBank::new();
        bank.insert(Id::Gain, param("Gain", 0.0, 1.0));
        assert!(bank.get(&Id::Tone).is_none());
        assert!(bank.get_mut(&Id::Tone).is_none());
        assert!(!bank.contains_key(&Id::Tone));
        assert!(bank.at(5).is_none());
    }

    #[test]
    fn string_keys_look_up_by_str() {
        let mut bank: ParamBank<String> = ParamBank::new();
        bank.insert("gain".to_string(), param("Gain", -20.0, 20.0));

        let gain = bank.get_mut("gain").unwrap();
        assert_eq!(gain.set_actual(10.0).unwrap(), 0.75);
        assert!(bank.contains_key("gain"));
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut bank = ParamBank::new();
        bank.insert(Id::Gain, param("Gain", -20.0, 20.0));
        bank.insert(Id::Mix, param("Mix", 0.0, 100.0));

        for (_, p) in bank.iter_mut() {
            p.set_normalized(1.0).unwrap();
        }
        bank.reset_all();

        assert!(bank.iter().all(|(_, p)| p.normalized() == 0.0));
    }

    #[test]
    fn empty_bank() {
        let bank: ParamBank<Id> = ParamBank::default();
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
        assert_eq!(ParamBank::<Id>::with_capacity(8).len(), 0);
    }
}
