//! Run state: the variable [`Scope`], the [`AliasTable`] behind `ejkey` /
//! `ejprint`, and the [`Context`] that owns both for the length of one run.

use crate::value::Value;
use log::debug;
use phf::phf_ordered_map;
use std::collections::HashMap;

/// Aliases every fresh [`AliasTable`] starts with.
pub static DEFAULT_ALIASES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "love"    => "😍",
    "santa"   => "🎅",
    "slipe"   => "💤",
    "angry"   => "🤬",
    "pumpkin" => "🎃",
};

/// Variable table for one run.  Assignment adds or overwrites; nothing is
/// ever removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    values: HashMap<String, Value>,
}

impl Scope {
    pub fn define(&mut self, name: &str, value: Value) {
        debug!("Scope: {} = {}", name, value);
        self.values.insert(name.to_string(), value);
    }

    /// `None` only when the name was never assigned; a stored `0` or `""` is
    /// still present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Key → display string table behind `ejkey` / `ejprint`.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// A table seeded with [`DEFAULT_ALIASES`].
    pub fn new() -> Self {
        let entries: HashMap<String, String> = DEFAULT_ALIASES
            .entries()
            .map(|(key, glyph)| (key.to_string(), glyph.to_string()))
            .collect();

        Self { entries }
    }

    pub fn define(&mut self, key: String, value: String) {
        debug!("Alias: {} -> {}", key, value);
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

/// All mutable state of one run, threaded by `&mut` through evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    scope: Scope,
    aliases: AliasTable,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }
}
