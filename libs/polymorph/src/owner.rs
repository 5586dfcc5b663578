//! Owner references and the registry of owner kinds

use crate::error::MorphError;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Loose reference to the entity owning an alert/report row.
///
/// `kind` is the discriminator stored in `owner_type`, `id` the key within
/// that kind's table. No database constraint can span the heterogeneous
/// owner tables, so references are checked against a [`KindRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerRef {
    pub kind: String,
    pub id: i64,
}

impl OwnerRef {
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// Domain type that can own polymorphic rows.
///
/// `RETAIN_ON_DELETE` lists the cascades (by name, e.g. `"alerts"`) that must
/// NOT run when an instance is deleted.
pub trait Morph {
    /// Discriminator stored in `owner_type`
    const KIND: &'static str;
    /// Table holding the owner rows
    const TABLE: &'static str;
    /// Key column of `TABLE`
    const KEY_COLUMN: &'static str = "id";
    /// Cascades this kind opts out of
    const RETAIN_ON_DELETE: &'static [&'static str] = &[];

    /// Key of this instance within `TABLE`
    fn key(&self) -> i64;

    fn owner_ref(&self) -> OwnerRef {
        OwnerRef::new(Self::KIND, self.key())
    }
}

/// Registered owner kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindEntry {
    pub kind: String,
    pub table: String,
    pub key_column: String,
    pub retain_on_delete: BTreeSet<String>,
}

impl KindEntry {
    pub fn new(kind: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            table: table.into(),
            key_column: "id".to_string(),
            retain_on_delete: BTreeSet::new(),
        }
    }

    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = column.into();
        self
    }

    pub fn retaining(mut self, cascade: impl Into<String>) -> Self {
        self.retain_on_delete.insert(cascade.into());
        self
    }

    /// Whether the named cascade runs when an owner of this kind is deleted
    pub fn cascades(&self, name: &str) -> bool {
        !self.retain_on_delete.contains(name)
    }
}

/// Known owner kinds, keyed by discriminator
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: HashMap<String, KindEntry>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `Morph` type (replaces an existing entry of the same kind)
    pub fn register<T: Morph>(&mut self) -> &mut Self {
        let mut entry = KindEntry::new(T::KIND, T::TABLE).with_key_column(T::KEY_COLUMN);
        for cascade in T::RETAIN_ON_DELETE {
            entry = entry.retaining(*cascade);
        }
        self.register_kind(entry)
    }

    pub fn register_kind(&mut self, entry: KindEntry) -> &mut Self {
        tracing::debug!(kind = %entry.kind, table = %entry.table, "registering owner kind");
        self.kinds.insert(entry.kind.clone(), entry);
        self
    }

    /// Builder form of [`KindRegistry::register`]
    pub fn with<T: Morph>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn get(&self, kind: &str) -> Option<&KindEntry> {
        self.kinds.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Check an owner reference against the registry
    pub fn validate(&self, owner: &OwnerRef) -> Result<&KindEntry, MorphError> {
        self.kinds.get(&owner.kind).ok_or_else(|| {
            tracing::warn!(owner = %owner, "owner reference with unregistered kind");
            MorphError::UnknownKind {
                kind: owner.kind.clone(),
            }
        })
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}
