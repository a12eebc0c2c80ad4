//! Instance interner.
//!
//! The store is the only code path that constructs [`ValueObject`]s. It keeps
//! at most one instance per [`CacheKey`] and never removes one, so a handle it
//! returns stays canonical for as long as the store lives.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::StoreConfig;
use crate::declared::DeclaredType;
use crate::error::{ValueObjectError, ValueObjectResult};
use crate::key::CacheKey;
use crate::scalar::ScalarValue;
use crate::validate::{RawValue, validate};
use crate::value_object::{ValueObject, ValueObjectRef};

struct Table {
    /// First descriptor seen for each declared-type path.
    types: HashMap<Arc<str>, DeclaredType>,
    instances: HashMap<CacheKey, ValueObjectRef>,
}

impl Table {
    fn check_declared_type(&self, declared_type: &DeclaredType) -> ValueObjectResult<bool> {
        match self.types.get(declared_type.path()) {
            Some(existing) if existing == declared_type => Ok(true),
            Some(_) => Err(conflicting_declaration(declared_type)),
            None => Ok(false),
        }
    }
}

fn conflicting_declaration(declared_type: &DeclaredType) -> ValueObjectError {
    tracing::warn!(
        declared_type = %declared_type,
        "rejected second declaration of an existing declared type"
    );
    ValueObjectError::invalid_operation(format!(
        "declared type '{declared_type}' is already registered by a different descriptor"
    ))
}

/// Interning store for value objects.
///
/// Shared across threads by reference; lookup-or-insert runs under the table's
/// write lock so racing callers on an unseen key all receive the winning
/// instance.
pub struct ValueObjectStore {
    table: RwLock<Table>,
    config: StoreConfig,
    growth_warned: AtomicBool,
}

impl Default for ValueObjectStore {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

impl ValueObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let table = Table {
            types: HashMap::new(),
            instances: HashMap::with_capacity(config.initial_capacity),
        };
        Self {
            table: RwLock::new(table),
            config,
            growth_warned: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Canonical instance of `declared_type` for a raw input.
    ///
    /// Fails with `InvalidValue` for sequences, structured values and anything
    /// the declared type's refinements reject; the table is not touched then.
    pub fn instance(
        &self,
        declared_type: &DeclaredType,
        raw: impl Into<RawValue>,
    ) -> ValueObjectResult<ValueObjectRef> {
        let raw: RawValue = raw.into();
        let value = validate(&raw)?;
        self.scalar_instance(declared_type, value)
    }

    /// Canonical instance of `declared_type` for an already-typed scalar.
    ///
    /// The declared type's refinements still run.
    pub fn scalar_instance(
        &self,
        declared_type: &DeclaredType,
        value: ScalarValue,
    ) -> ValueObjectResult<ValueObjectRef> {
        let value = declared_type.normalize(value)?;
        self.intern(declared_type, value)
    }

    /// Like [`instance`](Self::instance), with `check` run on the normalized
    /// scalar before anything is interned.
    ///
    /// Typed wrappers use this to enforce a payload shape the whole lineage
    /// must preserve; a failed check leaves the table untouched.
    pub fn instance_checked<C>(
        &self,
        declared_type: &DeclaredType,
        raw: impl Into<RawValue>,
        check: C,
    ) -> ValueObjectResult<ValueObjectRef>
    where
        C: FnOnce(&ScalarValue) -> ValueObjectResult<()>,
    {
        let raw: RawValue = raw.into();
        let value = declared_type.normalize(validate(&raw)?)?;
        check(&value)?;
        self.intern(declared_type, value)
    }

    fn intern(&self, declared_type: &DeclaredType, value: ScalarValue) -> ValueObjectResult<ValueObjectRef> {
        let key = CacheKey::new(declared_type, &value);

        {
            let table = self.read();
            if table.check_declared_type(declared_type)? {
                if let Some(existing) = table.instances.get(&key) {
                    return Ok(existing.clone());
                }
            }
        }

        let mut table = self.write();
        if !table.check_declared_type(declared_type)? {
            tracing::debug!(declared_type = %declared_type, "registered declared type");
            table
                .types
                .insert(declared_type.shared_path(), declared_type.clone());
        }

        let instance = match table.instances.entry(key) {
            Entry::Occupied(slot) => slot.get().clone(),
            Entry::Vacant(slot) => {
                tracing::debug!(key = %slot.key(), "interned value object");
                let created = ValueObjectRef::new(ValueObject::new(declared_type.clone(), value));
                slot.insert(created).clone()
            }
        };

        let len = table.instances.len();
        drop(table);
        self.note_growth(len);

        Ok(instance)
    }

    /// Existing instance for an already-normalized scalar, without inserting.
    pub fn get(&self, declared_type: &DeclaredType, value: &ScalarValue) -> Option<ValueObjectRef> {
        let table = self.read();
        match table.check_declared_type(declared_type) {
            Ok(true) => table.instances.get(&CacheKey::new(declared_type, value)).cloned(),
            _ => None,
        }
    }

    /// Number of interned instances across all declared types.
    pub fn len(&self) -> usize {
        self.read().instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of declared types that have interned at least one value.
    pub fn declared_types(&self) -> usize {
        self.read().types.len()
    }

    fn note_growth(&self, len: usize) {
        let Some(limit) = self.config.warn_after else {
            return;
        };
        if len > limit && !self.growth_warned.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                instances = len,
                limit,
                "value object table exceeded its expected size; instances are never evicted"
            );
        }
    }

    // Insert-only: a poisoned table is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for ValueObjectStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let table = self.read();
        f.debug_struct("ValueObjectStore")
            .field("instances", &table.instances.len())
            .field("declared_types", &table.types.len())
            .field("config", &self.config)
            .finish()
    }
}
