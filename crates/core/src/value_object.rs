//! Value object: an immutable, interned wrapper around one scalar.
//!
//! Value objects have **no identity of their own** - they are defined by their
//! declared type and their scalar. Because every instance is interned by a
//! [`ValueObjectStore`](crate::store::ValueObjectStore), equal values of the
//! same declared type are the *same* instance, so identity comparison doubles as
//! value comparison.
//!
//! ## Immutability
//!
//! `ValueObject` has private fields, no setters and no public constructor.
//! There is nothing to mutate and no attribute to invent:
//!
//! ```compile_fail
//! use scalarvo_core::{DeclaredType, ValueObjectStore};
//!
//! let store = ValueObjectStore::new();
//! let vo = store.instance(&DeclaredType::base(), 1).unwrap();
//! vo.value = 2.into();
//! ```
//!
//! ## No duplication
//!
//! `ValueObject` does not implement `Clone`. Cloning a [`ValueObjectRef`]
//! copies the handle, never the instance:
//!
//! ```compile_fail
//! use scalarvo_core::{DeclaredType, ValueObject, ValueObjectStore};
//!
//! let store = ValueObjectStore::new();
//! let vo = store.instance(&DeclaredType::base(), 1).unwrap();
//! let copy: ValueObject = (*vo).clone();
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::declared::DeclaredType;
use crate::scalar::{ScalarKind, ScalarValue};

/// The canonical instance for one `(declared type, scalar)` pair.
pub struct ValueObject {
    declared_type: DeclaredType,
    value: ScalarValue,
}

impl ValueObject {
    pub(crate) fn new(declared_type: DeclaredType, value: ScalarValue) -> Self {
        Self {
            declared_type,
            value,
        }
    }

    /// The validated (and possibly normalized) payload.
    pub fn value(&self) -> &ScalarValue {
        &self.value
    }

    pub fn kind(&self) -> ScalarKind {
        self.value.kind()
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }
}

impl core::fmt::Display for ValueObject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.value, f)
    }
}

impl core::fmt::Debug for ValueObject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValueObject")
            .field("declared_type", &self.declared_type.path())
            .field("value", &self.value)
            .finish()
    }
}

impl Serialize for ValueObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Shared, non-owning handle to an interned [`ValueObject`].
///
/// Equality and hashing are by instance identity.
#[derive(Clone)]
pub struct ValueObjectRef(Arc<ValueObject>);

impl ValueObjectRef {
    pub(crate) fn new(instance: ValueObject) -> Self {
        Self(Arc::new(instance))
    }

    /// Whether both handles point at the same instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for ValueObjectRef {
    type Target = ValueObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<ValueObject> for ValueObjectRef {
    fn as_ref(&self) -> &ValueObject {
        &self.0
    }
}

impl PartialEq for ValueObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for ValueObjectRef {}

impl Hash for ValueObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl core::fmt::Display for ValueObjectRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&*self.0, f)
    }
}

impl core::fmt::Debug for ValueObjectRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&*self.0, f)
    }
}

impl Serialize for ValueObjectRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
