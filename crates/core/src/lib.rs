//! `scalarvo-core` — interned, immutable value objects over primitive scalars.
//!
//! A [`ValueObjectStore`] hands out one shared [`ValueObject`] per
//! `(declared type, scalar kind, scalar value)`, so two handles for the same
//! value under the same [`DeclaredType`] are the same instance:
//!
//! ```
//! use scalarvo_core::{DeclaredType, ScalarValue, ValueObjectRef, ValueObjectStore};
//!
//! let store = ValueObjectStore::new();
//! let base = DeclaredType::base();
//!
//! let one = store.instance(&base, 1).unwrap();
//! let one_again = store.instance(&base, 1).unwrap();
//! let text_one = store.instance(&base, "1").unwrap();
//!
//! assert!(ValueObjectRef::ptr_eq(&one, &one_again));
//! assert_ne!(one, text_one);
//! assert_eq!(one.value(), &ScalarValue::Int(1));
//! assert!(store.instance(&base, serde_json::json!([])).is_err());
//! ```
//!
//! This crate contains no IO; the instance table is purely in-memory.

pub mod config;
pub mod declared;
pub mod error;
pub mod key;
pub mod scalar;
pub mod store;
pub mod validate;
pub mod value_object;

pub use config::StoreConfig;
pub use declared::DeclaredType;
pub use error::{ValueObjectError, ValueObjectResult};
pub use key::CacheKey;
pub use scalar::{ScalarKind, ScalarValue};
pub use store::ValueObjectStore;
pub use validate::{RawValue, validate};
pub use value_object::{ValueObject, ValueObjectRef};
