//! Declared types: the namespace a value is interned under.
//!
//! A declared type is a descriptor rather than a class: a name, an optional
//! parent, and an optional refinement step. Refining a type composes its
//! parent's normalization with one more function, and always produces a new
//! cache namespace, however deep the lineage.

use std::sync::{Arc, LazyLock};

use crate::error::ValueObjectResult;
use crate::scalar::ScalarValue;

/// Name of the root declared type.
pub const BASE_TYPE_NAME: &str = "ValueObject";

const PATH_SEPARATOR: char = '/';
const PATH_ESCAPE: char = '\\';

type Refinement = Arc<dyn Fn(ScalarValue) -> ValueObjectResult<ScalarValue> + Send + Sync>;

static BASE: LazyLock<DeclaredType> = LazyLock::new(|| DeclaredType {
    inner: Arc::new(Descriptor {
        name: BASE_TYPE_NAME.to_string(),
        path: Arc::from(BASE_TYPE_NAME),
        depth: 0,
        parent: None,
        refinement: None,
    }),
});

struct Descriptor {
    name: String,
    path: Arc<str>,
    depth: usize,
    parent: Option<DeclaredType>,
    refinement: Option<Refinement>,
}

/// Shared handle to a declared-type descriptor.
///
/// Two handles are equal only if they point at the same descriptor.
#[derive(Clone)]
pub struct DeclaredType {
    inner: Arc<Descriptor>,
}

impl DeclaredType {
    /// The root type every lineage starts from.
    pub fn base() -> Self {
        BASE.clone()
    }

    /// Derive a type that applies `refinement` after this type's own rules.
    ///
    /// The refinement may reject (returning `InvalidValue`) or normalize the
    /// scalar, e.g. turn the text `"5"` into the integer `5`.
    pub fn refine<F>(&self, name: impl Into<String>, refinement: F) -> Self
    where
        F: Fn(ScalarValue) -> ValueObjectResult<ScalarValue> + Send + Sync + 'static,
    {
        self.child(name.into(), Some(Arc::new(refinement)))
    }

    /// Derive a type with no additional rules.
    pub fn extend(&self, name: impl Into<String>) -> Self {
        self.child(name.into(), None)
    }

    fn child(&self, name: String, refinement: Option<Refinement>) -> Self {
        let mut path = String::with_capacity(self.inner.path.len() + 1 + name.len());
        path.push_str(&self.inner.path);
        path.push(PATH_SEPARATOR);
        push_escaped_segment(&mut path, &name);
        Self {
            inner: Arc::new(Descriptor {
                name,
                path: Arc::from(path),
                depth: self.inner.depth + 1,
                parent: Some(self.clone()),
                refinement,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Lineage-qualified identifier, e.g. `ValueObject/PositiveInt`.
    ///
    /// Separators and escapes inside a name are escaped, so `extend("A/B")`
    /// and `extend("A").extend("B")` never share a path.
    pub fn path(&self) -> &str {
        &self.inner.path
    }

    pub(crate) fn shared_path(&self) -> Arc<str> {
        Arc::clone(&self.inner.path)
    }

    pub fn parent(&self) -> Option<&DeclaredType> {
        self.inner.parent.as_ref()
    }

    /// Number of refinement steps between this type and the root.
    pub fn depth(&self) -> usize {
        self.inner.depth
    }

    pub fn is_base(&self) -> bool {
        self.inner.parent.is_none()
    }

    /// Whether `self` is `ancestor` or derives from it.
    pub fn descends_from(&self, ancestor: &DeclaredType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == ancestor {
                return true;
            }
            current = ty.parent();
        }
        false
    }

    /// Run every refinement in the lineage, root first.
    pub fn normalize(&self, value: ScalarValue) -> ValueObjectResult<ScalarValue> {
        let value = match &self.inner.parent {
            Some(parent) => parent.normalize(value)?,
            None => value,
        };
        match &self.inner.refinement {
            Some(refine) => refine(value),
            None => Ok(value),
        }
    }
}

fn push_escaped_segment(path: &mut String, name: &str) {
    for c in name.chars() {
        if c == PATH_SEPARATOR || c == PATH_ESCAPE {
            path.push(PATH_ESCAPE);
        }
        path.push(c);
    }
}

impl PartialEq for DeclaredType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for DeclaredType {}

impl core::fmt::Debug for DeclaredType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("DeclaredType").field(&self.path()).finish()
    }
}

impl core::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}
