use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

///
/// ObjectRef
///
/// A shared, type-erased reference to a heap object.
///
/// Cloning shares the allocation, and equality is pointer identity, so a
/// reference moved through a `Value` still points at the original object.
///

#[derive(Clone)]
pub struct ObjectRef {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ObjectRef {
    #[must_use]
    pub fn new<T>(object: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: object,
            type_name: type_name::<T>(),
        }
    }

    /// Full type name of the referenced object.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Shared handle to the object when it is a `T`.
    #[must_use]
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef<{}>({:p})", self.type_name, Arc::as_ptr(&self.inner))
    }
}
