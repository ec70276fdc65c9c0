//! Static descriptor tables registered per bean type.

use std::{any::TypeId, fmt};

/// Function-pointer form of `TypeId::of`, usable inside const tables.
#[must_use]
pub fn type_id_of<T: ?Sized + 'static>() -> TypeId {
    TypeId::of::<T>()
}

///
/// BeanType
///
/// One level of a bean's inheritance chain: the fields it declares, the
/// accessor names it defines, and a link to its parent level.
///

pub struct BeanType {
    /// Type identifier as written.
    pub name: &'static str,

    /// Module-qualified path; identifies the level when walking instances.
    pub path: &'static str,

    /// Fields declared on this level, in declaration order.
    pub fields: &'static [FieldDescriptor],

    /// Getter names defined on this level.
    pub getters: &'static [&'static str],

    /// Setter names defined on this level.
    pub setters: &'static [&'static str],

    pub parent: Option<&'static Self>,

    /// Generated wrapper around `parent`; see `introspect::ProxyResolver`.
    pub proxy: bool,
}

impl BeanType {
    /// Iterate this level and every ancestor, most-derived first.
    pub fn ancestry(&'static self) -> impl Iterator<Item = &'static Self> {
        std::iter::successors(Some(self), |ty| ty.parent)
    }

    #[must_use]
    pub fn declared_field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn defines_getter(&self, accessor: &str) -> Option<&'static str> {
        self.getters.iter().copied().find(|g| *g == accessor)
    }

    #[must_use]
    pub fn defines_setter(&self, accessor: &str) -> Option<&'static str> {
        self.setters.iter().copied().find(|s| *s == accessor)
    }

    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl fmt::Debug for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanType")
            .field("path", &self.path)
            .field("fields", &self.fields)
            .field("getters", &self.getters)
            .field("setters", &self.setters)
            .field("parent", &self.parent.map(|p| p.path))
            .field("proxy", &self.proxy)
            .finish()
    }
}

///
/// FieldDescriptor
///
/// A named, typed attribute declared by one bean level.
///

#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,

    /// Declared type as written, whitespace stripped (`Option<String>`).
    pub ty: &'static str,

    pub type_id: fn() -> TypeId,

    /// `BeanType::path` of the declaring level.
    pub declaring_type: &'static str,

    /// Listed but never written by a copy; the analogue of a final field.
    pub readonly: bool,
}

impl FieldDescriptor {
    #[must_use]
    pub fn is_type<T: ?Sized + 'static>(&self) -> bool {
        (self.type_id)() == TypeId::of::<T>()
    }

    /// Exactly `bool`; drives the `is` getter convention.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.is_type::<bool>()
    }

    #[must_use]
    pub const fn is_copyable(&self) -> bool {
        !self.readonly
    }
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.declaring_type == other.declaring_type
    }
}

impl Eq for FieldDescriptor {}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("declaring_type", &self.declaring_type)
            .field("readonly", &self.readonly)
            .finish()
    }
}
