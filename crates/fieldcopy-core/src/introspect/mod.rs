//! Field discovery, accessor resolution, and per-field reads/writes.
//!
//! Everything here works from the static `BeanType` tables; nothing is
//! cached between calls.

mod index;
mod proxy;


pub use index::FieldIndex;
pub use proxy::{DeclaredProxies, NoProxies, ProxyResolver};

use crate::{
    error::{AccessError, CopyError},
    model::{BeanType, FieldDescriptor},
    traits::Bean,
    value::Value,
};
use fieldcopy_utils::naming;
use std::fmt;

///
/// Accessor
///
/// A getter or setter resolved on a specific level of the chain.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Accessor {
    pub name: &'static str,
    pub field: &'static str,

    /// `BeanType::path` of the level defining the accessor.
    pub defined_on: &'static str,
}

///
/// Introspector
///
/// Walks the emulated inheritance chain of bean types and instances.
/// Proxy detection is delegated to the injected `ProxyResolver`.
///

pub struct Introspector {
    resolver: Box<dyn ProxyResolver>,
}

impl Introspector {
    pub fn new(resolver: impl ProxyResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    #[must_use]
    pub fn is_proxy(&self, ty: &BeanType) -> bool {
        self.resolver.is_proxy(ty)
    }

    /// Strip proxy levels, stopping at the first real type or at a proxy
    /// with nothing underneath.
    #[must_use]
    pub fn unwrap_proxy(&self, mut ty: &'static BeanType) -> &'static BeanType {
        while self.is_proxy(ty) {
            match ty.parent {
                Some(parent) => ty = parent,
                None => break,
            }
        }

        ty
    }

    // ------------------------------------------------------------------
    // fields
    // ------------------------------------------------------------------

    /// Every field declared along the chain, most-derived level first.
    /// Shadowed names appear once per declaring level.
    #[must_use]
    pub fn list_all_fields(&self, ty: &'static BeanType) -> Vec<&'static FieldDescriptor> {
        self.unwrap_proxy(ty)
            .ancestry()
            .flat_map(|level| level.fields.iter())
            .collect()
    }

    /// Copyable fields by name; ancestors win on shadowing.
    #[must_use]
    pub fn field_index(&self, ty: &'static BeanType) -> FieldIndex {
        FieldIndex::build(self.list_all_fields(ty))
    }

    /// First field named `name` in enumeration order.
    #[must_use]
    pub fn find_field(&self, ty: &'static BeanType, name: &str) -> Option<&'static FieldDescriptor> {
        self.list_all_fields(ty).into_iter().find(|f| f.name == name)
    }

    /// First field named `name` whose declared type is exactly `T`.
    #[must_use]
    pub fn find_field_typed<T: ?Sized + 'static>(
        &self,
        ty: &'static BeanType,
        name: &str,
    ) -> Option<&'static FieldDescriptor> {
        self.list_all_fields(ty)
            .into_iter()
            .find(|f| f.name == name && f.is_type::<T>())
    }

    // ------------------------------------------------------------------
    // accessors
    // ------------------------------------------------------------------

    pub fn find_getter(
        &self,
        ty: &'static BeanType,
        field: &'static FieldDescriptor,
    ) -> Result<Accessor, CopyError> {
        let wanted = naming::getter_name(field.name, field.is_bool());

        self.find_accessor(ty, field, wanted, BeanType::defines_getter)
    }

    pub fn find_setter(
        &self,
        ty: &'static BeanType,
        field: &'static FieldDescriptor,
    ) -> Result<Accessor, CopyError> {
        let wanted = naming::setter_name(field.name);

        self.find_accessor(ty, field, wanted, BeanType::defines_setter)
    }

    fn find_accessor(
        &self,
        ty: &'static BeanType,
        field: &'static FieldDescriptor,
        wanted: String,
        defines: fn(&BeanType, &str) -> Option<&'static str>,
    ) -> Result<Accessor, CopyError> {
        let start = self.unwrap_proxy(ty);

        start
            .ancestry()
            .find_map(|level| {
                defines(level, &wanted).map(|name| Accessor {
                    name,
                    field: field.name,
                    defined_on: level.path,
                })
            })
            .ok_or(CopyError::AccessorNotFound {
                bean: start.name,
                field: field.name,
                accessor: wanted,
            })
    }

    // ------------------------------------------------------------------
    // instance access
    // ------------------------------------------------------------------

    /// Read `field` from `bean`, directly or through its getter.
    pub fn read_field(
        &self,
        bean: &dyn Bean,
        field: &'static FieldDescriptor,
        use_getter: bool,
    ) -> Result<Value, CopyError> {
        if use_getter {
            let getter = self.find_getter(bean.bean_type(), field)?;
            let level = locate(bean, getter.defined_on)
                .ok_or_else(|| AccessError::no_such_accessor(bean.bean_type().name, getter.name))?;

            Ok(level.invoke_getter(getter.name)?)
        } else {
            let level = locate(bean, field.declaring_type)
                .ok_or_else(|| AccessError::no_such_field(bean.bean_type().name, field.name))?;

            Ok(level.read_declared(field.name)?)
        }
    }

    /// Write `value` into `field` on `bean`, directly or through its setter.
    pub fn write_field(
        &self,
        bean: &mut dyn Bean,
        field: &'static FieldDescriptor,
        value: Value,
        use_setter: bool,
    ) -> Result<(), CopyError> {
        let bean_name = bean.bean_type().name;

        if use_setter {
            let setter = self.find_setter(bean.bean_type(), field)?;
            let level = locate_mut(bean, setter.defined_on)
                .ok_or_else(|| AccessError::no_such_accessor(bean_name, setter.name))?;

            Ok(level.invoke_setter(setter.name, value)?)
        } else {
            let level = locate_mut(bean, field.declaring_type)
                .ok_or_else(|| AccessError::no_such_field(bean_name, field.name))?;

            Ok(level.write_declared(field.name, value)?)
        }
    }

    /// Read a field by name. `Ok(None)` when the bean has no such field.
    pub fn read_field_by_name(
        &self,
        bean: &dyn Bean,
        name: &str,
        use_getter: bool,
    ) -> Result<Option<Value>, CopyError> {
        match self.find_field(bean.bean_type(), name) {
            Some(field) => self.read_field(bean, field, use_getter).map(Some),
            None => Ok(None),
        }
    }

    /// Write a field by name. `Ok(false)` when the bean has no such field.
    pub fn write_field_by_name(
        &self,
        bean: &mut dyn Bean,
        name: &str,
        value: Value,
        use_setter: bool,
    ) -> Result<bool, CopyError> {
        match self.find_field(bean.bean_type(), name) {
            Some(field) => self.write_field(bean, field, value, use_setter).map(|()| true),
            None => Ok(false),
        }
    }
}

impl Default for Introspector {
    fn default() -> Self {
        Self::new(DeclaredProxies)
    }
}

impl fmt::Debug for Introspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Introspector").finish_non_exhaustive()
    }
}

// Find the level of `bean` whose type path is `path`.
fn locate<'a>(bean: &'a dyn Bean, path: &str) -> Option<&'a dyn Bean> {
    if bean.bean_type().path == path {
        return Some(bean);
    }

    bean.parent().and_then(|parent| locate(parent, path))
}

fn locate_mut<'a>(bean: &'a mut dyn Bean, path: &str) -> Option<&'a mut dyn Bean> {
    if bean.bean_type().path == path {
        return Some(bean);
    }

    bean.parent_mut().and_then(|parent| locate_mut(parent, path))
}
