mod value;

pub use value::*;

use crate::{error::AccessError, model::BeanType, value::Value};
use std::fmt::Display;

// ============================================================================
// BEAN CONTRACTS
// ============================================================================
//
// A bean is a struct whose fields are registered at compile time. The
// static half (`BeanSchema`) describes the type; the object-safe half
// (`Bean`) reaches into one instance, one inheritance level at a time.
//

///
/// BeanSchema
///
/// Compile-time descriptor table for a bean type.
///

pub trait BeanSchema {
    const BEAN_TYPE: &'static BeanType;
}

///
/// Bean
///
/// Instance access for one level of a bean's inheritance chain.
///
/// The `*_declared` and `invoke_*` methods only see what this level itself
/// declares; walking to parents is the introspector's job. Implementations
/// are normally generated by `#[derive(Bean)]`.
///

pub trait Bean {
    /// Descriptor table of this level.
    fn bean_type(&self) -> &'static BeanType;

    /// The embedded parent level, if any.
    fn parent(&self) -> Option<&dyn Bean> {
        None
    }

    fn parent_mut(&mut self) -> Option<&mut dyn Bean> {
        None
    }

    /// Read a field declared on this level.
    fn read_declared(&self, field: &str) -> Result<Value, AccessError>;

    /// Write a field declared on this level.
    fn write_declared(&mut self, field: &str, value: Value) -> Result<(), AccessError>;

    /// Invoke a getter registered on this level.
    fn invoke_getter(&self, accessor: &str) -> Result<Value, AccessError> {
        Err(AccessError::no_such_accessor(self.bean_type().name, accessor))
    }

    /// Invoke a setter registered on this level.
    fn invoke_setter(&mut self, accessor: &str, value: Value) -> Result<(), AccessError> {
        let _ = value;

        Err(AccessError::no_such_accessor(self.bean_type().name, accessor))
    }
}

///
/// SetterOutcome
///
/// Normalizes what a setter returns. Plain and fluent setters always
/// succeed; a `Result` setter surfaces its error text as an invocation
/// failure.
///

pub trait SetterOutcome {
    fn into_outcome(self) -> Result<(), String>;
}

impl SetterOutcome for () {
    fn into_outcome(self) -> Result<(), String> {
        Ok(())
    }
}

impl<T: ?Sized> SetterOutcome for &mut T {
    fn into_outcome(self) -> Result<(), String> {
        Ok(())
    }
}

impl<E: Display> SetterOutcome for Result<(), E> {
    fn into_outcome(self) -> Result<(), String> {
        self.map_err(|err| err.to_string())
    }
}
