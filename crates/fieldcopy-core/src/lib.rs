//! Core runtime for fieldcopy: bean descriptor tables, dynamic values, the
//! field introspector, copy options, and the copy engine.
#![warn(unreachable_pub)]

// lets `#[derive(Bean)]` output (which names `::fieldcopy::…`) compile in our own tests
extern crate self as fieldcopy;

pub mod copy;
pub mod error;
pub mod introspect;
pub mod model;
pub mod options;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{AccessError, CopyError};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        copy::{
            BeanCopier, bean_to_map, bean_to_map_with, copy_properties, copy_properties_ignoring,
            copy_properties_with,
        },
        model::{BeanType, FieldDescriptor},
        options::CopyOptions,
        traits::{Bean, BeanSchema, FieldValue},
        value::Value,
    };
}
