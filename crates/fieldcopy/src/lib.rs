//! ## Crate layout
//! - `core`: bean descriptor tables, values, the introspector, and the copy engine.
//! - `utils`: the accessor naming convention shared with the derive macro.
//! - `Bean`: the derive that registers a struct's fields at compile time.
//!
//! The top-level modules re-export `core` so generated code can name
//! `::fieldcopy::traits`, `::fieldcopy::model` and friends.

pub use fieldcopy_core as core;
pub use fieldcopy_utils as utils;

pub use fieldcopy_core::{copy, error, introspect, model, options, traits, value};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use fieldcopy_derive::Bean;

//
// Operations
//

pub use fieldcopy_core::{
    AccessError, CopyError,
    copy::{
        BeanCopier, FieldMap, bean_to_map, bean_to_map_with, copy_properties,
        copy_properties_ignoring, copy_properties_with,
    },
    options::CopyOptions,
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::Bean;
    pub use fieldcopy_core::prelude::*;
}
