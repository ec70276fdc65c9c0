//! Property copying between beans and bean → map flattening.

mod map;


pub use map::FieldMap;

use crate::{
    error::CopyError,
    introspect::Introspector,
    model::FieldDescriptor,
    options::CopyOptions,
    traits::Bean,
};
use tracing::{debug, trace};

///
/// BeanCopier
///
/// Copies same-named (or mapped) fields from a source bean into a target
/// bean. Holds no state beyond its introspector; every call works from
/// the static descriptor tables.
///

#[derive(Debug, Default)]
pub struct BeanCopier {
    introspector: Introspector,
}

impl BeanCopier {
    #[must_use]
    pub const fn new(introspector: Introspector) -> Self {
        Self { introspector }
    }

    #[must_use]
    pub const fn introspector(&self) -> &Introspector {
        &self.introspector
    }

    /// Copy fields from `source` into `target`.
    ///
    /// A missing source or target is a no-op; missing options mean the
    /// defaults. Fields are visited in the source's index order.
    ///
    /// With `ignore_error` set, a field whose source read or target write
    /// fails is logged and skipped. A missing accessor still aborts.
    pub fn copy(
        &self,
        source: Option<&dyn Bean>,
        target: Option<&mut dyn Bean>,
        options: Option<&CopyOptions>,
    ) -> Result<(), CopyError> {
        let (Some(source), Some(target)) = (source, target) else {
            trace!("source or target absent, nothing to copy");
            return Ok(());
        };

        let defaults;
        let options = match options {
            Some(options) => options,
            None => {
                defaults = CopyOptions::default();
                &defaults
            }
        };

        let source_fields = self.introspector.field_index(source.bean_type());
        let target_fields = self.introspector.field_index(target.bean_type());

        debug!(
            source = source.bean_type().name,
            target = target.bean_type().name,
            fields = source_fields.len(),
            "copying bean properties"
        );

        for (source_name, source_field) in source_fields.iter() {
            if options.is_ignored(source_name) {
                trace!(field = source_name, "field ignored");
                continue;
            }

            let target_name = options.target_name(source_name);
            let Some(target_field) = target_fields.get(target_name) else {
                trace!(
                    field = source_name,
                    target = target_name,
                    "no such field on target"
                );
                continue;
            };

            match self.copy_field(source, target, source_field, target_field, options) {
                Ok(()) => {}
                Err(CopyError::FieldAccess(cause)) if options.ignore_error() => {
                    debug!(
                        source_field = source_name,
                        target_field = target_name,
                        error = %cause,
                        "field copy failed, continuing"
                    );
                }
                Err(CopyError::FieldAccess(cause)) => {
                    return Err(CopyError::field_copy(source_name, target_name, cause));
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    fn copy_field(
        &self,
        source: &dyn Bean,
        target: &mut dyn Bean,
        source_field: &'static FieldDescriptor,
        target_field: &'static FieldDescriptor,
        options: &CopyOptions,
    ) -> Result<(), CopyError> {
        let value = self
            .introspector
            .read_field(source, source_field, options.use_getter())?;

        if value.is_null() && options.ignore_null_value() {
            trace!(field = source_field.name, "null value skipped");
            return Ok(());
        }

        self.introspector
            .write_field(target, target_field, value, options.use_setter())
    }

    /// Snapshot every copyable, non-null field of `source` by name.
    pub fn to_mapping(
        &self,
        source: Option<&dyn Bean>,
        use_getter: bool,
    ) -> Result<FieldMap, CopyError> {
        let source = source.ok_or_else(|| CopyError::invalid_argument("source can not be null"))?;
        let mut map = FieldMap::default();

        for (name, field) in self.introspector.field_index(source.bean_type()).iter() {
            let value = self.introspector.read_field(source, field, use_getter)?;
            if value.is_null() {
                trace!(field = name, "null value left out of map");
                continue;
            }

            map.insert(name, value);
        }

        Ok(map)
    }
}

// ---------------------------------------------------------------------------
// convenience
// ---------------------------------------------------------------------------

/// Copy every matching field using getters and setters.
pub fn copy_properties(source: &dyn Bean, target: &mut dyn Bean) -> Result<(), CopyError> {
    BeanCopier::default().copy(Some(source), Some(target), None)
}

/// Copy every matching field except the named source fields.
pub fn copy_properties_ignoring(
    source: &dyn Bean,
    target: &mut dyn Bean,
    ignore: &[&str],
) -> Result<(), CopyError> {
    let options = CopyOptions::ignoring(ignore);

    BeanCopier::default().copy(Some(source), Some(target), Some(&options))
}

pub fn copy_properties_with(
    source: &dyn Bean,
    target: &mut dyn Bean,
    options: &CopyOptions,
) -> Result<(), CopyError> {
    BeanCopier::default().copy(Some(source), Some(target), Some(options))
}

/// Flatten `source` into a map, reading through getters.
pub fn bean_to_map(source: &dyn Bean) -> Result<FieldMap, CopyError> {
    bean_to_map_with(source, true)
}

pub fn bean_to_map_with(source: &dyn Bean, use_getter: bool) -> Result<FieldMap, CopyError> {
    BeanCopier::default().to_mapping(Some(source), use_getter)
}
