use crate::error::CopyError;
use fieldcopy_utils::is_blank;
use std::collections::BTreeMap;

///
/// CopyOptions
///
/// Per-call policy for `BeanCopier::copy`.
///
/// Defaults: no mappings, no ignored fields, nulls are copied, errors
/// abort, getters and setters are used.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CopyOptions {
    field_mapping: BTreeMap<String, String>,
    ignore_fields: Vec<String>,
    ignore_null_value: bool,
    ignore_error: bool,
    use_getter: bool,
    use_setter: bool,
}

impl CopyOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options that skip the given source fields.
    #[must_use]
    pub fn ignoring<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        options.add_ignore_fields(names);

        options
    }

    // ------------------------------------------------------------------
    // ignore list
    // ------------------------------------------------------------------

    /// Add source field names to skip. Blank names are dropped and
    /// duplicates are not added twice.
    pub fn add_ignore_fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if is_blank(name) || self.is_ignored(name) {
                continue;
            }
            self.ignore_fields.push(name.to_string());
        }

        self
    }

    pub fn remove_ignore_fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if !is_blank(name) {
                self.ignore_fields.retain(|f| f != name);
            }
        }

        self
    }

    #[must_use]
    pub fn ignore_fields(&self) -> &[String] {
        &self.ignore_fields
    }

    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_fields.iter().any(|f| f == name)
    }

    // ------------------------------------------------------------------
    // field mapping
    // ------------------------------------------------------------------

    /// Copy `source` into a differently named `target` field.
    ///
    /// The first mapping registered for a source name is kept; later ones
    /// are ignored.
    pub fn add_field_mapping(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<&mut Self, CopyError> {
        if is_blank(source) {
            return Err(CopyError::invalid_argument(
                "source field name can not be blank",
            ));
        }
        if is_blank(target) {
            return Err(CopyError::invalid_argument(
                "target field name can not be blank",
            ));
        }

        self.field_mapping
            .entry(source.to_string())
            .or_insert_with(|| target.to_string());

        Ok(self)
    }

    pub fn remove_field_mapping(&mut self, source: &str) -> Result<&mut Self, CopyError> {
        if is_blank(source) {
            return Err(CopyError::invalid_argument(
                "source field name can not be blank",
            ));
        }
        self.field_mapping.remove(source);

        Ok(self)
    }

    #[must_use]
    pub const fn field_mapping(&self) -> &BTreeMap<String, String> {
        &self.field_mapping
    }

    /// Target name for a source field: its mapping, or the name itself.
    #[must_use]
    pub fn target_name<'a>(&'a self, source: &'a str) -> &'a str {
        self.field_mapping.get(source).map_or(source, String::as_str)
    }

    // ------------------------------------------------------------------
    // flags
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn ignore_null_value(&self) -> bool {
        self.ignore_null_value
    }

    pub const fn set_ignore_null_value(&mut self, ignore_null_value: bool) -> &mut Self {
        self.ignore_null_value = ignore_null_value;
        self
    }

    #[must_use]
    pub const fn ignore_error(&self) -> bool {
        self.ignore_error
    }

    pub const fn set_ignore_error(&mut self, ignore_error: bool) -> &mut Self {
        self.ignore_error = ignore_error;
        self
    }

    #[must_use]
    pub const fn use_getter(&self) -> bool {
        self.use_getter
    }

    pub const fn set_use_getter(&mut self, use_getter: bool) -> &mut Self {
        self.use_getter = use_getter;
        self
    }

    #[must_use]
    pub const fn use_setter(&self) -> bool {
        self.use_setter
    }

    pub const fn set_use_setter(&mut self, use_setter: bool) -> &mut Self {
        self.use_setter = use_setter;
        self
    }
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            field_mapping: BTreeMap::new(),
            ignore_fields: Vec::new(),
            ignore_null_value: false,
            ignore_error: false,
            use_getter: true,
            use_setter: true,
        }
    }
}

///
/// TESTS
///
