use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use std::collections::BTreeMap;

///
/// FieldMap
///
/// Field name → value snapshot of a bean, as produced by `bean_to_map`.
/// Fields holding `Null` are absent.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct FieldMap(BTreeMap<String, Value>);

impl FieldMap {
    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}
