use crate::model::FieldDescriptor;
use indexmap::IndexMap;

///
/// FieldIndex
///
/// Name → descriptor lookup built from an enumeration.
///
/// Insertion overwrites, so when a name is shadowed the descriptor
/// enumerated last (the ancestor's) wins, while iteration keeps the
/// position where the name was first seen.
///

#[derive(Clone, Debug, Default)]
pub struct FieldIndex {
    fields: IndexMap<&'static str, &'static FieldDescriptor>,
}

impl FieldIndex {
    pub(crate) fn build<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'static FieldDescriptor>,
    {
        let mut fields = IndexMap::new();
        for field in descriptors.into_iter().filter(|f| f.is_copyable()) {
            fields.insert(field.name, field);
        }

        Self { fields }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static FieldDescriptor)> + '_ {
        self.fields.iter().map(|(name, field)| (*name, *field))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
