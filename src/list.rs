use serde::{Deserialize, Serialize};

use crate::def::FieldDef;

/// An ordered list of field descriptors, as a caller declares a form.
///
/// Order is preserved; it drives both render order and schema order.
/// Name uniqueness is not enforced here but at schema assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList {
    fields: Vec<FieldDef>,
}

impl FieldList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field descriptor.
    pub fn add(&mut self, field: FieldDef) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append a field descriptor (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Get a descriptor by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }

    /// Get a descriptor by its field name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Remove and return a descriptor by name.
    pub fn remove(&mut self, name: &str) -> Option<FieldDef> {
        let idx = self.fields.iter().position(|f| f.name() == name)?;
        Some(self.fields.remove(idx))
    }

    /// Check whether a descriptor with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    /// Iterate over all field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDef::name)
    }

    /// The number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Iterate mutably over all descriptors.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FieldDef> {
        self.fields.iter_mut()
    }

    /// View the descriptors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldDef] {
        &self.fields
    }
}

impl IntoIterator for FieldList {
    type Item = FieldDef;
    type IntoIter = std::vec::IntoIter<FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldDef;
    type IntoIter = std::slice::Iter<'a, FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<FieldDef> for FieldList {
    fn from_iter<I: IntoIterator<Item = FieldDef>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    #[test]
    fn new_is_empty() {
        let list = FieldList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn add_preserves_order() {
        let mut list = FieldList::new();
        list.add(FieldDef::Text(TextField::new("host", "Host")));
        list.add(FieldDef::Number(NumberField::new("port", "Port")));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().name(), "host");
        assert_eq!(list.get(1).unwrap().name(), "port");
        assert!(list.get(2).is_none());
    }

    #[test]
    fn get_by_name_and_contains() {
        let list = FieldList::new()
            .with(FieldDef::Text(TextField::new("host", "Host")))
            .with(FieldDef::Number(NumberField::new("port", "Port")));

        assert_eq!(list.get_by_name("port").unwrap().name(), "port");
        assert!(list.get_by_name("missing").is_none());
        assert!(list.contains("host"));
        assert!(!list.contains("missing"));
    }

    #[test]
    fn remove_by_name() {
        let mut list = FieldList::new()
            .with(FieldDef::Text(TextField::new("a", "A")))
            .with(FieldDef::Text(TextField::new("b", "B")));

        let removed = list.remove("a");
        assert_eq!(removed.unwrap().name(), "a");
        assert_eq!(list.len(), 1);
        assert!(list.remove("missing").is_none());
    }

    #[test]
    fn names_iterator() {
        let list = FieldList::new()
            .with(FieldDef::Text(TextField::new("a", "A")))
            .with(FieldDef::Text(TextField::new("b", "B")));

        let names: Vec<&str> = list.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn iter_mut_modifies_in_place() {
        let mut list = FieldList::new()
            .with(FieldDef::Text(TextField::new("a", "A")))
            .with(FieldDef::Text(TextField::new("b", "B")));

        for field in list.iter_mut() {
            field.metadata_mut().required = true;
        }

        assert!(list.get(0).unwrap().is_required());
        assert!(list.get(1).unwrap().is_required());
    }

    #[test]
    fn serde_transparent_array() {
        let list = FieldList::new().with(FieldDef::Text(TextField::new("x", "X")));
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));

        let back: FieldList = serde_json::from_str(&json).unwrap();
        assert_eq!(list, back);
    }
}
