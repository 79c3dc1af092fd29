//! Ordered property collections.

use indexmap::IndexMap;

use crate::error::PropertyError;
use crate::kind::ValueKind;
use crate::property::Property;
use crate::value::PropertyValue;

/// What the schema builder and the wire codec need from a collection.
///
/// Iteration order is the collection's natural order and is reflected in
/// every generated document.
pub trait PropertyCollection {
    type Iter<'a>: Iterator<Item = &'a Property>
    where
        Self: 'a;

    fn properties(&self) -> Self::Iter<'_>;

    fn has_property(&self, name: &str) -> bool;

    fn property_kind(&self, name: &str) -> Option<ValueKind>;

    fn property_value(&self, name: &str) -> Option<&PropertyValue>;

    /// Writes `value` into the property called `name`.
    ///
    /// # Errors
    ///
    /// Fails when the name is unknown or the value kind differs from the
    /// declared kind.
    fn update_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError>;
}

/// Insertion-ordered collection of properties keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    props: IndexMap<String, Property>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::DuplicateProperty`] if the name is taken.
    pub fn add(&mut self, property: Property) -> Result<(), PropertyError> {
        if self.props.contains_key(&property.name) {
            return Err(PropertyError::DuplicateProperty(property.name));
        }
        self.props.insert(property.name.clone(), property);
        Ok(())
    }

    /// Builder-style [`PropertyMap::add`].
    pub fn with(mut self, property: Property) -> Result<Self, PropertyError> {
        self.add(property)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.props.get(name)
    }
}

impl PropertyCollection for PropertyMap {
    type Iter<'a> = indexmap::map::Values<'a, String, Property>;

    fn properties(&self) -> Self::Iter<'_> {
        self.props.values()
    }

    fn has_property(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    fn property_kind(&self, name: &str) -> Option<ValueKind> {
        self.props.get(name).map(Property::kind)
    }

    fn property_value(&self, name: &str) -> Option<&PropertyValue> {
        self.props.get(name).map(Property::value)
    }

    fn update_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match self.props.get_mut(name) {
            Some(prop) => prop.set_value(value),
            None => Err(PropertyError::UnknownProperty(name.to_string())),
        }
    }
}

impl FromIterator<Property> for PropertyMap {
    /// Later properties replace earlier ones with the same name.
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        let props = iter
            .into_iter()
            .map(|prop| (prop.name.clone(), prop))
            .collect();
        Self { props }
    }
}
