//! A single named, titled, typed property.

use crate::error::PropertyError;
use crate::kind::ValueKind;
use crate::value::PropertyValue;

/// Inclusive bounds of a scalar numeric property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Float { min: f64, max: f64 },
    Int { min: i32, max: i32 },
}

impl Bounds {
    /// The kind these bounds apply to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Float { .. } => ValueKind::Float,
            Self::Int { .. } => ValueKind::Int,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Internal (lower camel case) identifier.
    pub name: String,
    /// Human-readable label.
    pub title: String,
    value: PropertyValue,
    bounds: Option<Bounds>,
}

impl Property {
    /// Creates an unbounded property. The kind is fixed by `value`.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            value: value.into(),
            bounds: None,
        }
    }

    /// Attaches `min`/`max` bounds.
    ///
    /// # Errors
    ///
    /// Fails unless the property is `Float` with float bounds or `Int` with
    /// int bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Result<Self, PropertyError> {
        if bounds.kind() != self.kind() {
            return Err(PropertyError::InvalidBounds {
                name: self.name,
                kind: self.value.kind(),
            });
        }
        self.bounds = Some(bounds);
        Ok(self)
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Replaces the value, keeping the kind.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::KindMismatch`] when `value` is of another kind.
    pub fn set_value(&mut self, value: PropertyValue) -> Result<(), PropertyError> {
        if value.kind() != self.kind() {
            return Err(PropertyError::KindMismatch {
                name: self.name.clone(),
                expected: self.kind(),
                found: value.kind(),
            });
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_must_match_kind() {
        let ok = Property::new("radius", "Radius", 1.0)
            .with_bounds(Bounds::Float { min: 0.0, max: 10.0 });
        assert!(ok.is_ok());

        let wrong_numeric = Property::new("samples", "Samples", 4)
            .with_bounds(Bounds::Float { min: 0.0, max: 1.0 });
        assert!(matches!(wrong_numeric, Err(PropertyError::InvalidBounds { .. })));

        let unbounded_kind = Property::new("position", "Position", [0.0, 0.0, 0.0])
            .with_bounds(Bounds::Float { min: 0.0, max: 1.0 });
        assert_eq!(
            unbounded_kind,
            Err(PropertyError::InvalidBounds {
                name: "position".into(),
                kind: ValueKind::Vec3f,
            })
        );
    }

    #[test]
    fn set_value_keeps_kind() {
        let mut prop = Property::new("shadows", "Shadows", false);
        prop.set_value(PropertyValue::Bool(true)).unwrap();
        assert_eq!(prop.value(), &PropertyValue::Bool(true));

        let err = prop.set_value(PropertyValue::Int(1)).unwrap_err();
        assert_eq!(
            err,
            PropertyError::KindMismatch {
                name: "shadows".into(),
                expected: ValueKind::Bool,
                found: ValueKind::Int,
            }
        );
        assert_eq!(prop.value(), &PropertyValue::Bool(true));
    }
}
