//! Typed property values.

use crate::kind::ValueKind;

/// A property value, one variant per [`ValueKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Float(f64),
    Int(i32),
    String(String),
    Bool(bool),
    Vec2f([f64; 2]),
    Vec2i([i32; 2]),
    Vec3f([f64; 3]),
    Vec3i([i32; 3]),
    Vec4f([f64; 4]),
}

impl PropertyValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Float(_) => ValueKind::Float,
            Self::Int(_) => ValueKind::Int,
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Vec2f(_) => ValueKind::Vec2f,
            Self::Vec2i(_) => ValueKind::Vec2i,
            Self::Vec3f(_) => ValueKind::Vec3f,
            Self::Vec3i(_) => ValueKind::Vec3i,
            Self::Vec4f(_) => ValueKind::Vec4f,
        }
    }

    /// The zero value of a kind: `0`, `""`, `false` or a zero vector.
    pub fn zero(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Float => Self::Float(0.0),
            ValueKind::Int => Self::Int(0),
            ValueKind::String => Self::String(String::new()),
            ValueKind::Bool => Self::Bool(false),
            ValueKind::Vec2f => Self::Vec2f([0.0; 2]),
            ValueKind::Vec2i => Self::Vec2i([0; 2]),
            ValueKind::Vec3f => Self::Vec3f([0.0; 3]),
            ValueKind::Vec3i => Self::Vec3i([0; 3]),
            ValueKind::Vec4f => Self::Vec4f([0.0; 4]),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<[f64; 2]> for PropertyValue {
    fn from(value: [f64; 2]) -> Self {
        Self::Vec2f(value)
    }
}

impl From<[i32; 2]> for PropertyValue {
    fn from(value: [i32; 2]) -> Self {
        Self::Vec2i(value)
    }
}

impl From<[f64; 3]> for PropertyValue {
    fn from(value: [f64; 3]) -> Self {
        Self::Vec3f(value)
    }
}

impl From<[i32; 3]> for PropertyValue {
    fn from(value: [i32; 3]) -> Self {
        Self::Vec3i(value)
    }
}

impl From<[f64; 4]> for PropertyValue {
    fn from(value: [f64; 4]) -> Self {
        Self::Vec4f(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_requested_kind() {
        for kind in ValueKind::ALL {
            assert_eq!(PropertyValue::zero(kind).kind(), kind);
        }
    }

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(PropertyValue::from(1.5).kind(), ValueKind::Float);
        assert_eq!(PropertyValue::from(3).kind(), ValueKind::Int);
        assert_eq!(PropertyValue::from("x").kind(), ValueKind::String);
        assert_eq!(PropertyValue::from([1, 2]).kind(), ValueKind::Vec2i);
        assert_eq!(PropertyValue::from([1.0, 2.0, 3.0, 4.0]).kind(), ValueKind::Vec4f);
    }
}
