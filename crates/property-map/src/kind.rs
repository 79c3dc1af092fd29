//! Value kinds and their wire shapes.
//!
//! The set of kinds is closed. Every consumer matches on [`ValueKind`]
//! exhaustively, so adding a kind forces the schema builder and the wire
//! codec to be updated together.

use std::fmt;

/// The type tag of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Float,
    Int,
    String,
    Bool,
    Vec2f,
    Vec2i,
    Vec3f,
    Vec3i,
    Vec4f,
}

/// Element type of a vector kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Double precision float, written as a JSON number.
    Float,
    /// Signed 32-bit integer, written as a JSON integer.
    Int32,
}

/// JSON shape used for a kind, both in schemas and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    Number,
    Integer,
    String,
    Boolean,
    /// Fixed-length array of numbers.
    Array { element: ElementType, arity: usize },
}

impl WireShape {
    /// The JSON Schema `type` keyword for this shape.
    pub fn json_type(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Array { .. } => "array",
        }
    }
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValueKind; 9] = [
        Self::Float,
        Self::Int,
        Self::String,
        Self::Bool,
        Self::Vec2f,
        Self::Vec2i,
        Self::Vec3f,
        Self::Vec3i,
        Self::Vec4f,
    ];

    pub fn shape(self) -> WireShape {
        match self {
            Self::Float => WireShape::Number,
            Self::Int => WireShape::Integer,
            Self::String => WireShape::String,
            Self::Bool => WireShape::Boolean,
            Self::Vec2f => WireShape::Array {
                element: ElementType::Float,
                arity: 2,
            },
            Self::Vec2i => WireShape::Array {
                element: ElementType::Int32,
                arity: 2,
            },
            Self::Vec3f => WireShape::Array {
                element: ElementType::Float,
                arity: 3,
            },
            Self::Vec3i => WireShape::Array {
                element: ElementType::Int32,
                arity: 3,
            },
            Self::Vec4f => WireShape::Array {
                element: ElementType::Float,
                arity: 4,
            },
        }
    }

    /// Element type for vector kinds, `None` for scalars.
    pub fn element(self) -> Option<ElementType> {
        match self.shape() {
            WireShape::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Number of elements for vector kinds, `None` for scalars.
    pub fn arity(self) -> Option<usize> {
        match self.shape() {
            WireShape::Array { arity, .. } => Some(arity),
            _ => None,
        }
    }

    /// Whether `min`/`max` bounds may be declared for this kind.
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Float | Self::Int)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Vec2f => "vec2f",
            Self::Vec2i => "vec2i",
            Self::Vec3f => "vec3f",
            Self::Vec3i => "vec3i",
            Self::Vec4f => "vec4f",
        }
    }

    /// Parses the name produced by [`ValueKind::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
