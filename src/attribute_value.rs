//! Typed values carried by attribute lists.

use num_derive::FromPrimitive;

use crate::location::MappingKind;
use crate::types::*;

/// Wire tag of an attribute value. Integer widths, two float widths, and
/// the reference kinds whose carriers are 32-bit ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u8)]
pub enum Type {
    Uint8 = 1,
    Uint16 = 2,
    Uint32 = 3,
    Uint64 = 4,
    Int8 = 5,
    Int16 = 6,
    Int32 = 7,
    Int64 = 8,
    Float = 9,
    Double = 10,
    String = 11,
    Attribute = 12,
    Location = 13,
    Region = 14,
    Group = 15,
    Metric = 16,
    Comm = 17,
    Parameter = 18,
    RmaWin = 19,
    IoHandle = 20,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    String(StringRef),
    Attribute(AttributeRef),
    Location(u32),
    Region(RegionRef),
    Group(GroupRef),
    Metric(MetricRef),
    Comm(CommRef),
    Parameter(ParameterRef),
    RmaWin(RmaWinRef),
    IoHandle(IoHandleRef),
}

impl AttributeValue {
    pub fn type_tag(&self) -> Type {
        match self {
            AttributeValue::Uint8(_) => Type::Uint8,
            AttributeValue::Uint16(_) => Type::Uint16,
            AttributeValue::Uint32(_) => Type::Uint32,
            AttributeValue::Uint64(_) => Type::Uint64,
            AttributeValue::Int8(_) => Type::Int8,
            AttributeValue::Int16(_) => Type::Int16,
            AttributeValue::Int32(_) => Type::Int32,
            AttributeValue::Int64(_) => Type::Int64,
            AttributeValue::Float(_) => Type::Float,
            AttributeValue::Double(_) => Type::Double,
            AttributeValue::String(_) => Type::String,
            AttributeValue::Attribute(_) => Type::Attribute,
            AttributeValue::Location(_) => Type::Location,
            AttributeValue::Region(_) => Type::Region,
            AttributeValue::Group(_) => Type::Group,
            AttributeValue::Metric(_) => Type::Metric,
            AttributeValue::Comm(_) => Type::Comm,
            AttributeValue::Parameter(_) => Type::Parameter,
            AttributeValue::RmaWin(_) => Type::RmaWin,
            AttributeValue::IoHandle(_) => Type::IoHandle,
        }
    }

    /// The mapping table used to rewrite this value's id, if it is a
    /// reference with a mapping kind.
    pub(crate) fn mapping_kind(type_tag: Type) -> Option<MappingKind> {
        match type_tag {
            Type::String => Some(MappingKind::String),
            Type::Region => Some(MappingKind::Region),
            Type::Group => Some(MappingKind::Group),
            Type::Metric => Some(MappingKind::Metric),
            Type::Comm => Some(MappingKind::Comm),
            Type::Parameter => Some(MappingKind::Parameter),
            Type::RmaWin => Some(MappingKind::RmaWin),
            Type::IoHandle => Some(MappingKind::IoHandle),
            _ => None,
        }
    }
}
