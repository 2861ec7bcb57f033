use crate::error::{self, Error, Result};

/// Discriminator of every value kind a reading can carry.
///
/// The set is closed: drivers, loggers and servers dispatch on the tag
/// instead of inspecting the value itself. The canonical names are the
/// upper-case names used in channel configuration (`LONG`, `BYTE_ARRAY`, ...).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// IEEE-754 double precision, 8 bytes
    Double,
    /// IEEE-754 single precision, 4 bytes
    Float,
    /// Signed 64-bit integer, 8 bytes
    Long,
    /// Signed 32-bit integer, 4 bytes
    Integer,
    /// Signed 16-bit integer, 2 bytes
    Short,
    /// Signed 8-bit integer, 1 byte
    Byte,
    /// Boolean, 1 byte
    Boolean,
    /// Raw bytes of arbitrary length
    ByteArray,
    /// Text of arbitrary length
    String,
}

impl ValueType {
    pub const ALL: [ValueType; 9] = [
        ValueType::Double,
        ValueType::Float,
        ValueType::Long,
        ValueType::Integer,
        ValueType::Short,
        ValueType::Byte,
        ValueType::Boolean,
        ValueType::ByteArray,
        ValueType::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Double => "DOUBLE",
            ValueType::Float => "FLOAT",
            ValueType::Long => "LONG",
            ValueType::Integer => "INTEGER",
            ValueType::Short => "SHORT",
            ValueType::Byte => "BYTE",
            ValueType::Boolean => "BOOLEAN",
            ValueType::ByteArray => "BYTE_ARRAY",
            ValueType::String => "STRING",
        }
    }

    /// Width of the binary encoding in bytes.
    ///
    /// Returns `None` for kinds whose encoding length depends on the value
    /// (`ByteArray` and `String`).
    pub fn byte_len(&self) -> Option<usize> {
        match self {
            ValueType::Double | ValueType::Long => Some(8),
            ValueType::Float | ValueType::Integer => Some(4),
            ValueType::Short => Some(2),
            ValueType::Byte | ValueType::Boolean => Some(1),
            ValueType::ByteArray | ValueType::String => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            ValueType::Boolean | ValueType::ByteArray | ValueType::String
        )
    }
}

impl std::str::FromStr for ValueType {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        ValueType::ALL
            .into_iter()
            .find(|value_type| value_type.as_str() == source)
            .ok_or_else(|| {
                error::UnknownValueType {
                    name: source.to_string(),
                }
                .build()
            })
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
