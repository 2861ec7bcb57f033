use std::str::FromStr;

use smol_str::SmolStr;
use snafu::{OptionExt, ResultExt};

use crate::{
    error::{self, Result},
    parser::hex_bytes,
    types::{
        ByteValue, DoubleValue, FloatValue, IntValue, LongValue, NumberValue, ShortValue,
        ValueType, number::parse_literal,
    },
};

/// A single immutable reading of any supported kind.
///
/// The variant is the value's kind, so dispatching on [`Value::value_type`]
/// or matching on the enum never needs to inspect the payload.
///
/// # Conversions
/// Every value can be asked for every primitive width:
/// - numeric kinds convert through [`NumberValue`];
/// - booleans become `1` or `0`;
/// - strings are parsed, text that is not a number fails with
///   [`Error::TypeConversion`](crate::Error::TypeConversion);
/// - byte arrays only convert into bytes and text.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Double(DoubleValue),
    Float(FloatValue),
    Long(LongValue),
    Integer(IntValue),
    Short(ShortValue),
    Byte(ByteValue),
    Boolean(bool),
    ByteArray(Vec<u8>),
    String(SmolStr),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Double(_) => ValueType::Double,
            Value::Float(_) => ValueType::Float,
            Value::Long(_) => ValueType::Long,
            Value::Integer(_) => ValueType::Integer,
            Value::Short(_) => ValueType::Short,
            Value::Byte(_) => ValueType::Byte,
            Value::Boolean(_) => ValueType::Boolean,
            Value::ByteArray(_) => ValueType::ByteArray,
            Value::String(_) => ValueType::String,
        }
    }

    /// Returns the numeric view of the value, `None` for non-numeric kinds.
    pub fn as_number(&self) -> Option<&dyn NumberValue> {
        match self {
            Value::Double(data) => Some(data),
            Value::Float(data) => Some(data),
            Value::Long(data) => Some(data),
            Value::Integer(data) => Some(data),
            Value::Short(data) => Some(data),
            Value::Byte(data) => Some(data),
            Value::Boolean(_) | Value::ByteArray(_) | Value::String(_) => None,
        }
    }

    /// Builds a value of kind `value_type` from its textual form.
    ///
    /// # Errors
    /// Returns `Error::NumericFormat` if a numeric literal is malformed or out
    /// of range, `Error::InvalidHex` if a byte array is not a list of hex pairs.
    /// Booleans and strings never fail.
    pub fn from_text(value_type: ValueType, text: &str) -> Result<Self> {
        let value = match value_type {
            ValueType::Double => Value::Double(text.parse()?),
            ValueType::Float => Value::Float(text.parse()?),
            ValueType::Long => Value::Long(text.parse()?),
            ValueType::Integer => Value::Integer(text.parse()?),
            ValueType::Short => Value::Short(text.parse()?),
            ValueType::Byte => Value::Byte(text.parse()?),
            ValueType::Boolean => Value::Boolean(parse_boolean(text)),
            ValueType::ByteArray => Value::ByteArray(parse_hex(text)?),
            ValueType::String => Value::String(SmolStr::new(text)),
        };

        Ok(value)
    }

    /// Decodes a value of kind `value_type` from its binary form.
    ///
    /// Fixed-width kinds require exactly [`ValueType::byte_len`] bytes in
    /// big-endian order. A boolean is true for any non-zero byte.
    ///
    /// # Errors
    /// Returns `Error::InvalidLength` on a width mismatch and
    /// `Error::InvalidUtf8` if a string is not valid UTF-8.
    pub fn from_bytes(value_type: ValueType, bytes: &[u8]) -> Result<Self> {
        let value = match value_type {
            ValueType::Double => Value::Double(DoubleValue::from_bytes(fixed(value_type, bytes)?)),
            ValueType::Float => Value::Float(FloatValue::from_bytes(fixed(value_type, bytes)?)),
            ValueType::Long => Value::Long(LongValue::from_bytes(fixed(value_type, bytes)?)),
            ValueType::Integer => Value::Integer(IntValue::from_bytes(fixed(value_type, bytes)?)),
            ValueType::Short => Value::Short(ShortValue::from_bytes(fixed(value_type, bytes)?)),
            ValueType::Byte => Value::Byte(ByteValue::from_bytes(fixed(value_type, bytes)?)),
            ValueType::Boolean => {
                let [byte] = fixed::<1>(value_type, bytes)?;
                Value::Boolean(byte != 0)
            }
            ValueType::ByteArray => Value::ByteArray(bytes.to_vec()),
            ValueType::String => {
                let text = String::from_utf8(bytes.to_vec()).context(error::InvalidUtf8)?;
                Value::String(SmolStr::from(text))
            }
        };

        Ok(value)
    }

    pub fn as_double(&self) -> Result<f64> {
        self.convert(ValueType::Double, |n| n.as_double(), f64::from, |text| {
            parse_literal(text, crate::parser::real::<f64>, ValueType::Double).ok()
        })
    }

    pub fn as_float(&self) -> Result<f32> {
        self.convert(ValueType::Float, |n| n.as_float(), f32::from, |text| {
            parse_literal(text, crate::parser::real::<f32>, ValueType::Float).ok()
        })
    }

    pub fn as_long(&self) -> Result<i64> {
        self.convert(ValueType::Long, |n| n.as_long(), i64::from, |text| {
            LongValue::from_str(text).ok().map(i64::from)
        })
    }

    pub fn as_int(&self) -> Result<i32> {
        self.convert(ValueType::Integer, |n| n.as_int(), i32::from, |text| {
            IntValue::from_str(text).ok().map(i32::from)
        })
    }

    pub fn as_short(&self) -> Result<i16> {
        self.convert(ValueType::Short, |n| n.as_short(), i16::from, |text| {
            ShortValue::from_str(text).ok().map(i16::from)
        })
    }

    pub fn as_byte(&self) -> Result<i8> {
        self.convert(ValueType::Byte, |n| n.as_byte(), i8::from, |text| {
            ByteValue::from_str(text).ok().map(i8::from)
        })
    }

    /// Interprets the value as a boolean.
    ///
    /// Numbers are true when non-zero, text is true only for `true` in any
    /// letter case. Byte arrays can't be converted.
    pub fn as_boolean(&self) -> Result<bool> {
        self.convert(ValueType::Boolean, |n| n.as_boolean(), |data| data, |text| {
            Some(parse_boolean(text))
        })
    }

    /// Returns the binary form of the value.
    ///
    /// Strings are encoded as US-ASCII, characters outside of it become `?`.
    pub fn as_byte_array(&self) -> Vec<u8> {
        match self {
            Value::Boolean(data) => vec![u8::from(*data)],
            Value::ByteArray(data) => data.clone(),
            Value::String(data) => data
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            _ => self
                .as_number()
                .map(NumberValue::as_byte_array)
                .unwrap_or_default(),
        }
    }

    fn convert<T>(
        &self,
        to: ValueType,
        number: fn(&dyn NumberValue) -> T,
        boolean: fn(bool) -> T,
        text: fn(&str) -> Option<T>,
    ) -> Result<T> {
        if let Some(data) = self.as_number() {
            return Ok(number(data));
        }

        match self {
            Value::Boolean(data) => Ok(boolean(*data)),
            Value::String(data) => text(data).context(error::TypeConversion {
                from: ValueType::String,
                to,
            }),
            _ => error::TypeConversion {
                from: self.value_type(),
                to,
            }
            .fail(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Double(data) => write!(f, "{data}"),
            Value::Float(data) => write!(f, "{data}"),
            Value::Long(data) => write!(f, "{data}"),
            Value::Integer(data) => write!(f, "{data}"),
            Value::Short(data) => write!(f, "{data}"),
            Value::Byte(data) => write!(f, "{data}"),
            Value::Boolean(data) => write!(f, "{data}"),
            Value::ByteArray(data) => write!(f, "{data:?}"),
            Value::String(data) => write!(f, "{data}"),
        }
    }
}

impl From<LongValue> for Value {
    fn from(value: LongValue) -> Self {
        Value::Long(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(LongValue::new(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(DoubleValue::new(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(SmolStr::new(value))
    }
}

/// `true` exactly for `true` in any letter case, everything else is `false`.
fn parse_boolean(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Parses a list of hexadecimal byte pairs, rejecting any leftover input.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    match hex_bytes(text.as_bytes()) {
        Ok((remaining, bytes)) if remaining.is_empty() => Ok(bytes),
        _ => error::InvalidHex { input: text }.fail(),
    }
}

/// Formats bytes as upper-case hex pairs separated by single spaces.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fixed<const N: usize>(value_type: ValueType, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().ok().context(error::InvalidLength {
        value_type,
        expected: N,
        got: bytes.len(),
    })
}
