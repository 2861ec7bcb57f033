use nom::{IResult, Parser, combinator::all_consuming};

use crate::{
    error::{self, Result},
    types::ValueType,
};

/// Conversions shared by every numeric value kind.
///
/// Narrowing conversions between integer widths keep the low-order bits,
/// conversions from floating point into integers saturate at the bounds of
/// the target type (`NaN` becomes zero).
pub trait NumberValue {
    fn value_type(&self) -> ValueType;

    fn as_double(&self) -> f64;

    fn as_float(&self) -> f32;

    fn as_long(&self) -> i64;

    fn as_int(&self) -> i32;

    fn as_short(&self) -> i16;

    fn as_byte(&self) -> i8;

    /// `true` for every value other than zero.
    fn as_boolean(&self) -> bool {
        self.as_double() != 0.0
    }

    /// Canonical big-endian encoding of the value.
    fn as_byte_array(&self) -> Vec<u8>;
}

/// Runs `parser` over the whole of `source`.
///
/// Any failure, including trailing input, is reported as a numeric format
/// error for `value_type`.
pub(crate) fn parse_literal<T>(
    source: &str,
    parser: fn(&[u8]) -> IResult<&[u8], T>,
    value_type: ValueType,
) -> Result<T> {
    let (_, value) = all_consuming(parser)
        .parse(source.as_bytes())
        .map_err(|_| {
            error::NumericFormat {
                input: source,
                value_type,
            }
            .build()
        })?;

    Ok(value)
}

/// Declares an immutable numeric value kind wrapping one primitive.
///
/// The generated type is `Copy`, parses from text with `parse` (strict, the
/// whole input must be consumed), encodes into `size_of::<primitive>()`
/// big-endian bytes and implements [`NumberValue`].
macro_rules! number_value {
    (
        $(#[$meta:meta])*
        $name:ident($primitive:ty) => $value_type:ident, $parse:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, PartialEq, PartialOrd, Clone, Copy)]
        pub struct $name($primitive);

        impl $name {
            /// Type tag shared by every instance of this kind.
            pub const VALUE_TYPE: $crate::types::ValueType =
                $crate::types::ValueType::$value_type;

            /// Width of the binary encoding in bytes.
            pub const LENGTH: usize = std::mem::size_of::<$primitive>();

            pub const fn new(value: $primitive) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> $primitive {
                self.0
            }

            /// Encodes the value as big-endian bytes.
            ///
            /// Every call returns a fresh array, changing it never affects the value.
            pub const fn to_bytes(&self) -> [u8; Self::LENGTH] {
                self.0.to_be_bytes()
            }

            pub const fn from_bytes(bytes: [u8; Self::LENGTH]) -> Self {
                Self(<$primitive>::from_be_bytes(bytes))
            }
        }

        impl From<$primitive> for $name {
            fn from(value: $primitive) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $primitive {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(source: &str) -> std::result::Result<Self, Self::Err> {
                $crate::types::number::parse_literal(source, $parse, Self::VALUE_TYPE).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        #[allow(clippy::unnecessary_cast)]
        impl $crate::types::NumberValue for $name {
            fn value_type(&self) -> $crate::types::ValueType {
                Self::VALUE_TYPE
            }

            fn as_double(&self) -> f64 {
                self.0 as f64
            }

            fn as_float(&self) -> f32 {
                self.0 as f32
            }

            fn as_long(&self) -> i64 {
                self.0 as i64
            }

            fn as_int(&self) -> i32 {
                self.0 as i32
            }

            fn as_short(&self) -> i16 {
                self.0 as i16
            }

            fn as_byte(&self) -> i8 {
                self.0 as i8
            }

            fn as_byte_array(&self) -> Vec<u8> {
                self.to_bytes().to_vec()
            }
        }
    };
}

pub(crate) use number_value;
