use snafu::Snafu;

use crate::types::ValueType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Can't parse {input:?} as {value_type} value"))]
    NumericFormat {
        input: String,
        value_type: ValueType,
    },

    #[snafu(display("Can't convert {from} value into {to}"))]
    TypeConversion { from: ValueType, to: ValueType },

    #[snafu(display(
        "Unexpected byte length for {value_type} value. Expected = {expected}, got = {got}"
    ))]
    InvalidLength {
        value_type: ValueType,
        expected: usize,
        got: usize,
    },

    #[snafu(display("String value is not valid UTF-8"))]
    InvalidUtf8 { source: std::string::FromUtf8Error },

    #[snafu(display("Invalid hexadecimal byte string: {input:?}"))]
    InvalidHex { input: String },

    #[snafu(display("Unknown value type name: {name}"))]
    UnknownValueType { name: String },

    #[snafu(display("Unknown flag code: {code}"))]
    UnknownFlag { code: u8 },

    #[snafu(display("Invalid record: {reason}"))]
    InvalidRecord { reason: &'static str },
}
