mod error;
mod parser;
mod types;

pub use error::{Error, Result};
pub use types::{
    ByteValue, DoubleValue, Flag, FloatValue, IntValue, LongValue, NumberValue, Record,
    ShortValue, Value, ValueType, format_hex, parse_hex,
};
