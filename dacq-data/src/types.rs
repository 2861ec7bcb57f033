mod byte;
mod double;
mod flag;
mod float;
mod integer;
mod long;
mod number;
mod record;
mod short;
mod value;
mod value_type;

pub use byte::ByteValue;
pub use double::DoubleValue;
pub use flag::Flag;
pub use float::FloatValue;
pub use integer::IntValue;
pub use long::LongValue;
pub use number::NumberValue;
pub use record::Record;
pub use short::ShortValue;
pub use value::{Value, format_hex, parse_hex};
pub use value_type::ValueType;
