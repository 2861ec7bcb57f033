use crate::types::number::number_value;

number_value! {
    /// A signed 32-bit integer reading, encoded as 4 big-endian bytes.
    IntValue(i32) => Integer, crate::parser::integer::<i32>
}
