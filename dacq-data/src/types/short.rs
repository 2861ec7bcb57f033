use crate::types::number::number_value;

number_value! {
    /// A signed 16-bit integer reading, as found in a single Modbus register.
    ShortValue(i16) => Short, crate::parser::integer::<i16>
}
