use crate::types::number::number_value;

number_value! {
    /// A signed 8-bit integer reading.
    ByteValue(i8) => Byte, crate::parser::integer::<i8>
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::NumberValue;

    #[test]
    fn test_byte_value() {
        let value = ByteValue::new(-1);

        assert_eq!(value.to_bytes(), [0xFF]);
        assert_eq!(value.as_int(), -1);
        assert!(value.as_boolean());
        assert!("128".parse::<ByteValue>().is_err());
    }
}
