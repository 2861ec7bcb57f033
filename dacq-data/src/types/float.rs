use crate::types::number::number_value;

number_value! {
    /// A single precision floating point reading, encoded as 4 IEEE-754 bytes.
    FloatValue(f32) => Float, crate::parser::real::<f32>
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::NumberValue;

    #[test]
    fn test_float_value() {
        let value: FloatValue = "1.5".parse().unwrap();

        assert_eq!(value.to_bytes(), [0x3F, 0xC0, 0x00, 0x00]);
        assert_eq!(value.as_double(), 1.5);
        assert_eq!(value.as_short(), 1);
    }
}
