use crate::types::number::number_value;

number_value! {
    /// A double precision floating point reading.
    ///
    /// Encoded as the 8-byte IEEE-754 representation, most significant byte first.
    DoubleValue(f64) => Double, crate::parser::real::<f64>
}
