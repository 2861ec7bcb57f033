use crate::types::number::number_value;

number_value! {
    /// A signed 64-bit integer reading.
    ///
    /// The value is immutable once built. It can be created from a native
    /// `i64` (never fails) or parsed from a decimal literal with an optional
    /// leading `+` or `-` and no surrounding whitespace. Parsing fails with
    /// [`Error::NumericFormat`](crate::Error::NumericFormat) for empty input,
    /// stray characters or a magnitude outside the `i64` range.
    ///
    /// # Binary form
    /// Exactly 8 bytes, two's complement, most significant byte first.
    ///
    /// # Examples
    /// 1000    // 00 00 00 00 00 00 03 E8
    /// -1      // FF FF FF FF FF FF FF FF
    LongValue(i64) => Long, crate::parser::integer::<i64>
}
