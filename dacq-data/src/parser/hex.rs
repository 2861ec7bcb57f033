use std::str;

use nom::{
    AsChar, IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::multispace0,
    multi::many0,
    sequence::terminated,
};

/// Parses a sequence of hexadecimal byte pairs.
///
/// Every byte is written as exactly two hex digits in either letter case.
/// Whitespace may separate the pairs (`00 03 E8`) or be left out (`0003e8`).
pub fn hex_bytes(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let hex_byte = take_while_m_n(2, 2, |c: u8| c.is_hex_digit()).map_res(|pair: &[u8]| {
        let pair = str::from_utf8(pair).unwrap_or_default();
        u8::from_str_radix(pair, 16)
    });

    let (remaining, _) = multispace0(input)?;
    many0(terminated(hex_byte, multispace0)).parse(remaining)
}
