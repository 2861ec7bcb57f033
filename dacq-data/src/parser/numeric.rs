use std::str::FromStr;

use nom::{
    IResult, ParseTo, Parser,
    character::complete::{digit1, one_of},
    combinator::{opt, recognize},
    number::complete::recognize_float_or_exceptions,
    sequence::preceded,
};

/// Parses a decimal integer literal with an optional leading sign.
///
/// Only `[+-]?[0-9]+` is recognized. A literal whose magnitude does not fit
/// into `T` is rejected instead of being truncated.
pub fn integer<T: FromStr>(input: &[u8]) -> IResult<&[u8], T> {
    let (remaining, num_str) = recognize(preceded(opt(one_of("+-")), digit1)).parse(input)?;

    let num = num_str.parse_to().ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;

    Ok((remaining, num))
}

/// Parses a floating point literal.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent (`12.5`, `.5`, `-1e3`) as well as the `nan`, `inf` and `infinity`
/// keywords in any letter case.
pub fn real<T: FromStr>(input: &[u8]) -> IResult<&[u8], T> {
    let (remaining, num_str) = recognize_float_or_exceptions(input)?;

    let num = num_str.parse_to().ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;

    Ok((remaining, num))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integer_parser() {
        #[derive(Debug, PartialEq)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: bool,
            expected_result: Option<i64>,
            expected_remainder: Option<&'static [u8]>,
        }

        let test_cases = [
            TestCase {
                name: "valid integer '1000'",
                input: b"1000",
                expected: true,
                expected_result: Some(1000),
                expected_remainder: Some(b""),
            },
            TestCase {
                name: "valid negative integer '-1'",
                input: b"-1",
                expected: true,
                expected_result: Some(-1),
                expected_remainder: Some(b""),
            },
            TestCase {
                name: "valid positive integer '+789'",
                input: b"+789",
                expected: true,
                expected_result: Some(789),
                expected_remainder: Some(b""),
            },
            TestCase {
                name: "valid maximum '9223372036854775807'",
                input: b"9223372036854775807",
                expected: true,
                expected_result: Some(i64::MAX),
                expected_remainder: Some(b""),
            },
            TestCase {
                name: "valid minimum '-9223372036854775808'",
                input: b"-9223372036854775808",
                expected: true,
                expected_result: Some(i64::MIN),
                expected_remainder: Some(b""),
            },
            TestCase {
                name: "overflow '9223372036854775808'",
                input: b"9223372036854775808",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "underflow '-9223372036854775809'",
                input: b"-9223372036854775809",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid 'abc'",
                input: b"abc",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid empty input",
                input: b"",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid sign only '-'",
                input: b"-",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid double sign '+-5'",
                input: b"+-5",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "invalid leading whitespace ' 5'",
                input: b" 5",
                expected: false,
                expected_result: None,
                expected_remainder: None,
            },
            TestCase {
                name: "integer with fraction '12.5'",
                input: b"12.5",
                expected: true,
                expected_result: Some(12),
                expected_remainder: Some(b".5"),
            },
        ];

        for case in &test_cases {
            let result = integer::<i64>(case.input);
            let success = result.is_ok();
            assert_eq!(
                success, case.expected,
                "Test '{}' failed: expected success: {}, got: {}",
                case.name, case.expected, success
            );

            if case.expected {
                let (actual_remainder, result) = match result {
                    Ok((rem, res)) => (rem, res),
                    Err(e) => panic!(
                        "Parsing failed for test '{}', input: {:#?}, error: {e:?}",
                        case.name, case.input
                    ),
                };
                assert_eq!(
                    result,
                    case.expected_result.unwrap(),
                    "Test '{}' failed: expected result: {:?}, got: {:?}",
                    case.name,
                    case.expected_result,
                    result
                );
                assert_eq!(
                    actual_remainder,
                    case.expected_remainder.unwrap(),
                    "Test '{}' failed: expected remainder: {:?}, got: {:?}",
                    case.name,
                    case.expected_remainder.unwrap(),
                    actual_remainder
                );
            }
        }
    }

    #[test]
    fn test_integer_parser_respects_width() {
        assert_eq!(integer::<i8>(b"-128"), Ok((&b""[..], i8::MIN)));
        assert!(integer::<i8>(b"128").is_err());
        assert!(integer::<i16>(b"32768").is_err());
        assert_eq!(integer::<i32>(b"+2147483647"), Ok((&b""[..], i32::MAX)));
    }

    #[test]
    fn test_real_parser() {
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected_result: Option<f64>,
            expected_remainder: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "valid real '12.5'",
                input: b"12.5",
                expected_result: Some(12.5),
                expected_remainder: b"",
            },
            TestCase {
                name: "valid real without integer part '.5'",
                input: b".5",
                expected_result: Some(0.5),
                expected_remainder: b"",
            },
            TestCase {
                name: "valid exponent '-1e3'",
                input: b"-1e3",
                expected_result: Some(-1000.0),
                expected_remainder: b"",
            },
            TestCase {
                name: "valid integer literal '42'",
                input: b"42",
                expected_result: Some(42.0),
                expected_remainder: b"",
            },
            TestCase {
                name: "valid infinity 'inf'",
                input: b"inf",
                expected_result: Some(f64::INFINITY),
                expected_remainder: b"",
            },
            TestCase {
                name: "valid with residual text '1.5x'",
                input: b"1.5x",
                expected_result: Some(1.5),
                expected_remainder: b"x",
            },
            TestCase {
                name: "invalid 'abc'",
                input: b"abc",
                expected_result: None,
                expected_remainder: b"",
            },
            TestCase {
                name: "invalid empty input",
                input: b"",
                expected_result: None,
                expected_remainder: b"",
            },
        ];

        for case in &test_cases {
            let result = real::<f64>(case.input);
            match case.expected_result {
                Some(expected) => {
                    let (remainder, value) = result.unwrap_or_else(|e| {
                        panic!("Parsing failed for test '{}', error: {e:?}", case.name)
                    });
                    assert_eq!(value, expected, "Test '{}' failed", case.name);
                    assert_eq!(
                        remainder, case.expected_remainder,
                        "Test '{}' failed: unexpected remainder",
                        case.name
                    );
                }
                None => assert!(
                    result.is_err(),
                    "Test '{}' failed: expected an error, got: {:?}",
                    case.name,
                    result
                ),
            }
        }
    }

    #[test]
    fn test_real_parser_nan() {
        let (remainder, value) = real::<f64>(b"NaN").unwrap();
        assert!(value.is_nan());
        assert_eq!(remainder, b"");
    }
}
