use chrono::{DateTime, Utc};

use crate::{
    error::{self, Result},
    types::{Flag, Value},
};

/// A reading or a logged entry: a value, the time it was taken and its
/// quality flag.
///
/// Records are immutable. A record flagged [`Flag::Valid`] always holds a
/// value, any other flag may come without one.
#[derive(Debug, PartialEq, Clone)]
pub struct Record {
    value: Option<Value>,
    timestamp: Option<i64>,
    flag: Flag,
}

impl Record {
    /// Creates a valid record. `timestamp` is in milliseconds since the Unix epoch.
    pub fn new(value: Value, timestamp: Option<i64>) -> Self {
        Self {
            value: Some(value),
            timestamp,
            flag: Flag::Valid,
        }
    }

    /// Creates a record with an explicit flag.
    ///
    /// # Errors
    /// Returns `Error::InvalidRecord` if `flag` is `Valid` but there is no value.
    pub fn with_flag(value: Option<Value>, timestamp: Option<i64>, flag: Flag) -> Result<Self> {
        if value.is_none() && flag == Flag::Valid {
            return error::InvalidRecord {
                reason: "a valid record must hold a value",
            }
            .fail();
        }

        Ok(Self {
            value,
            timestamp,
            flag,
        })
    }

    /// Creates a record without value and timestamp carrying an error flag.
    ///
    /// # Errors
    /// Returns `Error::InvalidRecord` if `flag` is `Valid`.
    pub fn invalid(flag: Flag) -> Result<Self> {
        if flag == Flag::Valid {
            return error::InvalidRecord {
                reason: "flag must indicate an error",
            }
            .fail();
        }

        Self::with_flag(None, None, flag)
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn flag(&self) -> Flag {
        self.flag
    }

    /// The timestamp as a UTC date-time, `None` if absent or out of range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::from_timestamp_millis)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "value: {value}; ")?,
            None => write!(f, "value: none; ")?,
        }
        match self.timestamp {
            Some(timestamp) => write!(f, "timestamp: {timestamp}; ")?,
            None => write!(f, "timestamp: none; ")?,
        }
        write!(f, "flag: {}", self.flag)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn test_valid_record() {
        let record = Record::new(Value::from(1000_i64), Some(1_700_000_000_000));

        assert_eq!(record.flag(), Flag::Valid);
        assert_eq!(record.value(), Some(&Value::from(1000_i64)));
        assert_eq!(
            record.timestamp_utc().map(|time| time.to_rfc3339()),
            Some("2023-11-14T22:13:20+00:00".to_string())
        );
        assert_eq!(
            record.to_string(),
            "value: 1000; timestamp: 1700000000000; flag: VALID"
        );
    }

    #[test]
    fn test_record_flag_rules() {
        struct TestCase {
            name: &'static str,
            value: Option<Value>,
            flag: Flag,
            expected: bool,
        }

        let test_cases = [
            TestCase {
                name: "valid flag with value",
                value: Some(Value::from(true)),
                flag: Flag::Valid,
                expected: true,
            },
            TestCase {
                name: "valid flag without value",
                value: None,
                flag: Flag::Valid,
                expected: false,
            },
            TestCase {
                name: "error flag without value",
                value: None,
                flag: Flag::Timeout,
                expected: true,
            },
            TestCase {
                name: "error flag with value",
                value: Some(Value::from(f64::NAN)),
                flag: Flag::ValueIsNan,
                expected: true,
            },
        ];

        for case in test_cases {
            let result = Record::with_flag(case.value, None, case.flag);
            assert_eq!(
                result.is_ok(),
                case.expected,
                "Test '{}' failed: got: {:?}",
                case.name,
                result
            );
        }
    }

    #[test]
    fn test_invalid_record() {
        let record = Record::invalid(Flag::DriverErrorReadFailure).unwrap();

        assert_eq!(record.value(), None);
        assert_eq!(record.timestamp_utc(), None);
        assert_eq!(
            record.to_string(),
            "value: none; timestamp: none; flag: DRIVER_ERROR_READ_FAILURE"
        );
        assert!(matches!(
            Record::invalid(Flag::Valid),
            Err(Error::InvalidRecord { .. })
        ));
    }
}
