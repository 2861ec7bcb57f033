use crate::error::{self, Result};

/// Quality flag attached to every record.
///
/// `Valid` marks a usable reading, every other flag explains why a record
/// carries no (trustworthy) value. Each flag has a stable numeric code used
/// when records are persisted or sent over the wire.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Flag {
    #[default]
    Valid,
    Timeout,
    UnknownError,
    DeviceOrInterfaceBusy,
    AccessMethodNotSupported,
    NoValueReceivedYet,
    Connecting,
    WaitingForConnectionRetry,
    Disconnecting,
    DriverUnavailable,
    SamplingAndListeningDisabled,
    Disabled,
    ChannelDeleted,
    StartedLateAndTimedOut,
    DriverThrewUnknownException,
    CommDeviceNotConnected,
    CannotWriteNullValue,
    DriverErrorChannelWithThisAddressNotFound,
    DriverErrorChannelAddressSyntaxInvalid,
    DriverErrorChannelNotAccessible,
    DriverErrorChannelTemporarilyNotAccessible,
    DriverErrorChannelValueTypeConversionException,
    DriverErrorSamplingGroupNotFound,
    DriverErrorSamplingGroupNotAccessible,
    DriverErrorChannelNotPartOfSamplingGroup,
    DriverErrorTimeout,
    DriverErrorReadFailure,
    DriverErrorUnspecified,
    InfeasibleToSampleChannelGroupInOneRequest,
    DriverErrorDecodingResponseFailed,
    ConnectionException,
    DataLoggingNotActive,
    ValueIsNan,
    ValueIsInfinity,
}

impl Flag {
    pub const ALL: [Flag; 34] = [
        Flag::Valid,
        Flag::Timeout,
        Flag::UnknownError,
        Flag::DeviceOrInterfaceBusy,
        Flag::AccessMethodNotSupported,
        Flag::NoValueReceivedYet,
        Flag::Connecting,
        Flag::WaitingForConnectionRetry,
        Flag::Disconnecting,
        Flag::DriverUnavailable,
        Flag::SamplingAndListeningDisabled,
        Flag::Disabled,
        Flag::ChannelDeleted,
        Flag::StartedLateAndTimedOut,
        Flag::DriverThrewUnknownException,
        Flag::CommDeviceNotConnected,
        Flag::CannotWriteNullValue,
        Flag::DriverErrorChannelWithThisAddressNotFound,
        Flag::DriverErrorChannelAddressSyntaxInvalid,
        Flag::DriverErrorChannelNotAccessible,
        Flag::DriverErrorChannelTemporarilyNotAccessible,
        Flag::DriverErrorChannelValueTypeConversionException,
        Flag::DriverErrorSamplingGroupNotFound,
        Flag::DriverErrorSamplingGroupNotAccessible,
        Flag::DriverErrorChannelNotPartOfSamplingGroup,
        Flag::DriverErrorTimeout,
        Flag::DriverErrorReadFailure,
        Flag::DriverErrorUnspecified,
        Flag::InfeasibleToSampleChannelGroupInOneRequest,
        Flag::DriverErrorDecodingResponseFailed,
        Flag::ConnectionException,
        Flag::DataLoggingNotActive,
        Flag::ValueIsNan,
        Flag::ValueIsInfinity,
    ];

    pub fn code(&self) -> u8 {
        match self {
            Flag::Valid => 1,
            Flag::Timeout => 2,
            Flag::UnknownError => 3,
            Flag::DeviceOrInterfaceBusy => 5,
            Flag::AccessMethodNotSupported => 6,
            Flag::NoValueReceivedYet => 7,
            Flag::Connecting => 8,
            Flag::WaitingForConnectionRetry => 9,
            Flag::Disconnecting => 10,
            Flag::DriverUnavailable => 11,
            Flag::SamplingAndListeningDisabled => 12,
            Flag::Disabled => 13,
            Flag::ChannelDeleted => 14,
            Flag::StartedLateAndTimedOut => 15,
            Flag::DriverThrewUnknownException => 16,
            Flag::CommDeviceNotConnected => 17,
            Flag::CannotWriteNullValue => 18,
            Flag::DriverErrorChannelWithThisAddressNotFound => 19,
            Flag::DriverErrorChannelAddressSyntaxInvalid => 20,
            Flag::DriverErrorChannelNotAccessible => 21,
            Flag::DriverErrorChannelTemporarilyNotAccessible => 22,
            Flag::DriverErrorChannelValueTypeConversionException => 23,
            Flag::DriverErrorSamplingGroupNotFound => 24,
            Flag::DriverErrorSamplingGroupNotAccessible => 25,
            Flag::DriverErrorChannelNotPartOfSamplingGroup => 26,
            Flag::DriverErrorTimeout => 27,
            Flag::DriverErrorReadFailure => 28,
            Flag::DriverErrorUnspecified => 29,
            Flag::InfeasibleToSampleChannelGroupInOneRequest => 30,
            Flag::DriverErrorDecodingResponseFailed => 31,
            Flag::ConnectionException => 32,
            Flag::DataLoggingNotActive => 33,
            Flag::ValueIsNan => 50,
            Flag::ValueIsInfinity => 51,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.code() == code)
            .ok_or_else(|| error::UnknownFlag { code }.build())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Valid => "VALID",
            Flag::Timeout => "TIMEOUT",
            Flag::UnknownError => "UNKNOWN_ERROR",
            Flag::DeviceOrInterfaceBusy => "DEVICE_OR_INTERFACE_BUSY",
            Flag::AccessMethodNotSupported => "ACCESS_METHOD_NOT_SUPPORTED",
            Flag::NoValueReceivedYet => "NO_VALUE_RECEIVED_YET",
            Flag::Connecting => "CONNECTING",
            Flag::WaitingForConnectionRetry => "WAITING_FOR_CONNECTION_RETRY",
            Flag::Disconnecting => "DISCONNECTING",
            Flag::DriverUnavailable => "DRIVER_UNAVAILABLE",
            Flag::SamplingAndListeningDisabled => "SAMPLING_AND_LISTENING_DISABLED",
            Flag::Disabled => "DISABLED",
            Flag::ChannelDeleted => "CHANNEL_DELETED",
            Flag::StartedLateAndTimedOut => "STARTED_LATE_AND_TIMED_OUT",
            Flag::DriverThrewUnknownException => "DRIVER_THREW_UNKNOWN_EXCEPTION",
            Flag::CommDeviceNotConnected => "COMM_DEVICE_NOT_CONNECTED",
            Flag::CannotWriteNullValue => "CANNOT_WRITE_NULL_VALUE",
            Flag::DriverErrorChannelWithThisAddressNotFound => {
                "DRIVER_ERROR_CHANNEL_WITH_THIS_ADDRESS_NOT_FOUND"
            }
            Flag::DriverErrorChannelAddressSyntaxInvalid => {
                "DRIVER_ERROR_CHANNEL_ADDRESS_SYNTAX_INVALID"
            }
            Flag::DriverErrorChannelNotAccessible => "DRIVER_ERROR_CHANNEL_NOT_ACCESSIBLE",
            Flag::DriverErrorChannelTemporarilyNotAccessible => {
                "DRIVER_ERROR_CHANNEL_TEMPORARILY_NOT_ACCESSIBLE"
            }
            Flag::DriverErrorChannelValueTypeConversionException => {
                "DRIVER_ERROR_CHANNEL_VALUE_TYPE_CONVERSION_EXCEPTION"
            }
            Flag::DriverErrorSamplingGroupNotFound => "DRIVER_ERROR_SAMPLING_GROUP_NOT_FOUND",
            Flag::DriverErrorSamplingGroupNotAccessible => {
                "DRIVER_ERROR_SAMPLING_GROUP_NOT_ACCESSIBLE"
            }
            Flag::DriverErrorChannelNotPartOfSamplingGroup => {
                "DRIVER_ERROR_CHANNEL_NOT_PART_OF_SAMPLING_GROUP"
            }
            Flag::DriverErrorTimeout => "DRIVER_ERROR_TIMEOUT",
            Flag::DriverErrorReadFailure => "DRIVER_ERROR_READ_FAILURE",
            Flag::DriverErrorUnspecified => "DRIVER_ERROR_UNSPECIFIED",
            Flag::InfeasibleToSampleChannelGroupInOneRequest => {
                "INFEASIBLE_TO_SAMPLE_CHANNEL_GROUP_IN_ONE_REQUEST"
            }
            Flag::DriverErrorDecodingResponseFailed => "DRIVER_ERROR_DECODING_RESPONSE_FAILED",
            Flag::ConnectionException => "CONNECTION_EXCEPTION",
            Flag::DataLoggingNotActive => "DATA_LOGGING_NOT_ACTIVE",
            Flag::ValueIsNan => "VALUE_IS_NAN",
            Flag::ValueIsInfinity => "VALUE_IS_INFINITY",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
