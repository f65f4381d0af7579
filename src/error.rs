/// Parser error codes.
///
/// The numeric values are stable and may be handed across the parser
/// boundary as raw integers. `Ok` (0) means no error has been recorded.
/// Codes from `User` upwards are reserved for host-defined errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Errno {
    #[default]
    Ok = 0,
    Internal = 1,
    /// A construct only accepted in loose mode was seen in strict mode
    Strict = 2,
    LfExpected = 3,
    UnexpectedContentLength = 4,
    /// Data received after a connection was marked closed
    ClosedConnection = 5,
    InvalidMethod = 6,
    InvalidUrl = 7,
    InvalidConstant = 8,
    InvalidVersion = 9,
    InvalidHeaderToken = 10,
    InvalidContentLength = 11,
    InvalidChunkSize = 12,
    InvalidStatus = 13,
    InvalidEofState = 14,
    InvalidTransferEncoding = 15,

    CbMessageBegin = 16,
    CbHeadersComplete = 17,
    CbMessageComplete = 18,
    CbChunkHeader = 19,
    CbChunkComplete = 20,

    Paused = 21,
    PausedUpgrade = 22,

    User = 23,
}

impl Errno {
    /// Every code in numeric order
    pub const ALL: [Self; 24] = [
        Self::Ok,
        Self::Internal,
        Self::Strict,
        Self::LfExpected,
        Self::UnexpectedContentLength,
        Self::ClosedConnection,
        Self::InvalidMethod,
        Self::InvalidUrl,
        Self::InvalidConstant,
        Self::InvalidVersion,
        Self::InvalidHeaderToken,
        Self::InvalidContentLength,
        Self::InvalidChunkSize,
        Self::InvalidStatus,
        Self::InvalidEofState,
        Self::InvalidTransferEncoding,
        Self::CbMessageBegin,
        Self::CbHeadersComplete,
        Self::CbMessageComplete,
        Self::CbChunkHeader,
        Self::CbChunkComplete,
        Self::Paused,
        Self::PausedUpgrade,
        Self::User,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a raw code back to its kind.
    /// Anything at or above `User` is a host-defined error and maps to `User`.
    pub const fn from_code(code: u8) -> Self {
        if code >= Self::User as u8 {
            return Self::User;
        }
        Self::ALL[code as usize]
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Error raised because a user callback asked to abort
    pub const fn is_callback(self) -> bool {
        matches!(
            self,
            Self::CbMessageBegin
                | Self::CbHeadersComplete
                | Self::CbMessageComplete
                | Self::CbChunkHeader
                | Self::CbChunkComplete
        )
    }

    /// Parser stopped on request and may be resumed
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused | Self::PausedUpgrade)
    }

    /// Canonical upper-case identifier, e.g. `HPE_INVALID_URL`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "HPE_OK",
            Self::Internal => "HPE_INTERNAL",
            Self::Strict => "HPE_STRICT",
            Self::LfExpected => "HPE_LF_EXPECTED",
            Self::UnexpectedContentLength => "HPE_UNEXPECTED_CONTENT_LENGTH",
            Self::ClosedConnection => "HPE_CLOSED_CONNECTION",
            Self::InvalidMethod => "HPE_INVALID_METHOD",
            Self::InvalidUrl => "HPE_INVALID_URL",
            Self::InvalidConstant => "HPE_INVALID_CONSTANT",
            Self::InvalidVersion => "HPE_INVALID_VERSION",
            Self::InvalidHeaderToken => "HPE_INVALID_HEADER_TOKEN",
            Self::InvalidContentLength => "HPE_INVALID_CONTENT_LENGTH",
            Self::InvalidChunkSize => "HPE_INVALID_CHUNK_SIZE",
            Self::InvalidStatus => "HPE_INVALID_STATUS",
            Self::InvalidEofState => "HPE_INVALID_EOF_STATE",
            Self::InvalidTransferEncoding => "HPE_INVALID_TRANSFER_ENCODING",
            Self::CbMessageBegin => "HPE_CB_MESSAGE_BEGIN",
            Self::CbHeadersComplete => "HPE_CB_HEADERS_COMPLETE",
            Self::CbMessageComplete => "HPE_CB_MESSAGE_COMPLETE",
            Self::CbChunkHeader => "HPE_CB_CHUNK_HEADER",
            Self::CbChunkComplete => "HPE_CB_CHUNK_COMPLETE",
            Self::Paused => "HPE_PAUSED",
            Self::PausedUpgrade => "HPE_PAUSED_UPGRADE",
            Self::User => "HPE_USER",
        }
    }
}

impl From<Errno> for u8 {
    fn from(errno: Errno) -> Self {
        errno.code()
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Ok => "Success",
            Self::Internal => "Internal parser error",
            Self::Strict => "Strict mode assertion failed",
            Self::LfExpected => "Expected LF after CR",
            Self::UnexpectedContentLength => "Unexpected Content-Length header",
            Self::ClosedConnection => "Data after connection close",
            Self::InvalidMethod => "Invalid method",
            Self::InvalidUrl => "Invalid URL",
            Self::InvalidConstant => "Invalid constant string",
            Self::InvalidVersion => "Invalid HTTP version",
            Self::InvalidHeaderToken => "Invalid header token",
            Self::InvalidContentLength => "Invalid Content-Length",
            Self::InvalidChunkSize => "Invalid chunk size",
            Self::InvalidStatus => "Invalid status code",
            Self::InvalidEofState => "Invalid EOF state",
            Self::InvalidTransferEncoding => "Invalid Transfer-Encoding",
            Self::CbMessageBegin => "on_message_begin callback error",
            Self::CbHeadersComplete => "on_headers_complete callback error",
            Self::CbMessageComplete => "on_message_complete callback error",
            Self::CbChunkHeader => "on_chunk_header callback error",
            Self::CbChunkComplete => "on_chunk_complete callback error",
            Self::Paused => "Parser is paused",
            Self::PausedUpgrade => "Parser is paused on upgrade",
            Self::User => "User callback error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Errno {}

/// Result type for checks that report an `Errno`
pub type Result<T> = core::result::Result<T, Errno>;
