use crate::character_sets::{ByteClass, TOKEN_LENIENT, TOKEN_STRICT, URL_CHAR_LENIENT, URL_CHAR_STRICT};

/// Parser strictness, fixed for the lifetime of a parser.
///
/// `Strict` uses the RFC-conformant character classes; `Loose` adds the
/// documented relaxations (tab and form feed in URLs, high-bit bytes in URLs,
/// space in tokens, bare LF line endings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Loose,
    Strict,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loose => "loose",
            Self::Strict => "strict",
        }
    }

    /// URL character class for this mode
    pub const fn url_class(self) -> ByteClass {
        match self {
            Self::Loose => URL_CHAR_LENIENT,
            Self::Strict => URL_CHAR_STRICT,
        }
    }

    /// Header/method token class for this mode
    pub const fn token_class(self) -> ByteClass {
        match self {
            Self::Loose => TOKEN_LENIENT,
            Self::Strict => TOKEN_STRICT,
        }
    }

    #[inline]
    pub const fn is_url_char(self, b: u8) -> bool {
        match self {
            Self::Loose => URL_CHAR_LENIENT.contains(b),
            Self::Strict => URL_CHAR_STRICT.contains(b),
        }
    }

    #[inline]
    pub const fn is_token_char(self, b: u8) -> bool {
        match self {
            Self::Loose => TOKEN_LENIENT.contains(b),
            Self::Strict => TOKEN_STRICT.contains(b),
        }
    }
}

/// Kind of message a parser expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MessageType {
    /// Detect request or response from the first line
    #[default]
    Both = 0,
    Request = 1,
    Response = 2,
}

/// Whether end-of-stream may be treated as the end of the current message.
///
/// Ordering is a severity ranking: `Safe < SafeWithCb < Unsafe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Finish {
    /// Between messages, nothing pending
    #[default]
    Safe = 0,
    /// Body is delimited by EOF; the message completes when the stream ends
    SafeWithCb = 1,
    /// Mid-message; EOF here is an error
    Unsafe = 2,
}

/// Header kind used to switch on framing-relevant parsing rules.
///
/// The first five values come from the header name, the rest are refined
/// after looking at the header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HeaderState {
    #[default]
    General = 0,
    Connection = 1,
    ContentLength = 2,
    TransferEncoding = 3,
    Upgrade = 4,

    ConnectionKeepAlive = 5,
    ConnectionClose = 6,
    ConnectionUpgrade = 7,
    TransferEncodingChunked = 8,
}

impl HeaderState {
    /// Numeric value shared with the engine
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Header kind this state was refined from
    pub const fn base(self) -> Self {
        match self {
            Self::ConnectionKeepAlive | Self::ConnectionClose | Self::ConnectionUpgrade => {
                Self::Connection
            }
            Self::TransferEncodingChunked => Self::TransferEncoding,
            other => other,
        }
    }

    pub const fn is_refined(self) -> bool {
        self as u8 >= Self::ConnectionKeepAlive as u8
    }
}
