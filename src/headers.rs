use crate::flags::Flags;
use crate::helpers::list_tokens;
use crate::types::HeaderState;

/// Header names that change how a message is framed
pub const SPECIAL_HEADERS: [(&str, HeaderState); 5] = [
    ("connection", HeaderState::Connection),
    ("content-length", HeaderState::ContentLength),
    ("proxy-connection", HeaderState::Connection),
    ("transfer-encoding", HeaderState::TransferEncoding),
    ("upgrade", HeaderState::Upgrade),
];

/// Get the header kind for an already lowercased header name.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn header_state(name: &[u8]) -> HeaderState {
    match (name.len(), name.first()) {
        (7, Some(b'u')) if name == b"upgrade" => HeaderState::Upgrade,
        (10, Some(b'c')) if name == b"connection" => HeaderState::Connection,
        (14, Some(b'c')) if name == b"content-length" => HeaderState::ContentLength,
        (16, Some(b'p')) if name == b"proxy-connection" => HeaderState::Connection,
        (17, Some(b't')) if name == b"transfer-encoding" => HeaderState::TransferEncoding,
        _ => HeaderState::General,
    }
}

/// Flags announced by the tokens of a `Connection` header value
pub fn connection_tokens(value: &[u8]) -> Flags {
    list_tokens(value)
        .filter_map(connection_token)
        .fold(Flags::empty(), |flags, state| match state {
            HeaderState::ConnectionKeepAlive => flags | Flags::CONNECTION_KEEP_ALIVE,
            HeaderState::ConnectionClose => flags | Flags::CONNECTION_CLOSE,
            HeaderState::ConnectionUpgrade => flags | Flags::CONNECTION_UPGRADE,
            _ => flags,
        })
}

fn connection_token(token: &[u8]) -> Option<HeaderState> {
    if token.eq_ignore_ascii_case(b"keep-alive") {
        Some(HeaderState::ConnectionKeepAlive)
    } else if token.eq_ignore_ascii_case(b"close") {
        Some(HeaderState::ConnectionClose)
    } else if token.eq_ignore_ascii_case(b"upgrade") {
        Some(HeaderState::ConnectionUpgrade)
    } else {
        None
    }
}

/// Check that `chunked` is the final transfer coding
pub fn is_chunked_final(value: &[u8]) -> bool {
    list_tokens(value)
        .last()
        .is_some_and(|coding| coding.eq_ignore_ascii_case(b"chunked"))
}

impl HeaderState {
    /// Refine a name-level kind by looking at the header value.
    ///
    /// `Connection` becomes the kind of its last recognized token,
    /// `TransferEncoding` becomes `TransferEncodingChunked` when chunked is the
    /// final coding. Other kinds are returned unchanged.
    pub fn refine(self, value: &[u8]) -> Self {
        match self {
            Self::Connection => list_tokens(value)
                .filter_map(connection_token)
                .last()
                .unwrap_or(Self::Connection),
            Self::TransferEncoding if is_chunked_final(value) => Self::TransferEncodingChunked,
            other => other,
        }
    }
}
