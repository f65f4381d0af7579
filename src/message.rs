//! Per-message framing state.
//!
//! The parser engine owns one `Message` per connection and feeds it the
//! method, headers and status it has parsed. `Message` answers the framing
//! questions: is there a body, how is it delimited, can the connection be
//! reused, and is it safe to stop at end-of-stream.

use crate::checkers::{check_header_name, check_header_value, parse_content_length};
use crate::error::{Errno, Result};
use crate::flags::Flags;
use crate::headers::{connection_tokens, header_state};
use crate::types::{Finish, HeaderState, MessageType, Mode};

/// How the body following the headers is delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFraming {
    /// No body; the next message starts right after the headers
    None,
    /// The rest of the stream belongs to another protocol
    Upgrade,
    Chunked,
    /// Body of exactly this many bytes
    Identity(u64),
    /// Body runs until the connection closes
    Eof,
}

#[derive(Debug, Clone, Default)]
pub struct Message {
    pub kind: MessageType,
    pub mode: Mode,
    pub flags: Flags,
    pub header_state: HeaderState,
    pub http_major: u8,
    pub http_minor: u8,
    pub status_code: u16,
    pub content_length: u64,
    pub upgrade: bool,
    pub finish: Finish,
}

impl Message {
    pub fn new(kind: MessageType, mode: Mode) -> Self {
        Self {
            kind,
            mode,
            ..Self::default()
        }
    }

    /// Relax the content-length / transfer-encoding conflict checks.
    /// The setting survives message resets.
    pub fn set_lenient(&mut self, lenient: bool) {
        self.flags.set(Flags::LENIENT, lenient);
    }

    pub fn on_message_begin(&mut self) {
        self.finish = Finish::Unsafe;
    }

    pub fn on_method(&mut self, method: &[u8]) {
        self.flags.set(Flags::METHOD_CONNECT, method == b"CONNECT");
    }

    /// Record one header. `name` must already be lowercased.
    ///
    /// Returns the refined header kind.
    pub fn on_header(&mut self, name: &[u8], value: &[u8]) -> Result<HeaderState> {
        check_header_name(name, self.mode)?;
        check_header_value(value)?;

        let state = header_state(name).refine(value);
        match state.base() {
            HeaderState::Connection => self.flags |= connection_tokens(value),
            HeaderState::ContentLength => {
                if self.flags.contains(Flags::CONTENT_LENGTH) {
                    return Err(Errno::UnexpectedContentLength);
                }
                if self.flags.contains(Flags::TRANSFER_ENCODING) && !self.flags.is_lenient() {
                    return Err(Errno::UnexpectedContentLength);
                }
                self.content_length = parse_content_length(value)?;
                self.flags.insert(Flags::CONTENT_LENGTH);
            }
            HeaderState::TransferEncoding => {
                if self.flags.contains(Flags::CONTENT_LENGTH) && !self.flags.is_lenient() {
                    return Err(Errno::UnexpectedContentLength);
                }
                let chunked = state == HeaderState::TransferEncodingChunked;
                // a coding applied after chunked makes the body length unknowable
                if self.flags.contains(Flags::CHUNKED) && !chunked && !self.flags.is_lenient() {
                    return Err(Errno::InvalidTransferEncoding);
                }
                self.flags.insert(Flags::TRANSFER_ENCODING);
                if chunked {
                    self.flags.insert(Flags::CHUNKED);
                }
            }
            HeaderState::Upgrade => self.flags.insert(Flags::UPGRADE),
            _ => {}
        }

        self.header_state = state;
        Ok(state)
    }

    /// Decide whether the message switches protocols.
    /// Call once all headers are known, before the headers-complete callback.
    pub fn before_headers_complete(&mut self) {
        self.upgrade = if self
            .flags
            .contains(Flags::UPGRADE | Flags::CONNECTION_UPGRADE)
        {
            // Responses only switch on 101; otherwise the header just announces support
            self.kind == MessageType::Request || self.status_code == 101
        } else {
            self.flags.contains(Flags::METHOD_CONNECT)
        };
    }

    /// Pick the body framing (RFC 7230 section 3.3.3).
    pub fn after_headers_complete(&mut self) -> Result<BodyFraming> {
        let has_body = self.flags.contains(Flags::CHUNKED) || self.content_length > 0;
        if self.upgrade
            && (self.flags.contains(Flags::METHOD_CONNECT)
                || self.flags.contains(Flags::SKIPBODY)
                || !has_body)
        {
            return Ok(BodyFraming::Upgrade);
        }

        if self.flags.contains(Flags::SKIPBODY) {
            return Ok(BodyFraming::None);
        }
        if self.flags.contains(Flags::CHUNKED) {
            return Ok(BodyFraming::Chunked);
        }
        if self.flags.contains(Flags::TRANSFER_ENCODING) {
            // chunked is not the final coding
            if self.kind == MessageType::Request && !self.flags.is_lenient() {
                return Err(Errno::InvalidTransferEncoding);
            }
            return Ok(self.read_until_eof());
        }
        if !self.flags.contains(Flags::CONTENT_LENGTH) {
            if self.needs_eof() {
                return Ok(self.read_until_eof());
            }
            return Ok(BodyFraming::None);
        }
        if self.content_length == 0 {
            return Ok(BodyFraming::None);
        }
        Ok(BodyFraming::Identity(self.content_length))
    }

    fn read_until_eof(&mut self) -> BodyFraming {
        self.finish = Finish::SafeWithCb;
        BodyFraming::Eof
    }

    /// Whether the body can only be delimited by closing the connection
    pub fn needs_eof(&self) -> bool {
        if self.kind == MessageType::Request {
            return false;
        }

        // RFC 2616 section 4.4: 1xx, 204, 304 and responses to HEAD have no body
        if self.status_code / 100 == 1
            || self.status_code == 204
            || self.status_code == 304
            || self.flags.contains(Flags::SKIPBODY)
        {
            return false;
        }

        if self.flags.contains(Flags::TRANSFER_ENCODING) && !self.flags.contains(Flags::CHUNKED) {
            return true;
        }

        !self
            .flags
            .intersects(Flags::CHUNKED | Flags::CONTENT_LENGTH)
    }

    pub fn should_keep_alive(&self) -> bool {
        if self.http_major > 0 && self.http_minor > 0 {
            // HTTP/1.1
            if self.flags.contains(Flags::CONNECTION_CLOSE) {
                return false;
            }
        } else if !self.flags.contains(Flags::CONNECTION_KEEP_ALIVE) {
            // HTTP/1.0 or earlier
            return false;
        }

        !self.needs_eof()
    }

    /// Finish the current message and prepare for the next one.
    ///
    /// Returns whether the connection may be reused. Loose-mode engines may
    /// ignore the answer.
    pub fn after_message_complete(&mut self) -> bool {
        let keep_alive = self.should_keep_alive();
        self.finish = Finish::Safe;
        self.flags = self.flags.reset_for_next_message();
        self.header_state = HeaderState::General;
        self.content_length = 0;
        self.upgrade = false;
        keep_alive
    }

    /// Check whether the stream may end here.
    ///
    /// `Ok(true)` means the message was delimited by EOF and must now be
    /// completed; `Ok(false)` means there is nothing pending.
    pub fn check_eof(&self) -> Result<bool> {
        match self.finish {
            Finish::Safe => Ok(false),
            Finish::SafeWithCb => Ok(true),
            Finish::Unsafe => Err(Errno::InvalidEofState),
        }
    }
}
