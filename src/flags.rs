use bitflags::bitflags;

bitflags! {
    /// Connection and encoding state observed while parsing one message.
    ///
    /// Bit positions are stable; the raw `u16` may be exposed to hosts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u16 {
        const CONNECTION_KEEP_ALIVE = 1 << 0;
        const CONNECTION_CLOSE = 1 << 1;
        const CONNECTION_UPGRADE = 1 << 2;
        const CHUNKED = 1 << 3;
        const UPGRADE = 1 << 4;
        const CONTENT_LENGTH = 1 << 5;
        /// Response to a HEAD request, or a body the host chose to skip
        const SKIPBODY = 1 << 6;
        const TRAILING = 1 << 7;
        /// Relax framing checks; survives message reset
        const LENIENT = 1 << 8;
        const TRANSFER_ENCODING = 1 << 9;
        const METHOD_CONNECT = 1 << 10;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Flags {
    /// Flags carried into the next message on the same connection
    pub const fn reset_for_next_message(self) -> Self {
        self.intersection(Self::LENIENT)
    }

    pub const fn is_lenient(self) -> bool {
        self.contains(Self::LENIENT)
    }
}
