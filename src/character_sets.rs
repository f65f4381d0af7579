//! Byte classes from the HTTP/1.1 and URI grammars.
//!
//! Every class is a 256-bit set built at compile time, so membership is a
//! single shift and mask. Strict classes follow RFC 7230 / RFC 2616; the
//! lenient variants add the relaxations loose-mode parsers accept.

/// A set of byte values, one bit per byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteClass {
    bits: [u64; 4],
}

impl ByteClass {
    pub const EMPTY: Self = Self { bits: [0; 4] };

    /// Class containing exactly the given bytes
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut class = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            class = class.with(bytes[i]);
            i += 1;
        }
        class
    }

    /// Class containing `start..=end`
    pub const fn range(start: u8, end: u8) -> Self {
        let mut class = Self::EMPTY;
        if start > end {
            return class;
        }
        let mut b = start;
        loop {
            class = class.with(b);
            if b == end {
                return class;
            }
            b += 1;
        }
    }

    pub const fn with(mut self, b: u8) -> Self {
        self.bits[(b >> 6) as usize] |= 1u64 << (b & 63);
        self
    }

    pub const fn without(mut self, b: u8) -> Self {
        self.bits[(b >> 6) as usize] &= !(1u64 << (b & 63));
        self
    }

    pub const fn union(mut self, other: Self) -> Self {
        let mut i = 0;
        while i < 4 {
            self.bits[i] |= other.bits[i];
            i += 1;
        }
        self
    }

    pub const fn difference(mut self, other: Self) -> Self {
        let mut i = 0;
        while i < 4 {
            self.bits[i] &= !other.bits[i];
            i += 1;
        }
        self
    }

    pub const fn is_subset(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < 4 {
            if self.bits[i] & !other.bits[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    #[inline]
    pub const fn contains(&self, b: u8) -> bool {
        (self.bits[(b >> 6) as usize] >> (b & 63)) & 1 != 0
    }

    pub const fn len(&self) -> usize {
        (self.bits[0].count_ones()
            + self.bits[1].count_ones()
            + self.bits[2].count_ones()
            + self.bits[3].count_ones()) as usize
    }

    pub const fn is_empty(&self) -> bool {
        (self.bits[0] | self.bits[1] | self.bits[2] | self.bits[3]) == 0
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

impl core::fmt::Debug for ByteClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// `A-Z / a-z`
pub const ALPHA: ByteClass = ByteClass::range(b'A', b'Z').union(ByteClass::range(b'a', b'z'));

/// `0-9`
pub const DIGIT: ByteClass = ByteClass::range(b'0', b'9');

pub const ALPHANUM: ByteClass = ALPHA.union(DIGIT);

/// RFC 2396 `mark`
pub const MARK: ByteClass = ByteClass::from_bytes(b"-_.!~*'()");

/// Bytes allowed in the user-info part of an authority
pub const USERINFO: ByteClass = ALPHANUM
    .union(MARK)
    .union(ByteClass::from_bytes(b"%;:&=+$,"));

/// URL bytes accepted in strict mode.
/// `?` and `#` are not members; the URL states treat them as delimiters.
pub const URL_CHAR_STRICT: ByteClass =
    ALPHANUM.union(ByteClass::from_bytes(b"!\"$%&'()*+,-./:;<=>@[\\]^_`{|}~"));

/// Strict URL bytes plus HTAB, form feed and every byte with the high bit set
pub const URL_CHAR_LENIENT: ByteClass = URL_CHAR_STRICT
    .union(ByteClass::from_bytes(b"\t\x0c"))
    .union(ByteClass::range(0x80, 0xFF));

pub const HEX_DIGIT: ByteClass = DIGIT.union(ByteClass::from_bytes(b"abcdefABCDEF"));

/// `tchar`: any VCHAR except the RFC 2616 separators
pub const TOKEN_STRICT: ByteClass = ALPHANUM.union(ByteClass::from_bytes(b"!#$%&'*+-.^_`|~"));

pub const TOKEN_LENIENT: ByteClass = TOKEN_STRICT.with(b' ');

/// HTAB, visible US-ASCII, space and `0x80..=0xFE`; DEL and `0xFF` excluded
pub const HEADER_VALUE_CHAR: ByteClass = ByteClass::range(0x20, 0xFE).without(0x7F).with(b'\t');

/// Header value bytes that can appear inside one `Connection` list element
pub const CONNECTION_TOKEN_CHAR: ByteClass = HEADER_VALUE_CHAR.without(b',');

#[inline]
pub const fn is_alpha(b: u8) -> bool {
    ALPHA.contains(b)
}

#[inline]
pub const fn is_digit(b: u8) -> bool {
    DIGIT.contains(b)
}

#[inline]
pub const fn is_alphanum(b: u8) -> bool {
    ALPHANUM.contains(b)
}

#[inline]
pub const fn is_mark(b: u8) -> bool {
    MARK.contains(b)
}

#[inline]
pub const fn is_userinfo_char(b: u8) -> bool {
    USERINFO.contains(b)
}

#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    HEX_DIGIT.contains(b)
}

#[inline]
pub const fn is_url_char_strict(b: u8) -> bool {
    URL_CHAR_STRICT.contains(b)
}

#[inline]
pub const fn is_url_char_lenient(b: u8) -> bool {
    URL_CHAR_LENIENT.contains(b)
}

#[inline]
pub const fn is_token_strict(b: u8) -> bool {
    TOKEN_STRICT.contains(b)
}

#[inline]
pub const fn is_token_lenient(b: u8) -> bool {
    TOKEN_LENIENT.contains(b)
}

#[inline]
pub const fn is_header_value_char(b: u8) -> bool {
    HEADER_VALUE_CHAR.contains(b)
}

#[inline]
pub const fn is_connection_token_char(b: u8) -> bool {
    CONNECTION_TOKEN_CHAR.contains(b)
}

/// Names every byte class so one can be picked at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alpha,
    Digit,
    Alphanum,
    Mark,
    Userinfo,
    UrlStrict,
    UrlLenient,
    HexDigit,
    TokenStrict,
    TokenLenient,
    HeaderValue,
    ConnectionToken,
}

impl CharClass {
    pub const ALL: [Self; 12] = [
        Self::Alpha,
        Self::Digit,
        Self::Alphanum,
        Self::Mark,
        Self::Userinfo,
        Self::UrlStrict,
        Self::UrlLenient,
        Self::HexDigit,
        Self::TokenStrict,
        Self::TokenLenient,
        Self::HeaderValue,
        Self::ConnectionToken,
    ];

    pub const fn table(self) -> ByteClass {
        match self {
            Self::Alpha => ALPHA,
            Self::Digit => DIGIT,
            Self::Alphanum => ALPHANUM,
            Self::Mark => MARK,
            Self::Userinfo => USERINFO,
            Self::UrlStrict => URL_CHAR_STRICT,
            Self::UrlLenient => URL_CHAR_LENIENT,
            Self::HexDigit => HEX_DIGIT,
            Self::TokenStrict => TOKEN_STRICT,
            Self::TokenLenient => TOKEN_LENIENT,
            Self::HeaderValue => HEADER_VALUE_CHAR,
            Self::ConnectionToken => CONNECTION_TOKEN_CHAR,
        }
    }

    #[inline]
    pub const fn contains(self, b: u8) -> bool {
        self.table().contains(b)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "ALPHA",
            Self::Digit => "DIGIT",
            Self::Alphanum => "ALPHANUM",
            Self::Mark => "MARK",
            Self::Userinfo => "USERINFO",
            Self::UrlStrict => "URL_CHAR_STRICT",
            Self::UrlLenient => "URL_CHAR_LENIENT",
            Self::HexDigit => "HEX_DIGIT",
            Self::TokenStrict => "TOKEN_STRICT",
            Self::TokenLenient => "TOKEN_LENIENT",
            Self::HeaderValue => "HEADER_VALUE_CHAR",
            Self::ConnectionToken => "CONNECTION_TOKEN_CHAR",
        }
    }
}
