#![cfg_attr(not(feature = "std"), no_std)]

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod digits;
mod error;
mod flags;
mod headers;
mod helpers;
mod message;
mod types;

// Public API
pub use character_sets::{
    ALPHA, ALPHANUM, ByteClass, CONNECTION_TOKEN_CHAR, CharClass, DIGIT, HEADER_VALUE_CHAR,
    HEX_DIGIT, MARK, TOKEN_LENIENT, TOKEN_STRICT, URL_CHAR_LENIENT, URL_CHAR_STRICT, USERINFO,
    is_alpha, is_alphanum, is_connection_token_char, is_digit, is_header_value_char, is_hex_digit,
    is_mark, is_token_lenient, is_token_strict, is_url_char_lenient, is_url_char_strict,
    is_userinfo_char,
};
pub use checkers::{
    check_header_name, check_header_value, check_line_end, check_method, check_url,
    parse_chunk_size, parse_content_length, parse_status_code, parse_version,
};
pub use digits::{checked_digit_value, checked_hex_value, digit_value, hex_value};
pub use error::{Errno, Result};
pub use flags::Flags;
pub use headers::{SPECIAL_HEADERS, connection_tokens, header_state, is_chunked_final};
pub use helpers::{ListTokens, list_tokens, trim_ows};
pub use message::{BodyFraming, Message};
pub use types::{Finish, HeaderState, MessageType, Mode};
