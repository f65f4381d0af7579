use super::loader::{Failure, HeaderCase, MessageCase, Outcome};
/// Conformance runner
///
/// Walks a raw HTTP/1.x message head line by line using only the public
/// tables and checkers, the way a parser engine would, and compares the
/// framing decision with the fixture.
use http1_grammar::{
    BodyFraming, Errno, Flags, HeaderState, Message, MessageType, Mode, check_line_end,
    check_method, check_url, connection_tokens, header_state, parse_status_code, parse_version,
    trim_ows,
};

/// What the framing logic decided for one message head
#[derive(Debug)]
pub struct Decision {
    pub framing: BodyFraming,
    pub keep_alive: bool,
}

fn next_line(buf: &[u8], mode: Mode) -> Result<(&[u8], &[u8]), Errno> {
    let end = buf
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .ok_or(Errno::LfExpected)?;
    let len = check_line_end(&buf[end..], mode)?;
    Ok((&buf[..end], &buf[end + len..]))
}

fn start_line(message: &mut Message, line: &[u8]) -> Result<(), Errno> {
    let mut parts = line.splitn(3, |&b| b == b' ');
    let first = parts.next().unwrap_or_default();
    let second = parts.next().ok_or(Errno::InvalidVersion)?;
    let third = parts.next().unwrap_or_default();

    match message.kind {
        MessageType::Response => {
            (message.http_major, message.http_minor) = parse_version(first)?;
            message.status_code = parse_status_code(second)?;
        }
        _ => {
            check_method(first)?;
            check_url(second, message.mode)?;
            (message.http_major, message.http_minor) = parse_version(third)?;
            message.on_method(first);
        }
    }
    Ok(())
}

pub fn run_head(message: &mut Message, raw: &[u8]) -> Result<Decision, Errno> {
    message.on_message_begin();

    let (line, mut rest) = next_line(raw, message.mode)?;
    start_line(message, line)?;

    loop {
        let (line, next) = next_line(rest, message.mode)?;
        rest = next;
        if line.is_empty() {
            break;
        }
        let colon = line
            .iter()
            .position(|&b| b == b':')
            .ok_or(Errno::InvalidHeaderToken)?;
        let name = line[..colon].to_ascii_lowercase();
        message.on_header(&name, trim_ows(&line[colon + 1..]))?;
    }

    message.before_headers_complete();
    let framing = message.after_headers_complete()?;
    Ok(Decision {
        framing,
        keep_alive: message.should_keep_alive(),
    })
}

fn parse_kind(kind: &str) -> MessageType {
    match kind {
        "response" => MessageType::Response,
        "request" => MessageType::Request,
        _ => MessageType::Both,
    }
}

fn parse_mode(mode: Option<&str>) -> Mode {
    match mode {
        Some("strict") => Mode::Strict,
        _ => Mode::Loose,
    }
}

pub fn framing_name(framing: BodyFraming) -> String {
    match framing {
        BodyFraming::None => "none".to_string(),
        BodyFraming::Upgrade => "upgrade".to_string(),
        BodyFraming::Chunked => "chunked".to_string(),
        BodyFraming::Identity(len) => format!("identity:{len}"),
        BodyFraming::Eof => "eof".to_string(),
    }
}

pub fn run_message_cases(cases: Vec<MessageCase>) -> Outcome {
    let mut outcome = Outcome::default();
    let mut test_num = 0;

    for case in cases {
        let MessageCase::Message {
            kind,
            mode,
            lenient,
            raw,
            framing,
            keep_alive,
            error,
        } = case
        else {
            continue;
        };
        test_num += 1;

        let mut message = Message::new(parse_kind(&kind), parse_mode(mode.as_deref()));
        message.set_lenient(lenient);
        let mut fail = |field: &str, expected: String, actual: String| {
            outcome.failures.push(Failure {
                test_num,
                input: raw.clone(),
                field: field.to_string(),
                expected,
                actual,
            });
        };

        match (run_head(&mut message, raw.as_bytes()), error) {
            (Err(actual), Some(expected)) if actual.name() == expected => {}
            (Err(actual), expected) => {
                fail(
                    "error",
                    expected.unwrap_or_else(|| "success".to_string()),
                    actual.name().to_string(),
                );
                continue;
            }
            (Ok(decision), Some(expected)) => {
                fail("error", expected, framing_name(decision.framing));
                continue;
            }
            (Ok(decision), None) => {
                let mut ok = true;
                if let Some(expected) = framing {
                    let actual = framing_name(decision.framing);
                    if actual != expected {
                        fail("framing", expected, actual);
                        ok = false;
                    }
                }
                if let Some(expected) = keep_alive {
                    if decision.keep_alive != expected {
                        fail(
                            "keep_alive",
                            expected.to_string(),
                            decision.keep_alive.to_string(),
                        );
                        ok = false;
                    }
                }
                if !ok {
                    continue;
                }
            }
        }
        outcome.passed += 1;
    }

    outcome
}

fn state_name(state: HeaderState) -> &'static str {
    match state {
        HeaderState::General => "GENERAL",
        HeaderState::Connection => "CONNECTION",
        HeaderState::ContentLength => "CONTENT_LENGTH",
        HeaderState::TransferEncoding => "TRANSFER_ENCODING",
        HeaderState::Upgrade => "UPGRADE",
        HeaderState::ConnectionKeepAlive => "CONNECTION_KEEP_ALIVE",
        HeaderState::ConnectionClose => "CONNECTION_CLOSE",
        HeaderState::ConnectionUpgrade => "CONNECTION_UPGRADE",
        HeaderState::TransferEncodingChunked => "TRANSFER_ENCODING_CHUNKED",
    }
}

pub fn run_header_cases(cases: Vec<HeaderCase>) -> Outcome {
    let mut outcome = Outcome::default();
    let mut test_num = 0;

    for case in cases {
        let HeaderCase::Header {
            name,
            value,
            state,
            flags,
        } = case
        else {
            continue;
        };
        test_num += 1;

        let kind = header_state(name.to_ascii_lowercase().as_bytes());
        let actual = state_name(kind.refine(value.as_bytes()));
        if actual != state {
            outcome.failures.push(Failure {
                test_num,
                input: format!("{name}: {value}"),
                field: "state".to_string(),
                expected: state,
                actual: actual.to_string(),
            });
            continue;
        }

        if kind == HeaderState::Connection {
            let expected = flags.iter().fold(Flags::empty(), |acc, name| {
                acc | Flags::from_name(name).unwrap_or(Flags::empty())
            });
            let actual = connection_tokens(value.as_bytes());
            if actual != expected {
                outcome.failures.push(Failure {
                    test_num,
                    input: format!("{name}: {value}"),
                    field: "flags".to_string(),
                    expected: format!("{expected:?}"),
                    actual: format!("{actual:?}"),
                });
                continue;
            }
        }
        outcome.passed += 1;
    }

    outcome
}
