#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Classification benchmarks: bitset tables vs `matches!` range checks
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use http1_grammar::{
    Message, MessageType, Mode, check_header_value, check_url, header_state, is_token_strict,
    is_url_char_lenient, parse_chunk_size, parse_content_length,
};

const REQUEST_TARGET: &str = "/wiki/Hypertext_Transfer_Protocol?action=history&offset=20";

const REQUEST_HEAD: &[u8] = b"GET /wiki/Hypertext_Transfer_Protocol?action=history&offset=20 HTTP/1.1\r\n\
Host: en.wikipedia.org\r\n\
User-Agent: Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0\r\n\
Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8\r\n\
Accept-Language: en-US,en;q=0.5\r\n\
Accept-Encoding: gzip, deflate, br\r\n\
Connection: keep-alive\r\n\
Cookie: session=8f1c2a9e0b7d4c3f; theme=dark\r\n\
Content-Length: 0\r\n\
\r\n";

/// Branching `tchar` check as commonly written by hand
fn is_tchar_matches(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
        | b'^' | b'_' | b'`' | b'|' | b'~'
        | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}

fn header_lines() -> Vec<(&'static [u8], &'static [u8])> {
    REQUEST_HEAD
        .split(|&b| b == b'\n')
        .skip(1)
        .filter_map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            let colon = line.iter().position(|&b| b == b':')?;
            Some((&line[..colon], &line[colon + 2..]))
        })
        .collect()
}

fn bench_token_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_classification");
    group.throughput(Throughput::Bytes(REQUEST_HEAD.len() as u64));

    group.bench_function("bitset_table", |b| {
        b.iter(|| {
            black_box(REQUEST_HEAD)
                .iter()
                .filter(|&&byte| is_token_strict(byte))
                .count()
        });
    });

    group.bench_function("matches_macro", |b| {
        b.iter(|| {
            black_box(REQUEST_HEAD)
                .iter()
                .filter(|&&byte| is_tchar_matches(byte))
                .count()
        });
    });

    group.bench_function("mode_dispatch", |b| {
        let mode = black_box(Mode::Strict);
        b.iter(|| {
            black_box(REQUEST_HEAD)
                .iter()
                .filter(|&&byte| mode.is_token_char(byte))
                .count()
        });
    });

    group.finish();
}

fn bench_url_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("url_classification");
    let target = REQUEST_TARGET.as_bytes();
    group.throughput(Throughput::Bytes(target.len() as u64));

    group.bench_function("lenient_table", |b| {
        b.iter(|| {
            black_box(target)
                .iter()
                .all(|&byte| is_url_char_lenient(byte) || byte == b'?')
        });
    });

    group.bench_function("check_url_strict", |b| {
        b.iter(|| check_url(black_box(target), Mode::Strict).unwrap());
    });

    group.finish();
}

fn bench_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("headers");
    let lines = header_lines();

    group.bench_function("header_state", |b| {
        b.iter(|| {
            for (name, _) in &lines {
                black_box(header_state(&name.to_ascii_lowercase()));
            }
        });
    });

    group.bench_function("check_header_value", |b| {
        b.iter(|| {
            for (_, value) in &lines {
                check_header_value(black_box(value)).unwrap();
            }
        });
    });

    group.bench_function("message_on_header", |b| {
        b.iter(|| {
            let mut message = Message::new(MessageType::Request, Mode::Loose);
            for (name, value) in &lines {
                message.on_header(&name.to_ascii_lowercase(), value).unwrap();
            }
            message.before_headers_complete();
            black_box(message.after_headers_complete().unwrap())
        });
    });

    group.finish();
}

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    group.bench_function("content_length", |b| {
        b.iter(|| parse_content_length(black_box(b"1048576")).unwrap());
    });

    group.bench_function("chunk_size", |b| {
        b.iter(|| parse_chunk_size(black_box(b"1a2b3c;name=value")).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_token_classification,
    bench_url_classification,
    bench_headers,
    bench_numbers
);
criterion_main!(benches);
