use http1_grammar::{Message, MessageType, Mode, header_state, parse_status_code, parse_version};

fn main() {
    // Response head already split into start-line parts and headers
    let mut message = Message::new(MessageType::Response, Mode::Strict);
    message.on_message_begin();
    (message.http_major, message.http_minor) =
        parse_version(b"HTTP/1.1").expect("Failed to parse version");
    message.status_code = parse_status_code(b"200").expect("Failed to parse status");

    let headers: [(&[u8], &[u8]); 3] = [
        (b"content-type", b"text/plain"),
        (b"transfer-encoding", b"gzip, chunked"),
        (b"connection", b"keep-alive"),
    ];
    for (name, value) in headers {
        let state = message.on_header(name, value).expect("Invalid header");
        println!("{:<20} {:?} -> {:?}", String::from_utf8_lossy(name), header_state(name), state);
    }

    message.before_headers_complete();
    let framing = message.after_headers_complete().expect("Invalid framing");
    println!("Framing: {framing:?}"); // Chunked
    println!("Keep-alive: {}", message.should_keep_alive()); // true
    println!("Flags: {:?}", message.flags);
}
