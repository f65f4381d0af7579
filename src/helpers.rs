/// Strip optional whitespace (SP / HTAB) from both ends
pub fn trim_ows(value: &[u8]) -> &[u8] {
    let start = value
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .unwrap_or(value.len());
    let end = value
        .iter()
        .rposition(|&b| b != b' ' && b != b'\t')
        .map_or(start, |pos| pos + 1);
    &value[start..end]
}

/// Iterator over the elements of a comma-separated header list.
///
/// Elements are OWS-trimmed; empty elements are skipped.
#[derive(Debug, Clone)]
pub struct ListTokens<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for ListTokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;
            let element = match memchr::memchr(b',', rest) {
                Some(pos) => {
                    self.rest = Some(&rest[pos + 1..]);
                    &rest[..pos]
                }
                None => {
                    self.rest = None;
                    rest
                }
            };
            let element = trim_ows(element);
            if !element.is_empty() {
                return Some(element);
            }
        }
    }
}

/// Split a header value into its list elements
pub fn list_tokens(value: &[u8]) -> ListTokens<'_> {
    ListTokens { rest: Some(value) }
}
