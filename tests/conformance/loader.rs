/// Conformance fixture loader
///
/// Fixtures are JSON arrays mixing comment strings and test case objects,
/// the same shape as the Web Platform Tests data files.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum MessageCase {
    /// A raw message head and what the framing logic should decide
    Message {
        kind: String,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        lenient: bool,
        raw: String,
        #[serde(default)]
        framing: Option<String>,
        #[serde(default)]
        keep_alive: Option<bool>,
        #[serde(default)]
        error: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum HeaderCase {
    Header {
        name: String,
        value: String,
        state: String,
        #[serde(default)]
        flags: Vec<String>,
    },
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub passed: usize,
    pub failures: Vec<Failure>,
}

impl Outcome {
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        );
        for failure in &self.failures {
            out.push_str(&format!(
                "\n  #{} {:?}: {} expected {}, got {}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        out
    }
}

pub fn load_message_cases() -> Vec<MessageCase> {
    serde_json::from_str(include_str!("messages.json")).expect("messages.json is valid")
}

pub fn load_header_cases() -> Vec<HeaderCase> {
    serde_json::from_str(include_str!("headers.json")).expect("headers.json is valid")
}
