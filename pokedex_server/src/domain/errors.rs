use std::fmt;

// Error type returned by the upstream ports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// Terminal failure states of the describe pipeline.
#[derive(Debug)]
pub enum DescribeError {
    // The path held more than one segment.
    InvalidRequest,
    // Unknown name, no English flavor text, or an empty translation.
    NotFound,
    // Transport or decode failure talking to the species API.
    Fetch(String),
    // Transport or decode failure talking to the translation API.
    Translate(String),
}

impl fmt::Display for DescribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescribeError::InvalidRequest => write!(f, "Invalid request"),
            DescribeError::NotFound => write!(f, "Not found"),
            DescribeError::Fetch(reason) => write!(f, "Failed to fetch Pokemon - {reason}"),
            DescribeError::Translate(reason) => write!(f, "Failed to translate - {reason}"),
        }
    }
}

impl std::error::Error for DescribeError {}
