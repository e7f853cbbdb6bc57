pub mod config;
pub mod output;
pub mod page;
pub mod prompt;
pub mod summarize;
pub mod youtube;

use std::collections::HashMap;

use url::Url;

/// A single captioned segment as returned by the transcript service
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// One unit of retrieved content, ready for summarization
#[derive(Debug, Clone)]
pub struct ContentDocument {
    pub page_content: String,
    pub metadata: HashMap<String, String>,
}

impl ContentDocument {
    pub fn new(page_content: impl Into<String>, source: &str) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), source.to_string());
        ContentDocument {
            page_content: page_content.into(),
            metadata,
        }
    }

    pub fn with_video_id(mut self, video_id: &str) -> Self {
        self.metadata.insert("video_id".to_string(), video_id.to_string());
        self
    }
}

/// Which summary the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    ThreeSentence,
    Paragraph,
}

impl SummaryMode {
    /// Parse a config-file mode name ("sentences" or "paragraph")
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sentences" | "three-sentence" => Some(SummaryMode::ThreeSentence),
            "paragraph" => Some(SummaryMode::Paragraph),
            _ => None,
        }
    }
}

/// Check that the input is syntactically a URL: http(s) scheme plus a host.
/// No network access; rejects empty and scheme-less input.
pub fn is_valid_url(input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }
    match Url::parse(input) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.has_host(),
        Err(_) => false,
    }
}

/// Classify a URL as YouTube by substring. Deliberately loose: any input
/// mentioning youtube.com or youtu.be takes the transcript path, and the
/// acquirer rejects it there if no video ID can be extracted.
pub fn is_youtube_url(input: &str) -> bool {
    input.contains("youtube.com") || input.contains("youtu.be")
}

/// Extract the video ID from a YouTube URL.
///
/// youtube.com hosts carry it in the `v` query parameter; youtu.be carries it
/// as the first path segment. Anything else yields None.
pub fn extract_video_id(input: &str) -> Option<String> {
    let parsed = Url::parse(input.trim()).ok()?;
    let host = parsed.host_str()?;

    match host {
        "www.youtube.com" | "youtube.com" => parsed
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty()),
        "youtu.be" => parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string()),
        _ => None,
    }
}
