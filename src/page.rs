use std::io::Cursor;
use std::time::Duration;

use eyre::{Result, bail};
use log::debug;

use crate::ContentDocument;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Rendering width for the HTML-to-text conversion
const TEXT_WIDTH: usize = 80;

/// Fetch a web page and extract its readable text into one document.
///
/// Sends browser-like headers and skips TLS certificate verification.
pub async fn fetch(url: &str, timeout: Duration) -> Result<ContentDocument> {
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(timeout)
        .build()?;

    debug!("Fetching page: {url}");

    let html = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", ACCEPT)
        .header("Accept-Language", ACCEPT_LANGUAGE)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let text = html_to_text(&html);
    if text.trim().is_empty() {
        bail!("no readable text extracted from {url}");
    }

    debug!("Extracted {} characters from {url}", text.len());
    Ok(ContentDocument::new(text, url))
}

/// Convert HTML to readable plain text. Falls back to the raw input if the
/// converter chokes on it.
fn html_to_text(html: &str) -> String {
    html2text::from_read(Cursor::new(html.as_bytes()), TEXT_WIDTH).unwrap_or_else(|_| html.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_basic() {
        let html = "<html><body><h1>Headline</h1><p>First paragraph of the article.</p></body></html>";
        let text = html_to_text(html);
        assert!(text.contains("Headline"));
        assert!(text.contains("First paragraph of the article."));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_html_to_text_strips_markup() {
        let html = "<div><span>Hello</span> <b>world</b></div>";
        let text = html_to_text(html);
        assert!(text.contains("Hello"));
        assert!(text.contains("world"));
        assert!(!text.contains("<span>"));
    }

    #[test]
    fn test_html_to_text_plain_input() {
        let text = html_to_text("just plain text");
        assert!(text.contains("just plain text"));
    }
}
