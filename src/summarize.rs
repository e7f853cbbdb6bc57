use eyre::{Result, bail};
use log::debug;

use crate::config::Settings;
use crate::{ContentDocument, SummaryMode, prompt};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Summarize retrieved documents via the Groq chat-completions API.
///
/// Stuff strategy: all document text goes into one request, no chunking. If
/// the model's input limit is exceeded the API error propagates to the caller.
pub async fn summarize(
    client: &reqwest::Client,
    settings: &Settings,
    documents: &[ContentDocument],
    mode: SummaryMode,
) -> Result<String> {
    let text = stuff_documents(documents);
    let rendered = prompt::render(prompt::template_for(mode), &text);

    debug!("Summarizing {} characters with model {}", text.len(), settings.model);

    let body = serde_json::json!({
        "model": settings.model,
        "messages": [
            {
                "role": "user",
                "content": rendered
            }
        ]
    });

    let resp = client
        .post(GROQ_API_URL)
        .bearer_auth(&settings.api_key)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("Groq API returned {status}: {body}");
    }

    let json: serde_json::Value = resp.json().await?;
    extract_chat_text(&json)
}

/// Concatenate all document contents into one block of text
fn stuff_documents(documents: &[ContentDocument]) -> String {
    documents
        .iter()
        .map(|d| d.page_content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn extract_chat_text(json: &serde_json::Value) -> Result<String> {
    if let Some(text) = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    bail!("unexpected Groq API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stuff_documents() {
        let docs = vec![
            ContentDocument::new("First document.", "https://example.com/a"),
            ContentDocument::new("Second document.", "https://example.com/b"),
        ];
        assert_eq!(stuff_documents(&docs), "First document.\n\nSecond document.");
    }

    #[test]
    fn test_stuff_documents_single() {
        let docs = vec![ContentDocument::new("Hello world", "https://youtu.be/abc123")];
        assert_eq!(stuff_documents(&docs), "Hello world");
    }

    #[test]
    fn test_stuff_documents_empty() {
        assert_eq!(stuff_documents(&[]), "");
    }

    #[test]
    fn test_extract_chat_text() {
        let json = serde_json::json!({
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "Summary of the article."
                    }
                }
            ]
        });
        assert_eq!(extract_chat_text(&json).unwrap(), "Summary of the article.");
    }

    #[test]
    fn test_extract_chat_text_empty() {
        let json = serde_json::json!({"choices": []});
        assert!(extract_chat_text(&json).is_err());
    }

    #[test]
    fn test_extract_chat_text_malformed() {
        let json = serde_json::json!({"error": {"message": "context length exceeded"}});
        assert!(extract_chat_text(&json).is_err());
    }
}
