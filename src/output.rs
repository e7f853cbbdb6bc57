/// Render the summary as a markdown block with its heading
pub fn render_summary(summary: &str) -> String {
    format!("## 📋 Summary\n\n{summary}")
}

/// Thumbnail image URL for a YouTube video, by convention
pub fn thumbnail_url(video_id: &str) -> String {
    format!("http://img.youtube.com/vi/{video_id}/0.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary() {
        let rendered = render_summary("Three sentences about the article.");
        assert_eq!(rendered, "## 📋 Summary\n\nThree sentences about the article.");
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(thumbnail_url("abc123"), "http://img.youtube.com/vi/abc123/0.jpg");
    }
}
