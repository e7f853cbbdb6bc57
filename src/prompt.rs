use crate::SummaryMode;

/// Substitution slot shared by both templates
const TEXT_SLOT: &str = "{text}";

const THREE_SENTENCE_TEMPLATE: &str = "\
Summarize the following content in 3 concise sentences.
Structure the summary as follows:

Summary:
<Write 3 concise and informative sentences>

Content: {text}
";

const PARAGRAPH_TEMPLATE: &str = "\
Summarize the following content in approximately 500 words.
Structure the summary with the following sections:

Title: <A brief, catchy title for the summary>

Summary:
<Write the full summary in paragraphs, around 500 words>

Key Points:
- <Key point 1>
- <Key point 2>
- <Key point 3>
...

Content: {text}
";

/// Pick the fixed template for a summary mode
pub fn template_for(mode: SummaryMode) -> &'static str {
    match mode {
        SummaryMode::ThreeSentence => THREE_SENTENCE_TEMPLATE,
        SummaryMode::Paragraph => PARAGRAPH_TEMPLATE,
    }
}

/// Substitute the aggregated document text into a template
pub fn render(template: &str, text: &str) -> String {
    template.replace(TEXT_SLOT, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_sentence_template_wording() {
        let template = template_for(SummaryMode::ThreeSentence);
        assert!(template.contains("3 concise sentences"));
        assert!(template.contains("Summary:"));
        assert!(template.contains(TEXT_SLOT));
    }

    #[test]
    fn test_paragraph_template_wording() {
        let template = template_for(SummaryMode::Paragraph);
        assert!(template.contains("approximately 500 words"));
        assert!(template.contains("Title:"));
        assert!(template.contains("Summary:"));
        assert!(template.contains("Key Points:"));
        assert!(template.contains(TEXT_SLOT));
    }

    #[test]
    fn test_render_substitutes_text() {
        let rendered = render(template_for(SummaryMode::ThreeSentence), "Hello world");
        assert!(rendered.contains("Content: Hello world"));
        assert!(!rendered.contains(TEXT_SLOT));
    }

    #[test]
    fn test_templates_have_single_slot() {
        for mode in [SummaryMode::ThreeSentence, SummaryMode::Paragraph] {
            let template = template_for(mode);
            assert_eq!(template.matches(TEXT_SLOT).count(), 1);
        }
    }
}
