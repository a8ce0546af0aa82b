// LLM prompt constants for the content module.

use crate::content::models::ContentRequest;

/// System prompt framing the provider as a brand-focused social media specialist.
pub const CONTENT_SYSTEM: &str = "You are a professional social media content creator \
    specializing in brand marketing. Create engaging, platform-specific content that \
    matches the requested tone and aligns with brand identity.";

/// Content prompt template.
/// Replace: {content_type}, {brand_name}, {brand_description}, {platform}, {tone}
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Create a {content_type} for {brand_name} ({brand_description}) for {platform} with a {tone} tone.
Include a compelling caption and relevant hashtags. Also provide a detailed image prompt for an image generation model.

Respond with EXACTLY three paragraphs separated by a single blank line, in this order:
1. The caption
2. The hashtags, each starting with #
3. The image prompt

Do NOT add headings, numbering, or any other text."#;

/// Fills the content template with the request fields, verbatim.
pub fn build_content_prompt(request: &ContentRequest) -> String {
    CONTENT_PROMPT_TEMPLATE
        .replace("{content_type}", &request.content_type)
        .replace("{brand_name}", &request.brand_name)
        .replace("{brand_description}", &request.brand_description)
        .replace("{platform}", &request.platform)
        .replace("{tone}", &request.tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_every_field() {
        let request = ContentRequest {
            brand_name: "Acme Coffee".to_string(),
            brand_description: "Small-batch roastery in Lisbon".to_string(),
            platform: "Instagram".to_string(),
            content_type: "carousel post".to_string(),
            tone: "playful".to_string(),
        };
        let prompt = build_content_prompt(&request);

        assert!(prompt.starts_with(
            "Create a carousel post for Acme Coffee (Small-batch roastery in Lisbon) for Instagram with a playful tone."
        ));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_prompt_requests_three_paragraph_layout() {
        let prompt = build_content_prompt(&ContentRequest::default());
        assert!(prompt.contains("EXACTLY three paragraphs"));
        assert!(prompt.contains("image prompt"));
    }
}
