//! Completion parser — splits one provider completion into caption, hashtags and image prompt.
//!
//! The contract is positional: paragraphs separated by a blank line, in the order
//! caption → hashtags → image prompt. Anything after the third paragraph is ignored.

use crate::content::models::{ContentError, ContentResult};

/// Blank line separating the sections of a completion.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

// Labels a model sometimes prepends despite being told not to. Matched case-insensitively,
// only when followed by a colon.
const CAPTION_LABELS: &[&str] = &["caption"];
const HASHTAG_LABELS: &[&str] = &["hashtags", "hashtag"];
const IMAGE_PROMPT_LABELS: &[&str] = &[
    "image prompt",
    "image generation prompt",
    "image-generation prompt",
    "dall-e prompt",
];

/// Parses a completion into a `ContentResult`.
///
/// Fails with `ContentError::Parse` when fewer than three paragraphs are present or
/// any of the three sections is empty.
pub fn parse_completion(text: &str) -> Result<ContentResult, ContentError> {
    let normalized = text.replace("\r\n", "\n");
    let paragraphs: Vec<&str> = normalized.split(PARAGRAPH_DELIMITER).collect();

    let (raw_caption, raw_hashtags, raw_image_prompt) = match paragraphs.as_slice() {
        [caption, hashtags, image_prompt, ..] => (*caption, *hashtags, *image_prompt),
        _ => {
            return Err(ContentError::Parse(format!(
                "expected at least 3 paragraphs, found {}",
                paragraphs.len()
            )))
        }
    };

    let caption = section(raw_caption, CAPTION_LABELS, "caption")?;
    let hashtags = split_hashtags(section(raw_hashtags, HASHTAG_LABELS, "hashtags")?);
    let image_prompt = section(raw_image_prompt, IMAGE_PROMPT_LABELS, "image prompt")?;

    if hashtags.is_empty() {
        return Err(ContentError::Parse(
            "hashtags paragraph contains no tags".to_string(),
        ));
    }

    Ok(ContentResult {
        caption: caption.to_string(),
        hashtags,
        image_prompt: image_prompt.to_string(),
    })
}

/// Splits on every `#`, drops blank fragments, and re-prefixes each survivor.
/// Order and duplicates are preserved.
pub fn split_hashtags(text: &str) -> Vec<String> {
    text.split('#')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{tag}"))
        .collect()
}

fn section<'a>(paragraph: &'a str, labels: &[&str], name: &str) -> Result<&'a str, ContentError> {
    let body = strip_label(paragraph.trim(), labels);
    if body.is_empty() {
        return Err(ContentError::Parse(format!("{name} paragraph is empty")));
    }
    Ok(body)
}

fn strip_label<'a>(paragraph: &'a str, labels: &[&str]) -> &'a str {
    for label in labels {
        let Some(head) = paragraph.get(..label.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(label) {
            continue;
        }
        if let Some(rest) = paragraph[label.len()..].trim_start().strip_prefix(':') {
            return rest.trim();
        }
    }
    paragraph
}
