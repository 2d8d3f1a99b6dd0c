// Prompt templates for profile details. `{contents}` is replaced with the page text.

pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Summarize this person's professional experience, education, and skills based on their \
LinkedIn profile. Keep it concise (3-5 sentences). Focus on AI/relevance if present. \
Contents: {contents}";

pub const NAME_PROMPT_TEMPLATE: &str = "\
Extract the full name of the person from this LinkedIn content. Return only the name \
(e.g., 'John Doe') or 'Not sure' if unclear. Contents: {contents}";

pub const SOCIAL_LINKS_PROMPT_TEMPLATE: &str = "\
Extract the links of this user's social media accounts from this LinkedIn profile. \
Return only the links as a JSON array of strings \
(e.g., [\"https://github.com/janedoe\", \"janedoe.com\"]) or '[]' if unclear. \
Contents: {contents}";

pub fn render(template: &str, contents: &str) -> String {
    template.replace("{contents}", contents)
}
