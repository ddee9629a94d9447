use crate::models::ContentMap;

/// Pure, deterministic token counting.
pub trait ITokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;

    /// Count the tokens of a content payload in its compact JSON form.
    fn count_content(&self, content: &ContentMap) -> usize {
        // A map with string keys always serializes.
        let text = serde_json::to_string(content).unwrap_or_default();
        self.count(&text)
    }
}
