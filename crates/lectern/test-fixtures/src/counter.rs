use lectern_core::traits::ITokenCounter;

/// One token per whitespace-separated word. Deterministic and independent
/// of any BPE vocabulary, so tests can reason about exact counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCounter;

impl ITokenCounter for WordCounter {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
