//! Rotating inspirational quote collaborator.
//!
//! Display-only: quotes never touch the journal or mood state.

use rand::Rng;

const UNKNOWN_AUTHOR: &str = "Unknown";

const BUNDLED_QUOTES: &[(&str, &str)] = &[
    ("Be yourself; everyone else is already taken.", "Oscar Wilde"),
    ("You are enough just as you are.", UNKNOWN_AUTHOR),
    (
        "Do something today your future self will thank you for.",
        UNKNOWN_AUTHOR,
    ),
    ("Breathe. You’re doing better than you think.", UNKNOWN_AUTHOR),
    ("It’s a good day to have a good day.", UNKNOWN_AUTHOR),
    ("Feel the feelings, then let them go.", UNKNOWN_AUTHOR),
    ("Inhale confidence. Exhale doubt.", UNKNOWN_AUTHOR),
];

/// One quote with attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Source of display quotes.
pub trait QuoteProvider {
    /// Quote currently on display.
    fn current(&self) -> &Quote;
    /// Advances to another quote and returns it.
    fn next_quote(&mut self) -> &Quote;
}

/// Picks quotes at random from a fixed list.
///
/// `next_quote` never repeats the current quote while more than one quote is
/// available.
#[derive(Debug, Clone)]
pub struct RotatingQuotes {
    quotes: Vec<Quote>,
    current: usize,
}

impl RotatingQuotes {
    /// Rotation over the bundled quote list, starting at the first quote.
    pub fn bundled() -> Self {
        let quotes = BUNDLED_QUOTES
            .iter()
            .map(|(text, author)| Quote::new(*text, *author))
            .collect();
        Self { quotes, current: 0 }
    }

    /// Rotation over custom quotes. Returns `None` for an empty list.
    pub fn with_quotes(quotes: Vec<Quote>) -> Option<Self> {
        if quotes.is_empty() {
            return None;
        }
        Some(Self { quotes, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl Default for RotatingQuotes {
    fn default() -> Self {
        Self::bundled()
    }
}

impl QuoteProvider for RotatingQuotes {
    fn current(&self) -> &Quote {
        &self.quotes[self.current]
    }

    fn next_quote(&mut self) -> &Quote {
        let len = self.quotes.len();
        if len > 1 {
            let pick = rand::thread_rng().gen_range(0..len - 1);
            self.current = if pick >= self.current { pick + 1 } else { pick };
        }
        &self.quotes[self.current]
    }
}

#[cfg(test)]
mod tests {
    use super::{Quote, QuoteProvider, RotatingQuotes};

    #[test]
    fn bundled_rotation_starts_with_first_quote() {
        let quotes = RotatingQuotes::bundled();
        assert_eq!(quotes.len(), 7);
        assert_eq!(
            quotes.current().text,
            "Be yourself; everyone else is already taken."
        );
    }

    #[test]
    fn next_quote_never_repeats_current() {
        let mut quotes = RotatingQuotes::bundled();
        for _ in 0..100 {
            let before = quotes.current().clone();
            let after = quotes.next_quote().clone();
            assert_ne!(before, after);
        }
    }

    #[test]
    fn single_quote_rotation_is_stable_and_empty_is_rejected() {
        let mut quotes = RotatingQuotes::with_quotes(vec![Quote::new("only", "me")]).unwrap();
        assert_eq!(quotes.next_quote().text, "only");
        assert!(RotatingQuotes::with_quotes(Vec::new()).is_none());
    }
}
