//! Pooled Narrative - NarrativeStrategy drawing from fixed insight pools.
//!
//! The closing remark is chosen uniformly at random from a pool of four
//! strings; the answers themselves do not influence the choice.

use rand::Rng;

use crate::domain::session::Level;
use crate::ports::NarrativeStrategy;

/// Insight pool for typed conversation sessions.
pub const CONVERSATION_INSIGHTS: [&str; 4] = [
    "I'm impressed by your self-awareness and thoughtful responses.",
    "Your answers reveal a strong foundation for future growth.",
    "I can see genuine authenticity in how you express yourself.",
    "Your perspective shows both wisdom and curiosity.",
];

/// Insight pool for voiced sessions.
pub const VOICE_INSIGHTS: [&str; 4] = [
    "I'm impressed by your thoughtful responses and genuine self-reflection throughout our conversation.",
    "Your answers reveal a strong foundation for personal growth and a clear understanding of your values.",
    "I can sense your authenticity and commitment to personal development in how you express yourself.",
    "Your perspective demonstrates both emotional maturity and a genuine curiosity about your future potential.",
];

/// Narrative strategy selecting uniformly from a fixed pool.
#[derive(Debug, Clone)]
pub struct PooledNarrative {
    pool: Vec<String>,
}

impl PooledNarrative {
    /// Pool used for typed conversation sessions.
    pub fn conversation() -> Self {
        Self::from_pool(CONVERSATION_INSIGHTS.iter().map(|s| s.to_string()))
    }

    /// Pool used for voiced sessions.
    pub fn voice() -> Self {
        Self::from_pool(VOICE_INSIGHTS.iter().map(|s| s.to_string()))
    }

    /// Builds a strategy over a custom pool.
    ///
    /// An empty pool is replaced by the conversation pool.
    pub fn from_pool<I: IntoIterator<Item = String>>(pool: I) -> Self {
        let pool: Vec<String> = pool.into_iter().collect();
        if pool.is_empty() {
            return Self::conversation();
        }
        Self { pool }
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }
}

impl NarrativeStrategy for PooledNarrative {
    fn narrative(&self, _level: Level, _answers: &[String]) -> String {
        let index = rand::thread_rng().gen_range(0..self.pool.len());
        self.pool[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_pool_has_four_insights() {
        assert_eq!(PooledNarrative::conversation().pool().len(), 4);
    }

    #[test]
    fn narrative_always_comes_from_the_pool() {
        let strategy = PooledNarrative::voice();
        for _ in 0..50 {
            let narrative = strategy.narrative(Level::FIRST, &[]);
            assert!(VOICE_INSIGHTS.contains(&narrative.as_str()));
        }
    }

    #[test]
    fn single_entry_pool_is_deterministic() {
        let strategy = PooledNarrative::from_pool(vec!["Only insight.".to_string()]);
        assert_eq!(strategy.narrative(Level::FIRST, &[]), "Only insight.");
    }

    #[test]
    fn empty_pool_falls_back_to_the_conversation_pool() {
        let strategy = PooledNarrative::from_pool(Vec::new());
        assert_eq!(strategy.pool().len(), 4);
    }
}
