//! Emoji picking for the greeting reply.

use rand::prelude::*;

/// Emoji the greeting reply cycles through.
const EMOJI_POOL: &[&str] = &[
    "😭", "😄", "😌", "🤓", "😎", "😤", "🤖", "😶‍🌫️", "🌏", "📸", "💿", "👋", "🌊", "✨",
];

/// Pick a random emoji from the pool.
pub fn random_emoji() -> &'static str {
    let mut rng = thread_rng();
    EMOJI_POOL.choose(&mut rng).unwrap()
}
