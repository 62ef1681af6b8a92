//! Motivational quotes shown on the dashboard.

use rand::seq::SliceRandom;
use rand::Rng;

pub const MOTIVATIONAL_QUOTES: [&str; 6] = [
    "The secret of getting ahead is getting started. - Mark Twain",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "The expert in anything was once a beginner.",
    "Success is the sum of small efforts, repeated day in and day out.",
    "It does not matter how slowly you go as long as you do not stop. - Confucius",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
];

/// Pick one quote uniformly at random.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(rng)
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}
