//! Scripted shopping assistant. There is no model behind it: replies are
//! picked from a fixed list, seeded so a given seed always answers the same.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GREETING: &str = "Hello! I'm the car-scout assistant. I can help you find the right car for your needs. What are you looking for?";

const RESPONSES: [&str; 5] = [
    "Great question! Based on your criteria, compact cars usually offer the best value for money.",
    "For your budget and needs, an electric car could be worth a look. Try `car-scout list --fuel electric`.",
    "Reliability matters! Sort by score with a Performance priority to favour the most reliable models.",
    "For family use, put space and safety first. Set --family-size so seating counts toward the score.",
    "The purchase price is only part of the total cost. Remember maintenance and fuel consumption too!",
];

pub fn greeting() -> &'static str {
    GREETING
}

/// Pick a reply to `message`. Blank messages get no reply.
pub fn respond(message: &str, seed: u64) -> Option<&'static str> {
    if message.trim().is_empty() {
        return None;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Some(RESPONSES[rng.random_range(0..RESPONSES.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_not_a_reply() {
        assert!(!greeting().is_empty());
        assert!(!RESPONSES.contains(&greeting()));
    }

    #[test]
    fn test_blank_message_gets_no_reply() {
        assert!(respond("", 1).is_none());
        assert!(respond("   \n", 1).is_none());
    }

    #[test]
    fn test_same_seed_same_reply() {
        for seed in 0..20 {
            assert_eq!(respond("hi", seed), respond("anything else", seed));
        }
    }

    #[test]
    fn test_replies_come_from_script() {
        for seed in 0..50 {
            let reply = respond("which car?", seed).unwrap();
            assert!(RESPONSES.contains(&reply));
        }
    }

    #[test]
    fn test_seeds_cover_more_than_one_reply() {
        let mut seen: Vec<&str> = (0..50).filter_map(|s| respond("hi", s)).collect();
        seen.sort();
        seen.dedup();
        assert!(seen.len() > 1);
    }
}
