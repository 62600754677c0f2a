//! Synthetic inbound tweets for demos: template fill-in, usernames, and ids.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use uuid::Uuid;

/// Length of a simulated tweet id (prefix of a v4 UUID).
pub const TWEET_ID_LEN: usize = 8;

const TEMPLATES: &[&str] = &[
    "Hey @brand, love your product but having an issue with {feature}. Any tips?",
    "@brand Just bought your new {product} and it's amazing! One question though...",
    "Not happy with my recent @brand purchase. The {issue} is really disappointing.",
    "Can someone from @brand help me? Having trouble with my account.",
    "Thinking about trying @brand's services. How does it compare to {competitor}?",
    "@brand your customer service team deserves a raise! Thanks for solving my problem so quickly.",
];

const FEATURES: &[&str] = &[
    "login",
    "checkout",
    "mobile app",
    "search function",
    "notifications",
];
const PRODUCTS: &[&str] = &[
    "premium subscription",
    "starter kit",
    "pro package",
    "basic plan",
    "enterprise solution",
];
const ISSUES: &[&str] = &[
    "shipping delay",
    "quality",
    "missing parts",
    "billing error",
    "customer service",
];
const COMPETITORS: &[&str] = &[
    "CompetitorX",
    "RivalCorp",
    "AlternateBrand",
    "OtherService",
    "MarketLeader",
];

const PLACEHOLDERS: &[(&str, &[&str])] = &[
    ("{feature}", FEATURES),
    ("{product}", PRODUCTS),
    ("{issue}", ISSUES),
    ("{competitor}", COMPETITORS),
];

/// Picks a template and substitutes every placeholder it contains.
pub fn random_tweet_text<R: Rng>(rng: &mut R) -> String {
    let template = TEMPLATES.choose(&mut *rng).copied().unwrap_or(TEMPLATES[0]);
    fill_template(template, rng)
}

fn fill_template<R: Rng>(template: &str, rng: &mut R) -> String {
    PLACEHOLDERS
        .iter()
        .fold(template.to_string(), |text, (token, values)| {
            if !text.contains(token) {
                return text;
            }
            let value = values.choose(&mut *rng).copied().unwrap_or_default();
            text.replace(token, value)
        })
}

pub fn random_username<R: Rng>(rng: &mut R) -> String {
    format!("@user{}", rng.random_range(1000..=9999))
}

/// Short id from the first eight characters of a v4 UUID, re-drawn until it
/// does not collide with `taken`.
pub fn new_tweet_id(taken: &HashSet<String>) -> String {
    loop {
        let id: String = Uuid::new_v4()
            .to_string()
            .chars()
            .take(TWEET_ID_LEN)
            .collect();
        if !taken.contains(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_placeholder(text: &str) -> bool {
        PLACEHOLDERS.iter().any(|(token, _)| text.contains(token))
            || (text.contains('{') && text.contains('}'))
    }

    #[test]
    fn test_every_template_fills_completely() {
        let mut rng = rand::rng();
        for template in TEMPLATES {
            let filled = fill_template(template, &mut rng);
            assert!(!has_placeholder(&filled), "unresolved token in: {filled}");
        }
    }

    #[test]
    fn test_random_text_never_has_placeholders() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let text = random_tweet_text(&mut rng);
            assert!(!text.is_empty());
            assert!(!has_placeholder(&text), "unresolved token in: {text}");
        }
    }

    #[test]
    fn test_username_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let username = random_username(&mut rng);
            let number: u32 = username.trim_start_matches("@user").parse().unwrap();
            assert!((1000..=9999).contains(&number));
        }
    }

    #[test]
    fn test_ids_are_eight_chars_and_unique() {
        let mut taken = HashSet::new();
        for _ in 0..1000 {
            let id = new_tweet_id(&taken);
            assert_eq!(id.len(), TWEET_ID_LEN);
            assert!(taken.insert(id));
        }
    }
}
