use crate::engagement::sentiment::Sentiment;
use crate::models::tweet::Tweet;

/// Demo tweets served when no tweets file has been saved yet.
pub fn seed_tweets() -> Vec<Tweet> {
    [
        (
            "001",
            "@techlover",
            "Hey @brand, loving your new app design! So clean 👏",
            "2025-05-17T10:12:00Z",
            Sentiment::Positive,
        ),
        (
            "002",
            "@customer123",
            "@brand My order still hasn't arrived. What's going on?",
            "2025-05-17T11:45:00Z",
            Sentiment::Negative,
        ),
        (
            "003",
            "@techreporter",
            "Interesting developments from @brand this quarter. Would love to get a statement for my article.",
            "2025-05-17T14:22:00Z",
            Sentiment::Neutral,
        ),
        (
            "004",
            "@angryuser42",
            "@brand your customer service is a joke! Been waiting 2 hours on hold and still no help with my account issue! 😡",
            "2025-05-17T16:05:00Z",
            Sentiment::Negative,
        ),
        (
            "005",
            "@influencer_amy",
            "Just got my hands on @brand's latest product and I'm OBSESSED! Can't wait to show you all the features in my next video 🤩",
            "2025-05-18T09:15:00Z",
            Sentiment::Positive,
        ),
        (
            "006",
            "@curious_george",
            "@brand Is your platform compatible with the new MacOS update? Been having some issues since I upgraded.",
            "2025-05-18T10:32:00Z",
            Sentiment::Neutral,
        ),
    ]
    .into_iter()
    .map(|(id, username, text, timestamp, sentiment)| Tweet {
        id: id.to_string(),
        username: username.to_string(),
        text: text.to_string(),
        timestamp: timestamp.to_string(),
        sentiment,
        thread: Vec::new(),
    })
    .collect()
}
