pub mod feedback;
pub mod settings;
pub mod tweet;

/// Current UTC time as an RFC 3339 string, the format every stored timestamp uses.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339()
}
