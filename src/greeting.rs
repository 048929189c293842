//! Time-of-day greeting

/// Greeting for a local hour (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning!",
        12..=16 => "Good afternoon!",
        _ => "Good evening!",
    }
}
