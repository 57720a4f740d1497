use std::env;
use std::io::IsTerminal;

const DEFAULT_FEED_API_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the feed service; events are read from `{feed_api_url}/events`
    pub feed_api_url: String,
    /// Clear the screen and colour entries (defaults to on for a terminal)
    pub ansi: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("FEED_API_URL").ok(),
            env::var("FEED_ANSI").ok(),
            std::io::stdout().is_terminal(),
        )
    }

    fn from_vars(feed_api_url: Option<String>, ansi: Option<String>, is_terminal: bool) -> Self {
        Self {
            feed_api_url: feed_api_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FEED_API_URL.to_string()),
            ansi: ansi.map(|v| parse_flag(&v)).unwrap_or(is_terminal),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off" | ""
    )
}
