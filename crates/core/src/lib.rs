pub mod domain;
pub mod error;
pub mod maturity;
pub mod savings;
pub mod time;

pub mod config {
    use anyhow::Context;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub port: Option<u16>,
        /// Score incomplete answer sets (missing answers count as 0) instead of rejecting them.
        pub assessment_allow_partial: bool,
        /// Pins the first month of savings projections.
        pub projection_anchor: Option<NaiveDate>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT").ok() {
                Some(v) => Some(
                    v.trim()
                        .parse::<u16>()
                        .with_context(|| format!("PORT must be a valid port number (got {v})"))?,
                ),
                None => None,
            };

            let projection_anchor = match std::env::var("PROJECTION_ANCHOR").ok() {
                Some(v) if !v.trim().is_empty() => {
                    Some(crate::time::projection_calendar::parse_anchor(&v)?)
                }
                _ => None,
            };

            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                port,
                assessment_allow_partial: std::env::var("ASSESSMENT_ALLOW_PARTIAL")
                    .map(|v| parse_flag(&v))
                    .unwrap_or(false),
                projection_anchor,
            })
        }

        pub fn port_or_default(&self) -> u16 {
            self.port.unwrap_or(3000)
        }
    }

    fn parse_flag(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

}
