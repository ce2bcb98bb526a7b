use crate::utils::viewport::ViewportWatch;

/// Class marking elements that fade in the first time they scroll into view.
pub const REVEAL_CLASS: &str = "fade-in";
/// Attribute carrying the key a reveal candidate is tracked under.
pub const REVEAL_KEY_ATTR: &str = "data-reveal";
pub const STATS_SECTION_ID: &str = "stats-section";

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

pub fn reveal_watch() -> ViewportWatch {
    ViewportWatch::new(0.1).root_margin("0px 0px -50px 0px").once()
}

pub fn stats_watch() -> ViewportWatch {
    ViewportWatch::new(0.5).once()
}

pub fn get_log_level() -> log::Level {
    parse_log_level(option_env!("PRODUCER_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("chatty")), log::Level::Info);
    }

    #[test]
    fn test_watches() {
        let reveal = reveal_watch();
        assert_eq!(reveal.threshold, 0.1);
        assert_eq!(reveal.root_margin, "0px 0px -50px 0px");
        assert!(reveal.once);

        let stats = stats_watch();
        assert_eq!(stats.threshold, 0.5);
        assert!(stats.once);
    }
}
