#[cfg(test)]
mod tests {
    use downcount::libs::config::{Config, Target, DEFAULT_PORT};
    use downcount::libs::page;

    fn config_with(target: Target) -> Config {
        Config { target, port: DEFAULT_PORT }
    }

    #[test]
    fn test_render_embeds_target_string() {
        let html = page::render(&config_with(Target::parse("2030-01-01T00:00:00Z")));
        assert!(html.contains("const TARGET = \"2030-01-01T00:00:00Z\";"));
    }

    #[test]
    fn test_render_is_complete_document() {
        let html = page::render(&config_with(Target::parse("2030-01-01T00:00:00Z")));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"countdown\""));
        assert!(html.contains("id=\"weekdays\""));
        assert!(html.contains("id=\"label\""));
        assert!(html.contains("calendar time"));
        assert!(html.contains("weekday time"));
    }

    #[test]
    fn test_render_refreshes_every_second() {
        let html = page::render(&config_with(Target::parse("2030-01-01T00:00:00Z")));
        // One immediate evaluation, then the fixed cadence.
        assert!(html.contains("tick();"));
        assert!(html.contains("setInterval(tick, 1000);"));
    }

    #[test]
    fn test_render_missing_target_embeds_empty_string() {
        let html = page::render(&config_with(Target::Missing));
        assert!(html.contains("const TARGET = \"\";"));
    }

    #[test]
    fn test_render_carries_invalid_state_instructions() {
        let html = page::render(&config_with(Target::Missing));
        assert!(html.contains("Invalid DATE_TIME_COUNT"));
        assert!(html.contains("Set DATE_TIME_COUNT to an ISO date-time"));
    }

    #[test]
    fn test_render_keeps_invalid_value_for_the_page() {
        let html = page::render(&config_with(Target::parse("definitely-not-a-date")));
        assert!(html.contains("const TARGET = \"definitely-not-a-date\";"));
    }

    #[test]
    fn test_render_escapes_script_breakout() {
        let hostile = Target::Invalid("</script><script>alert(1)//".to_string());
        let html = page::render(&config_with(hostile));
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains("\\u003c/script"));
    }
}
