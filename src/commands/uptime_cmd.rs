use chrono::Local;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let now = Local::now();
        let elapsed = now.signed_duration_since(ctx.session.started_at).num_seconds();
        CommandResult::success(format!(
            "{}\n{}\n1 user\n",
            now.format("%H:%M:%S"),
            format_elapsed(elapsed)
        ))
    }
}

/// `HH:MM:SS`; hours keep counting past 23.
fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Fixture;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3 * 3600 + 25 * 60 + 7), "03:25:07");
        assert_eq!(format_elapsed(100 * 3600), "100:00:00");
        assert_eq!(format_elapsed(-5), "00:00:00");
    }

    #[test]
    fn test_uptime_output() {
        let mut fx = Fixture::sample();
        let result = fx.run(&UptimeCommand, None);
        let lines: Vec<&str> = result.stdout.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(chrono::NaiveTime::parse_from_str(lines[0], "%H:%M:%S").is_ok());
        assert_eq!(lines[1], "00:00:00");
        assert_eq!(lines[2], "1 user");
    }

    #[test]
    fn test_uptime_measures_from_session_start() {
        let mut fx = Fixture::sample();
        fx.session.started_at = Local::now() - chrono::Duration::seconds(3725);
        let result = fx.run(&UptimeCommand, None);
        let elapsed = result.stdout.lines().nth(1).unwrap();
        assert!(elapsed == "01:02:05" || elapsed == "01:02:06", "{}", elapsed);
    }
}
