use colored::Colorize;
use notekeep_application::screen::messages;
use notekeep_core::alert::AlertSink;

/// Prints screen alerts on stderr.
#[derive(Debug, Default)]
pub struct TerminalAlerts;

impl AlertSink for TerminalAlerts {
    fn alert(&self, title: &str, message: &str) {
        let title = if title == messages::SUCCESS_TITLE {
            title.green().bold()
        } else {
            title.red().bold()
        };

        if message.is_empty() {
            eprintln!("{}", title);
        } else {
            eprintln!("{} {}", title, message);
        }
    }
}
