// ABOUTME: User-facing status lines for the lin CLI
// ABOUTME: Errors and progress go to stderr, headings to stdout, colored only when allowed

use owo_colors::OwoColorize;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy)]
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Color unless disabled by flag, `NO_COLOR`, a dumb terminal or a non-TTY stderr
    pub fn new(no_color: bool) -> Self {
        let use_color = !no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").unwrap_or_default() != "dumb"
            && std::io::stderr().is_terminal();
        Self { use_color }
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "error:".red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    pub fn hint(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "hint:".cyan().bold(), message);
        } else {
            eprintln!("hint: {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "✓".green().bold(), message);
        } else {
            eprintln!("✓ {}", message);
        }
    }

    /// Progress line with an icon
    pub fn status(&self, icon: &str, message: &str) {
        if self.use_color {
            eprintln!("{} {}", icon, message.dimmed());
        } else {
            eprintln!("{} {}", icon, message);
        }
    }

    /// Section title on stdout, e.g. `Teams [acme]`
    pub fn heading(&self, title: &str) {
        if self.use_color {
            println!("\n{}\n", title.bold());
        } else {
            println!("\n{}\n", title);
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_color() {
        assert!(CliOutput::with_color(true).use_color());
        assert!(!CliOutput::with_color(false).use_color());
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!CliOutput::new(true).use_color());
    }

    #[test]
    fn test_message_formatting() {
        let cli = CliOutput::with_color(false);

        // Smoke test: nothing captured, methods must not panic
        cli.error("test error");
        cli.hint("test hint");
        cli.warning("test warning");
        cli.success("test success");
        cli.status("📎", "uploading");
        cli.heading("Teams [acme]");
    }
}
