use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Numbered pipeline stages reported on stderr.
///
/// A disabled instance keeps counting stages but draws nothing.
pub struct Progress {
    enabled: bool,
    total: u8,
    current: u8,
    spinner: Option<ProgressBar>,
    started: Instant,
    stage_started: Instant,
}

impl Progress {
    pub fn new(enabled: bool, total: u8) -> Self {
        let now = Instant::now();
        Self {
            enabled,
            total,
            current: 0,
            spinner: None,
            started: now,
            stage_started: now,
        }
    }

    pub fn step(&mut self, label: &str) {
        self.clear_spinner();
        self.current += 1;
        self.stage_started = Instant::now();

        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner()
            .with_message(format!("{}/{} {}", self.current, self.total, label));
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg} {elapsed:.dim}") {
            spinner.set_style(style.tick_chars("◐◓◑◒●"));
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    /// Closes the running stage with a summary line and its detail lines.
    pub fn done(&mut self, label: &str, details: &[String]) {
        self.clear_spinner();

        if !self.enabled {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m{}/{}\x1b[0m {:<40} {:>6.2}s",
            self.current,
            self.total,
            label,
            self.stage_started.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "        \x1b[2m{}\x1b[0m", detail);
        }
    }

    pub fn finish(mut self, unresolved: usize) {
        self.clear_spinner();

        if !self.enabled {
            return;
        }

        let status = match unresolved {
            0 => "\x1b[32mall rings resolved\x1b[0m".to_string(),
            n => format!("\x1b[33m{n} ring(s) unresolved\x1b[0m"),
        };
        let _ = writeln!(
            io::stderr().lock(),
            "\n  {} in {:.2}s\n",
            status,
            self.started.elapsed().as_secs_f64()
        );
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
