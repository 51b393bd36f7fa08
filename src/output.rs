use crate::apply::FileReport;
use std::io::Write;
use std::time::Duration;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn print_report(&mut self, report: &FileReport, show_fields: bool) {
        match &report.outcome {
            Ok(fields) => {
                self.set_color(Color::Green);
                write!(self.stdout, "✓").unwrap();
                self.reset();
                write!(self.stdout, " {}", report.path.display()).unwrap();
                if show_fields {
                    self.set_dim();
                    let rendered: Vec<String> = fields
                        .fields()
                        .map(|(name, value)| format!("{}={}", name, value))
                        .collect();
                    write!(self.stdout, "  [{}]", rendered.join(", ")).unwrap();
                    self.reset();
                }
                writeln!(self.stdout).unwrap();
            }
            Err(e) => {
                self.set_color(Color::Red);
                write!(self.stdout, "✗").unwrap();
                self.reset();
                writeln!(self.stdout, " {}: {}", report.path.display(), e).unwrap();
            }
        }
    }

    pub fn print_summary(&mut self, reports: &[FileReport], elapsed: Duration, dry_run: bool) {
        let failed = reports.iter().filter(|r| !r.ok()).count();
        let tagged = reports.len() - failed;
        let verb = if dry_run { "would be tagged" } else { "tagged" };

        writeln!(self.stdout).unwrap();
        if failed == 0 {
            self.set_color(Color::Green);
            self.set_bold();
            write!(self.stdout, "{} file(s) {}", tagged, verb).unwrap();
        } else {
            self.set_color(Color::Red);
            self.set_bold();
            write!(
                self.stdout,
                "{} of {} file(s) failed, {} {}",
                failed,
                reports.len(),
                tagged,
                verb
            )
            .unwrap();
        }
        self.reset();
        self.set_dim();
        writeln!(self.stdout, " in {:.2}s", elapsed.as_secs_f64()).unwrap();
        self.reset();
    }
}
