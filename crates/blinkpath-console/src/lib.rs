//! Colored console output for solve events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end with problem scale and outcome
//! - **DEBUG**: Constraint counts per family and the rendered grid

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer};

#[cfg(test)]
mod tests;

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = format!("blinkpath v{VERSION} - blinking-platform traversal solver");
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solve events with colors.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("blinkpath") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    backend: Option<String>,
    family: Option<String>,
    count: Option<u64>,
    level_length: Option<u64>,
    horizon: Option<u64>,
    variable_count: Option<u64>,
    constraint_count: Option<u64>,
    completed_at: Option<u64>,
    objective: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "backend" => self.backend = Some(s.trim_matches('"').to_string()),
            "family" => self.family = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "count" => self.count = Some(value),
            "level_length" => self.level_length = Some(value),
            "horizon" => self.horizon = Some(value),
            "variable_count" => self.variable_count = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "completed_at" => self.completed_at = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "objective" {
            self.objective = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "backend" => self.backend = Some(value.to_string()),
            "family" => self.family = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "constraints_built" => format_constraints_built(v),
        "grid" => format_grid(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
        .bright_yellow()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Solving │ {} cells │ {} steps │ {} variables │ {} constraints │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.level_length.unwrap_or(0)),
        format_count(v.horizon.unwrap_or(0)),
        format_count(v.variable_count.unwrap_or(0)),
        format_count(v.constraint_count.unwrap_or(0)),
        v.backend.as_deref().unwrap_or("unknown").bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = match (v.completed_at, v.horizon) {
        (Some(step), _) => format!(
            "{} at step {}",
            "COMPLETED".bright_green().bold(),
            format_count(step)
        ),
        (None, Some(horizon)) => format!(
            "{} within {} steps",
            "UNREACHABLE".bright_red().bold(),
            format_count(horizon)
        ),
        (None, None) => "TRIVIAL".bright_cyan().bold().to_string(),
    };

    let mut output = format!(
        "{} {} Solving complete │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status
    );
    if let Some(objective) = v.objective {
        output.push_str(&format!(" │ objective {}", format!("{objective:.4}").white()));
    }
    output
}

fn format_constraints_built(v: &EventVisitor) -> String {
    format!(
        "{}   {:<14}{}",
        format_elapsed(),
        v.family.as_deref().unwrap_or("unknown").bright_blue(),
        format_count(v.count.unwrap_or(0))
    )
}

fn format_grid(v: &EventVisitor) -> String {
    v.message
        .as_deref()
        .map(|grid| grid.replace('1', &"1".bright_green().bold().to_string()))
        .unwrap_or_default()
}
