//! Console record layout
//!
//! Every record is a single line:
//!
//! ```text
//! 2026-10-19T08:12:03.512204Z INFO  service=cb-users-auth user signed in
//! ```
//!
//! When colouring is on, only the level label is wrapped in ANSI codes, so
//! [`strip_ansi`] recovers the plain line exactly.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::level::Level;

const ANSI_RESET: &str = "\x1b[0m";

/// SGR sequences only; cursor and erase sequences are left in place.
static SGR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("valid SGR pattern")
});

/// Event formatter installed on the fmt layer of every `StructuredLogger`
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordFormat {
    ansi: bool,
}

impl RecordFormat {
    pub(crate) fn new(ansi: bool) -> Self {
        Self { ansi }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = Level::from_metadata(event.metadata());
        let mut fields = RecordFields::default();
        event.record(&mut fields);

        SystemTime.format_time(&mut writer)?;
        if self.ansi {
            write!(writer, " {}{:<5}{}", level.ansi_color(), level, ANSI_RESET)?;
        } else {
            write!(writer, " {:<5}", level)?;
        }
        if let Some(service) = &fields.service {
            write!(writer, " service={}", service)?;
        }
        writeln!(writer, " {}", fields.message)
    }
}

#[derive(Debug, Default)]
struct RecordFields {
    message: String,
    service: Option<String>,
}

impl RecordFields {
    fn put(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            "service" => self.service = Some(value),
            _ => {}
        }
    }
}

impl Visit for RecordFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}

/// Remove ANSI SGR sequences (`ESC [ ... m`) from rendered output
pub fn strip_ansi(input: &str) -> String {
    SGR_PATTERN.replace_all(input, "").into_owned()
}
