// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text formatting of log events.
//!
//! The formatter is an injected capability: the pipeline that constructs a
//! [`HostLogSink`](crate::HostLogSink) decides how events become text, and
//! the sink only runs whatever it was given. [`MessageTemplateFormatter`]
//! is the reference implementation for pipelines that don't bring their
//! own.

use crate::event::LogEvent;
use std::fmt::{self, Debug};

/// Renders a log event into a text buffer.
///
/// Implementations write the final message text for one event. Failures
/// propagate out of [`emit`](crate::LogEventSink::emit) and abort that
/// single event before any host logger call.
pub trait TextFormatter: Debug + Send + Sync {
    fn format(&self, event: &LogEvent, out: &mut dyn fmt::Write) -> fmt::Result;
}

/**
The reference formatter: substitutes `{name}` holes in the event's template
with the matching property values.

A hole whose name has no matching property is emitted verbatim, braces
included, so a typo'd template stays visible in the output instead of
silently vanishing. `{{` and `}}` escape literal braces.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageTemplateFormatter;

impl MessageTemplateFormatter {
    pub const fn new() -> Self {
        Self
    }
}

impl TextFormatter for MessageTemplateFormatter {
    fn format(&self, event: &LogEvent, out: &mut dyn fmt::Write) -> fmt::Result {
        let template = event.template();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.write_char('{')?;
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.write_char('}')?;
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    match event.property(&name) {
                        Some(value) if closed => write!(out, "{}", value)?,
                        _ => {
                            // Unmatched or unterminated hole: keep it visible.
                            out.write_char('{')?;
                            out.write_str(&name)?;
                            if closed {
                                out.write_char('}')?;
                            }
                        }
                    }
                }
                other => out.write_char(other)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    fn render(event: &LogEvent) -> String {
        let mut buffer = String::new();
        MessageTemplateFormatter::new()
            .format(event, &mut buffer)
            .expect("formatting into a String cannot fail");
        buffer
    }

    #[test]
    fn substitutes_properties() {
        let event = LogEvent::new(Level::Information, "job {id} took {secs}s")
            .with_property("id", 23)
            .with_property("secs", 3.5);
        assert_eq!(render(&event), "job 23 took 3.5s");
    }

    #[test]
    fn unmatched_hole_stays_verbatim() {
        let event = LogEvent::new(Level::Information, "job {id} done");
        assert_eq!(render(&event), "job {id} done");
    }

    #[test]
    fn doubled_braces_escape() {
        let event = LogEvent::new(Level::Information, "literal {{braces}}");
        assert_eq!(render(&event), "literal {braces}");
    }

    #[test]
    fn unterminated_hole_stays_verbatim() {
        let event = LogEvent::new(Level::Information, "oops {id");
        assert_eq!(render(&event), "oops {id");
    }

    #[test]
    fn plain_template_passes_through() {
        let event = LogEvent::new(Level::Warning, "disk low");
        assert_eq!(render(&event), "disk low");
    }
}
