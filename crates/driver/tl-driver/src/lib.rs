//! High-level tag checking
//!
//! [`TagChecker`] ties a shared [`Registry`] to a configuration and turns tag
//! text into [`TagReport`]s. The registry is never mutated after it is built,
//! so a single checker serves any number of threads.

pub mod config;

pub use config::CheckerConfig;

use rayon::prelude::*;
use std::sync::Arc;
use tl_meta::Registry;
use tl_syntax::ParseError;
use tl_trace::{CollectedDiagnostics, TraceError, TraceOutcome, WrittenTag, trace_tag};

/// Result of checking one piece of tag text
#[derive(Debug)]
pub struct TagReport {
    /// The text as given
    pub source: String,
    /// The traced tag, or why the text could not be split
    pub tag: Result<WrittenTag, ParseError>,
    /// How tracing ended; `Halted` when the text did not parse
    pub outcome: TraceOutcome,
    /// Everything the tracer reported
    pub diagnostics: CollectedDiagnostics,
}

impl TagReport {
    /// Whether the text parsed and traced without any error
    pub fn is_valid(&self) -> bool {
        self.tag.is_ok() && self.diagnostics.is_clean() && !matches!(self.outcome, TraceOutcome::Halted)
    }

    /// The errors reported while tracing
    pub fn errors(&self) -> &[TraceError] {
        &self.diagnostics.errors
    }

    /// One message per problem, the parse error first when there is one
    pub fn error_messages(&self) -> Vec<String> {
        let parse = self.tag.as_ref().err().map(ToString::to_string);
        parse
            .into_iter()
            .chain(self.diagnostics.errors.iter().map(ToString::to_string))
            .collect()
    }

    /// Display names of the types the tag may produce, empty unless resolved
    pub fn terminal_type_names(&self, registry: &Registry) -> Vec<String> {
        self.outcome
            .terminal_types()
            .map(|types| registry.type_names(types))
            .unwrap_or_default()
    }
}

/// Checks tag text against one registry
#[derive(Debug, Clone)]
pub struct TagChecker {
    registry: Arc<Registry>,
    config: CheckerConfig,
}

impl TagChecker {
    /// Create a checker with the default configuration
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_config(registry, CheckerConfig::default())
    }

    /// Create a checker with the given configuration
    pub fn with_config(registry: Arc<Registry>, config: CheckerConfig) -> Self {
        Self { registry, config }
    }

    /// The registry tags are resolved against
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The active configuration
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Split and trace one tag
    pub fn check(&self, source: &str) -> TagReport {
        match WrittenTag::parse(source) {
            Ok(tag) => self.check_written(tag),
            Err(error) => {
                tracing::debug!(source, error = %error, "tag text did not parse");
                TagReport {
                    source: source.to_string(),
                    tag: Err(error),
                    outcome: TraceOutcome::Halted,
                    diagnostics: CollectedDiagnostics::new(),
                }
            }
        }
    }

    /// Trace a tag that was split elsewhere
    pub fn check_written(&self, mut tag: WrittenTag) -> TagReport {
        let mut diagnostics = CollectedDiagnostics::new();
        let outcome = trace_tag(&self.registry, &self.config.trace, &mut tag, &mut diagnostics);
        let source = tag
            .source()
            .map_or_else(|| written_text(&tag), str::to_string);
        TagReport {
            source,
            tag: Ok(tag),
            outcome,
            diagnostics,
        }
    }

    /// Check many tags in parallel; reports come back in input order
    pub fn check_all<S>(&self, sources: &[S]) -> Vec<TagReport>
    where
        S: AsRef<str> + Sync,
    {
        let reports: Vec<TagReport> = sources
            .par_iter()
            .map(|source| self.check(source.as_ref()))
            .collect();
        let failed = reports.iter().filter(|report| !report.is_valid()).count();
        tracing::info!(tags = reports.len(), failed, "checked tags");
        reports
    }
}

/// Rebuild tag text from parts, parameters included
fn written_text(tag: &WrittenTag) -> String {
    tag.parts()
        .iter()
        .map(|part| match part.parameter() {
            Some(parameter) => format!("{}[{parameter}]", part.text()),
            None => part.text().to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}
