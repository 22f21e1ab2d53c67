//! Diagnostics emitted while tracing

use crate::written::Part;

/// Hard errors; each one ends the trace that reported it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// The root matches no tag base and no object type
    #[error("Tag base '{base}' does not exist.")]
    UnknownBase {
        /// Root text as written
        base: String,
    },

    /// The root tag requires a parameter that was not written
    #[error("Tag base '{base}' requires an input [tag parameter] value.")]
    BaseRequiresParameter {
        /// Root name
        base: String,
    },

    /// The root tag was given a parameter it does not take
    #[error("Tag base '{base}' cannot have a [tag parameter].")]
    BaseDisallowsParameter {
        /// Root name
        base: String,
    },

    /// The root names a pseudo-type. Tracing continues after this one.
    #[error(
        "Tag base '{base}' seems to refer to a pseudo-object-type, but not one that can be used as a free-standing tag base."
    )]
    PseudoTypeBase {
        /// Root text as written
        base: String,
    },

    /// No subtag matches the part on the single type in play
    #[error("Tag part '{part}' does not exist for object type {type_name}")]
    UnknownPartForType {
        /// Lowercased part text
        part: String,
        /// The type searched
        type_name: String,
    },

    /// No subtag matches the part on any of a few types in play
    #[error("Tag part '{part}' does not exist for object types {}", .type_names.join(", "))]
    UnknownPartForTypes {
        /// Lowercased part text
        part: String,
        /// The types searched
        type_names: Vec<String>,
    },

    /// No subtag matches the part on any of many types in play
    #[error("Tag part '{part}' does not exist for any applicable object types")]
    UnknownPart {
        /// Lowercased part text
        part: String,
    },

    /// Every matching subtag requires a parameter that was not written
    #[error("Tag part '{part}' requires an input [tag parameter] value.")]
    PartRequiresParameter {
        /// Lowercased part text
        part: String,
    },

    /// No matching subtag takes the parameter that was written
    #[error("Tag part '{part}' cannot have a [tag parameter].")]
    PartDisallowsParameter {
        /// Lowercased part text
        part: String,
    },

    /// A matched tag declares a return type the registry never resolved
    #[error("(Internal) Unknown object return type '{returns}'")]
    UnknownReturnType {
        /// Declared return type text
        returns: String,
    },
}

impl TraceError {
    /// Whether tracing goes on after this error
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::PseudoTypeBase { .. })
    }
}

/// Use of a deprecated tag; never stops a trace
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Deprecated tag `{tag}`: {notice}")]
pub struct Deprecation {
    /// Canonical name of the deprecated tag
    pub tag: String,
    /// The deprecation notice
    pub notice: String,
}

/// Receives diagnostics synchronously as the tracer finds them
pub trait DiagnosticSink {
    /// A hard (or pseudo-type) error
    fn report_error(&mut self, error: TraceError);

    /// A deprecated tag attached to the part at `index`
    fn report_deprecation(&mut self, deprecation: Deprecation, index: usize, part: &Part);
}

/// A deprecation together with the part it was reported on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationReport {
    /// The warning
    pub deprecation: Deprecation,
    /// Index of the part in its written tag
    pub index: usize,
    /// Text of that part as written
    pub part: String,
}

/// Sink that keeps everything in order of arrival
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedDiagnostics {
    /// Errors reported
    pub errors: Vec<TraceError>,
    /// Deprecations reported
    pub deprecations: Vec<DeprecationReport>,
}

impl CollectedDiagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no error was reported
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render every diagnostic as one line each, errors first
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("error: {error}"))
            .collect();
        lines.extend(self.deprecations.iter().map(|report| {
            format!(
                "warning: {} (part {} `{}`)",
                report.deprecation, report.index, report.part
            )
        }));
        lines.join("\n")
    }
}

impl DiagnosticSink for CollectedDiagnostics {
    fn report_error(&mut self, error: TraceError) {
        self.errors.push(error);
    }

    fn report_deprecation(&mut self, deprecation: Deprecation, index: usize, part: &Part) {
        self.deprecations.push(DeprecationReport {
            deprecation,
            index,
            part: part.text().to_string(),
        });
    }
}
