//! Static tracing of written tags
//!
//! Given a [`tl_meta::Registry`] and a [`WrittenTag`], the [`Tracer`] works
//! out which documented tag each part refers to and which object types the
//! whole expression can produce, without evaluating anything.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tl_trace::{CollectedDiagnostics, TraceConfig, WrittenTag, trace_tag};
//!
//! let mut tag = WrittenTag::parse("<player.name.to_uppercase>")?;
//! let mut diagnostics = CollectedDiagnostics::new();
//! let outcome = trace_tag(&registry, &TraceConfig::default(), &mut tag, &mut diagnostics);
//! ```
//!
//! Tracing is deterministic. Tracing the same tag again yields the same
//! diagnostics and leaves each part's possible definitions unchanged.

pub mod config;
pub mod diagnostics;
pub mod roots;
pub mod tracer;
pub mod written;

#[cfg(test)]
mod fixture;

pub use config::TraceConfig;
pub use diagnostics::{
    CollectedDiagnostics, Deprecation, DeprecationReport, DiagnosticSink, TraceError,
};
pub use roots::{MAX_ROOT_SEGMENTS, RootStrategy};
pub use tracer::{MAX_SUBTAG_SEGMENTS, TraceOutcome, Tracer, trace_tag};
pub use written::{Part, WrittenTag};
