//! Tag tracing
//!
//! A trace resolves the root part first (see [`crate::roots`]), then walks
//! the remaining parts left to right. Each step looks the current part up in
//! the subtag tables of every type the value may hold, keeps the matches that
//! accept the part's parameter, prefers the matches consuming the most
//! segments and moves on with the union of their return types.

use crate::config::TraceConfig;
use crate::diagnostics::{Deprecation, DiagnosticSink, TraceError};
use crate::roots::{RootStep, RootStrategy};
use crate::written::WrittenTag;
use tl_meta::{Registry, TagId, TypeSet};

/// Longest member key, in segments
pub const MAX_SUBTAG_SEGMENTS: usize = 3;

/// How a trace ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The tag had no parts
    Empty,
    /// Every part resolved; the value may hold any of these types
    Resolved(TypeSet),
    /// A hard error was reported and tracing stopped
    Halted,
}

impl TraceOutcome {
    /// Types the whole tag may evaluate to, when it resolved
    pub fn terminal_types(&self) -> Option<&TypeSet> {
        match self {
            Self::Resolved(types) => Some(types),
            Self::Empty | Self::Halted => None,
        }
    }

    /// Whether every part resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// A subtag matched during one step, with the segments its key spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) tag: TagId,
    pub(crate) consumed: usize,
}

/// Traces one written tag against a registry
pub struct Tracer<'a> {
    pub(crate) registry: &'a Registry,
    pub(crate) config: &'a TraceConfig,
    pub(crate) tag: &'a mut WrittenTag,
    pub(crate) sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Tracer<'a> {
    /// Create a tracer; nothing happens until [`Tracer::trace`]
    pub fn new(
        registry: &'a Registry,
        config: &'a TraceConfig,
        tag: &'a mut WrittenTag,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            registry,
            config,
            tag,
            sink,
        }
    }

    /// Trace the whole tag, reporting diagnostics to the sink as they arise
    pub fn trace(&mut self) -> TraceOutcome {
        if self.tag.is_empty() {
            return TraceOutcome::Empty;
        }
        let root = self.root_name();
        for strategy in RootStrategy::ORDER {
            match self.resolve_root(strategy, &root) {
                RootStep::NotApplicable => {}
                RootStep::Continue { roots, index } => {
                    tracing::trace!(
                        strategy = strategy.name(),
                        index,
                        roots = roots.len(),
                        "resolved tag root"
                    );
                    return self.trace_parts(roots, index);
                }
                RootStep::Halt => return TraceOutcome::Halted,
            }
        }
        TraceOutcome::Halted
    }

    /// Lowercased root text, with the empty-root alias applied
    fn root_name(&self) -> String {
        let first = self.tag.parts()[0].canonical();
        if first.is_empty() {
            self.config.empty_root_alias.to_lowercase()
        } else {
            first.to_string()
        }
    }

    /// Resolve parts from `index` on, starting from the types in `roots`
    fn trace_parts(&mut self, mut roots: TypeSet, mut index: usize) -> TraceOutcome {
        let registry = self.registry;
        while index < self.tag.len() {
            let candidates = self.trace_part_single(&roots, index);
            let part = self.tag.parts()[index].canonical().to_string();
            if candidates.is_empty() {
                let error = self.unknown_part(part, &roots);
                self.report(error);
                return TraceOutcome::Halted;
            }

            let has_parameter = self.tag.parts()[index].has_parameter();
            let accepted: Vec<Candidate> = candidates
                .into_iter()
                .filter(|candidate| registry.tag(candidate.tag).parameter.accepts(has_parameter))
                .collect();
            if accepted.is_empty() {
                self.report(if has_parameter {
                    TraceError::PartDisallowsParameter { part }
                } else {
                    TraceError::PartRequiresParameter { part }
                });
                return TraceOutcome::Halted;
            }

            let longest = accepted
                .iter()
                .map(|candidate| candidate.consumed)
                .max()
                .unwrap_or(1);
            let mut next = TypeSet::default();
            for candidate in accepted.iter().filter(|candidate| candidate.consumed == longest) {
                match self.return_types(candidate.tag) {
                    Some(types) => next.extend(types),
                    None => return TraceOutcome::Halted,
                }
            }
            tracing::trace!(
                index,
                part = %part,
                candidates = accepted.len(),
                consumed = longest,
                "traced tag part"
            );
            roots = next;
            index += longest;
        }
        TraceOutcome::Resolved(roots)
    }

    /// Gather every subtag matching the part at `index` on any type in the
    /// closure of `roots`, longest key first per type
    fn trace_part_single(&mut self, roots: &TypeSet, index: usize) -> Vec<Candidate> {
        let registry = self.registry;
        let available = MAX_SUBTAG_SEGMENTS.min(self.tag.len() - index);
        let keys: Vec<(usize, String)> = (1..=available)
            .rev()
            .map(|len| (len, self.tag.joined_key(index, len)))
            .collect();

        let mut candidates = Vec::new();
        for ty in registry.closure(roots) {
            let object_type = registry.object_type(ty);
            let hit = keys.iter().find_map(|(len, key)| {
                object_type.sub_tag(key).map(|tag| Candidate {
                    tag,
                    consumed: *len,
                })
            });
            if let Some(candidate) = hit {
                self.mark(candidate.tag, index, candidate.consumed);
                candidates.push(candidate);
            }
        }
        candidates
    }

    fn unknown_part(&self, part: String, roots: &TypeSet) -> TraceError {
        let mut type_names = self.registry.type_names(roots);
        if type_names.len() == 1 {
            TraceError::UnknownPartForType {
                part,
                type_name: type_names.remove(0),
            }
        } else if type_names.len() <= self.config.max_listed_types {
            TraceError::UnknownPartForTypes { part, type_names }
        } else {
            TraceError::UnknownPart { part }
        }
    }

    /// Attach `tag` to `len` parts from `start` and warn if it is deprecated
    pub(crate) fn mark(&mut self, tag: TagId, start: usize, len: usize) {
        self.tag.attach(tag, start, len);
        self.check_deprecated(tag, start + len - 1);
    }

    /// Report `tag` on the part at `index` when it carries a deprecation notice
    pub(crate) fn check_deprecated(&mut self, tag: TagId, index: usize) {
        let registry = self.registry;
        let definition = registry.tag(tag);
        if let Some(notice) = &definition.deprecated {
            let deprecation = Deprecation {
                tag: definition.name.clone(),
                notice: notice.clone(),
            };
            self.sink
                .report_deprecation(deprecation, index, &self.tag.parts()[index]);
        }
    }

    /// Possible types of a value returned by `tag`; reports unresolved ones
    pub(crate) fn return_types(&mut self, tag: TagId) -> Option<TypeSet> {
        let registry = self.registry;
        let types = registry.return_types(tag);
        if types.is_none() {
            self.report(TraceError::UnknownReturnType {
                returns: registry.tag(tag).returns.clone(),
            });
        }
        types
    }

    pub(crate) fn report(&mut self, error: TraceError) {
        if error.is_terminal() {
            tracing::debug!(error = %error, "tag trace halted");
        }
        self.sink.report_error(error);
    }
}

/// Trace `tag` in one call
pub fn trace_tag(
    registry: &Registry,
    config: &TraceConfig,
    tag: &mut WrittenTag,
    sink: &mut dyn DiagnosticSink,
) -> TraceOutcome {
    Tracer::new(registry, config, tag, sink).trace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectedDiagnostics;
    use crate::fixture;
    use expect_test::expect;

    fn run(source: &str) -> (WrittenTag, TraceOutcome, CollectedDiagnostics) {
        let registry = fixture::registry();
        let mut tag = WrittenTag::parse(source).unwrap();
        let mut diagnostics = CollectedDiagnostics::new();
        let outcome = trace_tag(&registry, &TraceConfig::default(), &mut tag, &mut diagnostics);
        (tag, outcome, diagnostics)
    }

    fn terminal(outcome: &TraceOutcome) -> Vec<String> {
        let registry = fixture::registry();
        let mut names = registry.type_names(outcome.terminal_types().unwrap());
        names.sort();
        names
    }

    fn definitions(tag: &WrittenTag, index: usize) -> Vec<String> {
        let registry = fixture::registry();
        tag.parts()[index]
            .possible_definitions()
            .iter()
            .map(|&id| registry.tag(id).name.clone())
            .collect()
    }

    #[test]
    fn test_member_chain_resolves() {
        let (tag, outcome, diagnostics) = run("player.name.to_uppercase");
        assert!(diagnostics.is_clean());
        assert_eq!(terminal(&outcome), ["ElementTag"]);
        assert_eq!(definitions(&tag, 0), ["player"]);
        assert_eq!(definitions(&tag, 1), ["playertag.name"]);
        assert_eq!(definitions(&tag, 2), ["elementtag.to_uppercase"]);
    }

    #[test]
    fn test_inherited_and_capability_members() {
        let (_, outcome, diagnostics) = run("entity[e].location.block.material.name");
        assert!(diagnostics.is_clean(), "{}", diagnostics.render());
        assert_eq!(terminal(&outcome), ["ElementTag"]);

        let (_, outcome, diagnostics) = run("player.has_flag[rich]");
        assert!(diagnostics.is_clean(), "{}", diagnostics.render());
        assert_eq!(terminal(&outcome), ["ElementTag"]);
    }

    #[test]
    fn test_longest_member_key_wins() {
        let (tag, outcome, diagnostics) = run("location[here].find.entities.within");
        assert!(diagnostics.is_clean());
        assert_eq!(terminal(&outcome), ["ListTag"]);
        for index in 1..=3 {
            assert_eq!(definitions(&tag, index), ["locationtag.find.entities.within"]);
        }

        let (tag, outcome, _) = run("location[here].find.entities.size");
        assert_eq!(terminal(&outcome), ["ElementTag"]);
        assert_eq!(definitions(&tag, 1), ["locationtag.find.entities"]);

        let (_, outcome, _) = run("location[here].find");
        assert_eq!(terminal(&outcome), ["LocationTag"]);
    }

    #[test]
    fn test_ambiguous_member_unions_return_types() {
        let (tag, outcome, diagnostics) = run("entity[e].display");
        assert!(diagnostics.is_clean());
        assert_eq!(terminal(&outcome), ["ElementTag", "ListTag"]);
        assert_eq!(definitions(&tag, 1), ["entitytag.display", "playertag.display"]);
    }

    #[test]
    fn test_part_parameter_policy() {
        let (tag, outcome, diagnostics) = run("player.has_flag.length");
        assert_eq!(outcome, TraceOutcome::Halted);
        assert_eq!(
            diagnostics.errors,
            [TraceError::PartRequiresParameter {
                part: "has_flag".to_string()
            }]
        );
        assert!(tag.parts()[2].possible_definitions().is_empty());

        let (_, outcome, diagnostics) = run("player.name[x]");
        assert_eq!(outcome, TraceOutcome::Halted);
        assert_eq!(
            diagnostics.errors,
            [TraceError::PartDisallowsParameter {
                part: "name".to_string()
            }]
        );
    }

    #[test]
    fn test_deprecated_member_still_resolves() {
        let (_, outcome, diagnostics) = run("player.money.to_uppercase");
        assert!(diagnostics.is_clean());
        assert_eq!(terminal(&outcome), ["ElementTag"]);
        assert_eq!(diagnostics.deprecations.len(), 1);
        assert_eq!(diagnostics.deprecations[0].index, 1);
        expect![[r#"warning: Deprecated tag `playertag.money`: Use 'PlayerTag.balance'. (part 1 `money`)"#]]
            .assert_eq(&diagnostics.render());
    }

    #[test]
    fn test_unknown_member_messages_scale_with_types() {
        let (_, _, diagnostics) = run("player.name.bogus");
        expect![[r#"error: Tag part 'bogus' does not exist for object type ElementTag"#]]
            .assert_eq(&diagnostics.render());

        let (_, _, diagnostics) = run("entity[e].location.bogus.more");
        expect![[r#"error: Tag part 'bogus' does not exist for object type LocationTag"#]]
            .assert_eq(&diagnostics.render());

        let (_, _, diagnostics) = run("entity[e].bogus");
        expect![[r#"error: Tag part 'bogus' does not exist for object types EntityTag, PlayerTag"#]]
            .assert_eq(&diagnostics.render());

        let (_, _, diagnostics) = run("context.event.bogus");
        expect![[r#"error: Tag part 'bogus' does not exist for any applicable object types"#]]
            .assert_eq(&diagnostics.render());
    }

    #[test]
    fn test_unresolved_return_type_halts() {
        let (_, outcome, diagnostics) = run("player.broken_member.name");
        assert_eq!(outcome, TraceOutcome::Halted);
        assert_eq!(
            diagnostics.errors,
            [TraceError::UnknownReturnType {
                returns: "MissingTag".to_string()
            }]
        );
    }

    #[test]
    fn test_retrace_is_identical() {
        let registry = fixture::registry();
        let config = TraceConfig::default();
        let mut tag = WrittenTag::parse("player.money.bogus").unwrap();

        let mut first = CollectedDiagnostics::new();
        let first_outcome = trace_tag(&registry, &config, &mut tag, &mut first);
        let after_first = tag.clone();

        let mut second = CollectedDiagnostics::new();
        let second_outcome = trace_tag(&registry, &config, &mut tag, &mut second);

        assert_eq!(first, second);
        assert_eq!(first_outcome, second_outcome);
        assert_eq!(after_first, tag);
    }

    #[test]
    fn test_empty_tag() {
        let registry = fixture::registry();
        let mut tag = WrittenTag::from_parts(Vec::new());
        let mut diagnostics = CollectedDiagnostics::new();
        let outcome = trace_tag(&registry, &TraceConfig::default(), &mut tag, &mut diagnostics);
        assert_eq!(outcome, TraceOutcome::Empty);
        assert_eq!(diagnostics, CollectedDiagnostics::default());
    }
}
