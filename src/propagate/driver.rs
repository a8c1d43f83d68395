//! Iteration driver: runs base resolution over every decorator, pass after
//! pass, until the graph stops changing or the pass budget is spent.
//!
//! Decorators depend on each other: a decorator can only copy attributes that
//! its abstract has already received from its own decorators. Instead of
//! ordering that dependency graph, every retryable decorator is attempted in
//! every pass. A chain of `n` dependent decorators therefore needs at most `n`
//! passes (plus one to observe the fixpoint); deeper chains processed in an
//! unlucky order are left partially propagated and reported.

use super::collect::{AbstractIndex, DecoratorIndex, DecoratorState, classify};
use super::config::PropagationConfig;
use super::diagnostics::{self, Diagnostic, pass_count};
use super::finder::{LexicalFinder, ReferenceFinder};
use super::outcome::{ResolveOutcome, Unresolved};
use super::resolver::BaseResolver;
use crate::base::NodeId;
use crate::graph::ProgramGraph;

/// Summary of a propagation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Passes actually run.
    pub passes: usize,
    /// Whether the last pass left the graph unchanged.
    pub converged: bool,
    pub attributes_added: usize,
    pub edges_added: usize,
    /// Decorators by final state.
    pub resolved: usize,
    pub pending: usize,
    pub unresolvable: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-pass counters.
#[derive(Clone, Copy, Debug, Default)]
struct PassStats {
    attempted: usize,
    resolved: usize,
    attributes_added: usize,
    edges_added: usize,
    changed: bool,
}

/// Propagates attributes into objects that enclose decorators.
pub struct InnerPropagator<'g> {
    graph: &'g mut ProgramGraph,
    config: PropagationConfig,
    finder: Box<dyn ReferenceFinder + 'g>,
}

impl<'g> InnerPropagator<'g> {
    pub fn new(graph: &'g mut ProgramGraph) -> Self {
        Self {
            graph,
            config: PropagationConfig::default(),
            finder: Box::new(LexicalFinder),
        }
    }

    pub fn with_config(mut self, config: PropagationConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `finder` instead of the default [`LexicalFinder`].
    pub fn with_finder(mut self, finder: impl ReferenceFinder + 'g) -> Self {
        self.finder = Box::new(finder);
        self
    }

    /// Run collection and the bounded passes, mutating the graph in place.
    pub fn run(mut self) -> PropagationReport {
        let (mut decorators, abstracts) = classify(self.graph.tree(), &self.config.sentinel);
        if self.config.register_targets_upfront {
            self.register_targets(&decorators);
        }

        let mut report = PropagationReport::default();
        for pass in 1..=self.config.max_passes {
            let stats = self.run_pass(&mut decorators, &abstracts);
            report.passes = pass;
            report.attributes_added += stats.attributes_added;
            report.edges_added += stats.edges_added;
            report.converged = !stats.changed;
            tracing::debug!(
                "[PROPAGATE] pass {}: {} attempted, {} resolved, {} pending, {} unresolvable, +{} attributes, +{} edges",
                pass,
                stats.attempted,
                stats.resolved,
                decorators.count_in(DecoratorState::Pending),
                decorators.count_in(DecoratorState::Unresolvable),
                stats.attributes_added,
                stats.edges_added
            );
            if report.converged && self.config.stop_at_fixpoint {
                break;
            }
        }

        self.finish(report, &mut decorators)
    }

    fn register_targets(&mut self, decorators: &DecoratorIndex) {
        let tree = self.graph.tree();
        let parents: Vec<_> = decorators
            .entries()
            .iter()
            .filter_map(|entry| tree.parent(entry.object))
            .collect();
        for parent in parents {
            self.graph.ensure_node(parent);
        }
    }

    fn run_pass(
        &mut self,
        decorators: &mut DecoratorIndex,
        abstracts: &AbstractIndex,
    ) -> PassStats {
        let mut stats = PassStats::default();
        let mut resolver = BaseResolver::new(self.graph, abstracts, self.finder.as_ref());
        for entry in decorators.entries_mut() {
            if !entry.is_retryable() {
                continue;
            }
            let outcome = resolver.resolve(entry.object);
            entry.record(&outcome);
            stats.attempted += 1;
            stats.resolved += usize::from(outcome.is_resolved());
            stats.changed |= outcome.changed_graph();
            if let ResolveOutcome::Resolved { added, new_edge, .. } = outcome {
                stats.attributes_added += added;
                stats.edges_added += usize::from(new_edge);
            }
        }
        stats
    }

    /// Settle entry states once no further pass will run.
    ///
    /// At a fixpoint nothing pending can ever advance, so pending entries
    /// become unresolvable. Otherwise the budget ran out mid-propagation and
    /// resolved entries whose source still holds attributes the target lacks
    /// are pending again.
    fn settle(&self, converged: bool, decorators: &mut DecoratorIndex) {
        for entry in decorators.entries_mut() {
            match entry.state {
                DecoratorState::Pending if converged => entry.mark_unresolvable(),
                DecoratorState::Resolved if !converged => {
                    let incomplete = entry
                        .link
                        .is_some_and(|(target, source)| !self.is_complete(target, source));
                    if incomplete {
                        entry.mark_pending(Unresolved::SourceIncomplete);
                    }
                }
                _ => {}
            }
        }
    }

    /// Whether `target` already holds every attribute of `source`.
    fn is_complete(&self, target: NodeId, source: NodeId) -> bool {
        let Some(target) = self.graph.node(target) else {
            return false;
        };
        self.graph
            .attributes(source)
            .iter()
            .all(|attr| target.attribute_from(attr.object).is_some())
    }

    fn finish(
        self,
        mut report: PropagationReport,
        decorators: &mut DecoratorIndex,
    ) -> PropagationReport {
        self.settle(report.converged, decorators);
        report.resolved = decorators.count_in(DecoratorState::Resolved);
        report.pending = decorators.count_in(DecoratorState::Pending)
            + decorators.count_in(DecoratorState::Unresolved);
        report.unresolvable = decorators.count_in(DecoratorState::Unresolvable);

        for entry in decorators.entries() {
            match entry.state {
                DecoratorState::Unresolvable => {
                    if let Some(reason) = &entry.reason {
                        report
                            .diagnostics
                            .push(diagnostics::unresolvable(entry.object, reason));
                    }
                }
                DecoratorState::Pending | DecoratorState::Unresolved => {
                    report.diagnostics.push(diagnostics::budget_exhausted(
                        entry.object,
                        report.passes,
                        entry.reason.as_ref(),
                    ));
                }
                DecoratorState::Resolved => {}
            }
        }

        if report.pending > 0 {
            tracing::warn!(
                "[PROPAGATE] {} decorators still pending after {}",
                report.pending,
                pass_count(report.passes)
            );
        }
        tracing::info!(
            "[PROPAGATE] done in {} passes (converged: {}): {} resolved, {} pending, {} unresolvable",
            report.passes,
            report.converged,
            report.resolved,
            report.pending,
            report.unresolvable
        );
        report
    }
}

/// Propagate inner attributes over `graph` with the default configuration
/// and the [`LexicalFinder`].
pub fn propagate_inner_attrs(graph: &mut ProgramGraph) -> PropagationReport {
    InnerPropagator::new(graph).run()
}
