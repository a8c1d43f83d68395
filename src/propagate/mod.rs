//! Inner attribute propagation.
//!
//! Objects declared inside other objects may carry a decorator: an anonymous
//! inner object named with the sentinel (`@`) whose base says which abstract
//! the enclosing object copies. This module finds those abstracts and copies
//! their attributes into the enclosing objects, mutating the
//! [`ProgramGraph`](crate::graph::ProgramGraph) in place.
//!
//! ## Stages
//!
//! ```text
//! classify(tree)                 ← decorators + abstracts, one pass
//!     │
//!     ▼
//! BaseResolver::resolve(deco)    ← chain start + abstract source
//!     │
//!     ▼
//! AttributePropagator::propagate ← nested descent, copy, derivation edge
//!     │
//!     ▼
//! InnerPropagator::run           ← bounded passes, report + diagnostics
//! ```
//!
//! Nothing here returns an error: an attempt that cannot complete is retried
//! by the next pass or reported in the [`PropagationReport`].

mod attrs;
mod collect;
mod config;
mod diagnostics;
mod driver;
mod finder;
mod outcome;
mod resolver;

pub use attrs::AttributePropagator;
pub use collect::{AbstractIndex, DecoratorEntry, DecoratorIndex, DecoratorState, classify};
pub use config::PropagationConfig;
pub use diagnostics::{Diagnostic, Severity, codes};
pub use driver::{InnerPropagator, PropagationReport, propagate_inner_attrs};
pub use finder::{LexicalFinder, LookupContext, ReferenceFinder};
pub use outcome::{ResolveOutcome, Unresolved};
pub use resolver::{BaseResolver, chain_start};
