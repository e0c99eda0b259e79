//! Directory tree walking and line aggregation
//!
//! `TreeWalker` visits the root and everything below it depth-first, in the
//! order the filesystem lists entries. Each decision (entered, counted,
//! ignored) is streamed to a [`VisitSink`] immediately, and every subtree
//! returns its own [`WalkSummary`] which the parent adds up.

mod config;
mod event;
mod walker;

pub use config::{resolve_root, WalkerConfig};
pub use event::{NodeKind, Outcome, VisitEvent, VisitSink, WalkSummary};
pub use walker::TreeWalker;
