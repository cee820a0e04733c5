//! Decision domain module.
//!
//! # Module Structure
//!
//! - `model`: `Decision`, `ReviewAction`, `Visibility` and the batch wire form
//! - `store`: `DecisionStore`, the per-page working set of photos and decisions
//! - `pager`: cursor for the single-photo presentation

mod model;
mod pager;
mod store;

pub use model::{BatchDecision, Decision, DecisionCounts, ReviewAction, Visibility};
pub use pager::Pager;
pub use store::DecisionStore;
