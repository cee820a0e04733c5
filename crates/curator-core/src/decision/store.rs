//! In-memory decision store for one review page.

use std::collections::{HashMap, HashSet};

use super::model::{BatchDecision, Decision, DecisionCounts, ReviewAction, Visibility};
use crate::photo::{StagedPhoto, StagingPage};

/// Working set of fetched photos plus one pending [`Decision`] per photo.
///
/// The key set of the decision mapping always equals the identifiers of the
/// loaded photos: entries are only created by [`DecisionStore::load`] and
/// only removed by `load` or [`DecisionStore::clear`].
///
/// Mutators addressed at an identifier that is not loaded are a no-op and
/// return `false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionStore {
    photos: Vec<StagedPhoto>,
    decisions: HashMap<String, Decision>,
    total_remaining: u64,
}

impl DecisionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set with `photos`, discarding every prior decision.
    ///
    /// A repeated identifier keeps only its first occurrence, so each loaded
    /// photo owns exactly one decision.
    pub fn load(&mut self, mut photos: Vec<StagedPhoto>) {
        let mut seen = HashSet::with_capacity(photos.len());
        photos.retain(|photo| seen.insert(photo.ulid.clone()));

        self.decisions = photos
            .iter()
            .map(|photo| (photo.ulid.clone(), Decision::neutral(photo.ulid.clone())))
            .collect();
        self.photos = photos;
    }

    /// Loads a staging page, recording its `total_remaining`.
    pub fn load_page(&mut self, page: StagingPage) {
        self.total_remaining = page.total_remaining;
        self.load(page.photos);
    }

    /// Empties the working set and the decision mapping.
    pub fn clear(&mut self) {
        self.photos.clear();
        self.decisions.clear();
        self.total_remaining = 0;
    }

    /// Toggles `action` on the photo: the same action twice returns to none,
    /// a different action replaces the current one.
    pub fn set_action(&mut self, ulid: &str, action: ReviewAction) -> bool {
        match self.decisions.get_mut(ulid) {
            Some(decision) => {
                decision.action = if decision.action == Some(action) {
                    None
                } else {
                    Some(action)
                };
                true
            }
            None => false,
        }
    }

    pub fn set_context(&mut self, ulid: &str, context: impl Into<String>) -> bool {
        match self.decisions.get_mut(ulid) {
            Some(decision) => {
                decision.context = context.into();
                true
            }
            None => false,
        }
    }

    pub fn set_visibility(&mut self, ulid: &str, visibility: Visibility) -> bool {
        match self.decisions.get_mut(ulid) {
            Some(decision) => {
                decision.visibility = visibility;
                true
            }
            None => false,
        }
    }

    /// Counts decisions marked approve and reject.
    pub fn counts(&self) -> DecisionCounts {
        self.decisions
            .values()
            .fold(DecisionCounts::default(), |mut acc, d| {
                match d.action {
                    Some(ReviewAction::Approve) => acc.approve += 1,
                    Some(ReviewAction::Reject) => acc.reject += 1,
                    None => {}
                }
                acc
            })
    }

    /// Actioned decisions in working-set order, ready for submission.
    pub fn pending(&self) -> Vec<BatchDecision> {
        self.photos
            .iter()
            .filter_map(|photo| self.decisions.get(&photo.ulid))
            .filter_map(Decision::to_batch_entry)
            .collect()
    }

    pub fn photos(&self) -> &[StagedPhoto] {
        &self.photos
    }

    pub fn photo(&self, index: usize) -> Option<&StagedPhoto> {
        self.photos.get(index)
    }

    pub fn decision(&self, ulid: &str) -> Option<&Decision> {
        self.decisions.get(ulid)
    }

    /// Identifier of the photo at `index` in the working set.
    pub fn ulid_at(&self, index: usize) -> Option<&str> {
        self.photos.get(index).map(|p| p.ulid.as_str())
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn total_remaining(&self) -> u64 {
        self.total_remaining
    }

    /// True when every loaded photo has exactly one decision and nothing else.
    pub fn is_consistent(&self) -> bool {
        self.decisions.len() == self.photos.len()
            && self
                .photos
                .iter()
                .all(|photo| self.decisions.contains_key(&photo.ulid))
    }
}
