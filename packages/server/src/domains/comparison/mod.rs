//! Side-by-side property comparison.
//!
//! The selection itself is a small bounded set (the web client persists it
//! locally); the server enforces the same rules when resolving a compare
//! request: at most four properties, no duplicates, request order preserved.

use uuid::Uuid;

/// Upper bound on properties compared at once.
pub const MAX_COMPARED: usize = 4;

/// Outcome of adding a property to the comparison selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    Full,
}

/// An ordered, deduplicated selection of at most four property ids.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    ids: Vec<Uuid>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from caller-supplied ids, dropping duplicates and
    /// anything beyond the cap.
    pub fn from_ids(ids: impl IntoIterator<Item = Uuid>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if set.add(id) == AddOutcome::Full {
                break;
            }
        }
        set
    }

    pub fn add(&mut self, id: Uuid) -> AddOutcome {
        if self.ids.contains(&id) {
            return AddOutcome::AlreadyPresent;
        }
        if self.ids.len() >= MAX_COMPARED {
            return AddOutcome::Full;
        }
        self.ids.push(id);
        AddOutcome::Added
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_caps_at_four() {
        let mut set = ComparisonSet::new();
        for _ in 0..MAX_COMPARED {
            assert_eq!(set.add(Uuid::new_v4()), AddOutcome::Added);
        }
        assert_eq!(set.add(Uuid::new_v4()), AddOutcome::Full);
        assert_eq!(set.len(), MAX_COMPARED);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut set = ComparisonSet::new();
        let id = Uuid::new_v4();
        assert_eq!(set.add(id), AddOutcome::Added);
        assert_eq!(set.add(id), AddOutcome::AlreadyPresent);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicate_does_not_consume_capacity() {
        let mut set = ComparisonSet::new();
        let id = Uuid::new_v4();
        set.add(id);
        set.add(id);
        set.add(id);
        for _ in 0..3 {
            assert_eq!(set.add(Uuid::new_v4()), AddOutcome::Added);
        }
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_from_ids_preserves_order_and_caps() {
        let ids: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
        let set = ComparisonSet::from_ids(ids.iter().copied());
        assert_eq!(set.ids(), &ids[..4]);
    }

    #[test]
    fn test_from_ids_dedupes() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let set = ComparisonSet::from_ids([a, a, b]);
        assert_eq!(set.ids(), &[a, b]);
    }

    #[test]
    fn test_remove_and_clear() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut set = ComparisonSet::from_ids([a, b]);
        assert!(set.remove(a));
        assert!(!set.remove(a));
        assert!(!set.contains(a));
        set.clear();
        assert!(set.is_empty());
    }
}
