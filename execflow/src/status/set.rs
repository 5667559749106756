//! Compact, copyable sets of statuses.

use super::Status;
use std::fmt;

/// A set of [`Status`] values stored as a bitset.
///
/// All operations are `const fn`, so every named status group is a constant
/// evaluated at compile time and shared by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusSet(u32);

impl StatusSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a slice of statuses.
    #[must_use]
    pub const fn of(statuses: &[Status]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < statuses.len() {
            bits |= statuses[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns true if the status is a member of the set.
    #[must_use]
    pub const fn contains(self, status: Status) -> bool {
        self.0 & status.bit() != 0
    }

    /// Returns a copy of the set with the status added.
    #[must_use]
    pub const fn with(self, status: Status) -> Self {
        Self(self.0 | status.bit())
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the members present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns true if the sets share at least one member.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Returns the members of `self` not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns true if every member of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.difference(other).is_empty()
    }

    /// Returns the number of members.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Adds a status to the set.
    pub fn insert(&mut self, status: Status) {
        self.0 |= status.bit();
    }

    /// Iterates the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Status> {
        Status::ALL.into_iter().filter(move |status| self.contains(*status))
    }
}

impl FromIterator<Status> for StatusSet {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for status in iter {
            set.insert(status);
        }
        set
    }
}

impl<'a> FromIterator<&'a Status> for StatusSet {
    fn from_iter<I: IntoIterator<Item = &'a Status>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Debug for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_of_and_contains() {
        let set = StatusSet::of(&[Status::Queued, Status::Running]);
        assert!(set.contains(Status::Queued));
        assert!(set.contains(Status::Running));
        assert!(!set.contains(Status::Paused));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: StatusSet = [Status::Failed, Status::Failed, Status::Aborted].iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_algebra() {
        let a = StatusSet::of(&[Status::Queued, Status::Running]);
        let b = StatusSet::of(&[Status::Running, Status::Paused]);

        assert_eq!(a.union(b).len(), 3);
        assert_eq!(a.difference(b), StatusSet::of(&[Status::Queued]));
        assert_eq!(a.intersection(b), StatusSet::of(&[Status::Running]));
        assert!(a.intersects(b));
        assert!(!a.intersects(StatusSet::of(&[Status::Failed])));
        assert!(StatusSet::of(&[Status::Running]).is_subset(a));
        assert!(!b.is_subset(a));
        assert!(StatusSet::EMPTY.is_subset(a));
    }

    #[test]
    fn test_iter_in_declaration_order() {
        let set = StatusSet::of(&[Status::Aborted, Status::Queued, Status::Succeeded]);
        let members: Vec<Status> = set.iter().collect();
        assert_eq!(members, vec![Status::Queued, Status::Succeeded, Status::Aborted]);
    }

    #[test]
    fn test_debug_lists_members() {
        let set = StatusSet::EMPTY.with(Status::Paused);
        assert_eq!(format!("{set:?}"), "{Paused}");
    }
}
