//! Successor links between animation states
//!
//! Each state has at most one successor, taken automatically when its clip
//! runs out and nothing else is queued.

use crate::core::{Error, Result};

/// Fixed-size table mapping each state to its optional successor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTable {
    next: Vec<Option<usize>>,
}

impl LinkTable {
    /// Create a table for `count` states with every state unlinked
    pub fn new(count: usize) -> Result<Self> {
        let mut next = Vec::new();
        next.try_reserve_exact(count)?;
        next.resize(count, None);
        Ok(Self { next })
    }

    /// Number of states covered by the table
    pub(crate) fn len(&self) -> usize {
        self.next.len()
    }

    /// Successor of `state`, if linked
    pub fn get(&self, state: usize) -> Option<usize> {
        self.next.get(state).copied().flatten()
    }

    /// Link `from -> to`, replacing any previous successor of `from`
    pub fn link(&mut self, from: usize, to: usize) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        if from == to {
            return Err(Error::SelfLink(from));
        }
        self.next[from] = Some(to);
        Ok(())
    }

    /// Chain `from -> from+1 -> ... -> to`, wrapping past the last state
    pub fn link_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        if from == to {
            return Err(Error::SelfLink(from));
        }
        let count = self.len();
        for step in 0..self.span(from, to) {
            let a = (from + step) % count;
            self.next[a] = Some((a + 1) % count);
        }
        Ok(())
    }

    /// Chain every state in index order and close the cycle
    pub fn link_all(&mut self) {
        let count = self.len();
        if count < 2 {
            return;
        }
        for (state, next) in self.next.iter_mut().enumerate() {
            *next = Some((state + 1) % count);
        }
    }

    /// Remove the successor of `state`
    pub fn unlink(&mut self, state: usize) -> Result<()> {
        self.check(state)?;
        self.next[state] = None;
        Ok(())
    }

    /// Undo [`Self::link_range`]: clear the successors of `from..to`, wrapping
    ///
    /// `to` itself is left alone, since `link_range` never links it.
    pub fn unlink_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        if from == to {
            return Err(Error::SelfLink(from));
        }
        let count = self.len();
        for step in 0..self.span(from, to) {
            self.next[(from + step) % count] = None;
        }
        Ok(())
    }

    pub fn unlink_all(&mut self) {
        self.next.fill(None);
    }

    /// Forward distance from `from` to `to` around the cycle
    fn span(&self, from: usize, to: usize) -> usize {
        if to < from {
            self.len() - (from - to)
        } else {
            to - from
        }
    }

    fn check(&self, state: usize) -> Result<()> {
        if state < self.len() {
            Ok(())
        } else {
            Err(Error::InvalidState {
                state,
                count: self.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successors(table: &LinkTable) -> Vec<Option<usize>> {
        (0..table.len()).map(|s| table.get(s)).collect()
    }

    #[test]
    fn test_new_table_unlinked() {
        let table = LinkTable::new(3).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(successors(&table), vec![None, None, None]);
        assert_eq!(table.get(7), None);
    }

    #[test]
    fn test_first_link_takes_effect() {
        let mut table = LinkTable::new(3).unwrap();
        table.link(0, 2).unwrap();
        assert_eq!(table.get(0), Some(2));

        table.link(0, 1).unwrap();
        assert_eq!(table.get(0), Some(1));
    }

    #[test]
    fn test_link_rejects_bad_input() {
        let mut table = LinkTable::new(3).unwrap();
        assert!(matches!(table.link(1, 1), Err(Error::SelfLink(1))));
        assert!(matches!(
            table.link(0, 3),
            Err(Error::InvalidState { state: 3, count: 3 })
        ));
        assert!(matches!(table.link(5, 0), Err(Error::InvalidState { .. })));
        assert_eq!(successors(&table), vec![None, None, None]);
    }

    #[test]
    fn test_link_range_forward() {
        let mut table = LinkTable::new(5).unwrap();
        table.link_range(1, 3).unwrap();
        assert_eq!(successors(&table), vec![None, Some(2), Some(3), None, None]);
    }

    #[test]
    fn test_link_range_wraps() {
        let mut table = LinkTable::new(5).unwrap();
        table.link_range(3, 1).unwrap();
        assert_eq!(
            successors(&table),
            vec![Some(1), None, None, Some(4), Some(0)]
        );
    }

    #[test]
    fn test_link_all_cycles() {
        let mut table = LinkTable::new(3).unwrap();
        table.link_all();
        assert_eq!(successors(&table), vec![Some(1), Some(2), Some(0)]);

        let mut single = LinkTable::new(1).unwrap();
        single.link_all();
        assert_eq!(single.get(0), None);
    }

    #[test]
    fn test_unlink_range_wraps() {
        let mut table = LinkTable::new(5).unwrap();
        table.link_all();
        table.unlink_range(4, 1).unwrap();
        assert_eq!(
            successors(&table),
            vec![None, Some(2), Some(3), Some(4), None]
        );

        table.unlink(2).unwrap();
        assert_eq!(table.get(2), None);
        assert!(table.unlink(5).is_err());

        table.unlink_all();
        assert_eq!(successors(&table), vec![None; 5]);
    }

    #[test]
    fn test_unlink_range_keeps_end_state_link() {
        let mut table = LinkTable::new(5).unwrap();
        table.link(2, 4).unwrap();

        table.link_range(0, 2).unwrap();
        assert_eq!(
            successors(&table),
            vec![Some(1), Some(2), Some(4), None, None]
        );

        table.unlink_range(0, 2).unwrap();
        assert_eq!(
            successors(&table),
            vec![None, None, Some(4), None, None]
        );
    }
}
