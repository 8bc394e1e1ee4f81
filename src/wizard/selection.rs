//! Index-based picker over a fixed catalog
//!
//! The cursor is clamped at both ends. Moving past the first or last entry
//! is a no-op rather than a wrap.

use super::catalog::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionList<T: Choice> {
    cursor: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Choice> OptionList<T> {
    /// Start at the first catalog entry
    pub fn new() -> Self {
        Self {
            cursor: 0,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        T::ALL.len()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entry under the cursor
    pub fn current(&self) -> T {
        T::ALL[self.cursor]
    }

    /// Returns true if the cursor moved
    pub fn move_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor moved
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Entries paired with whether each sits under the cursor
    pub fn entries(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        T::ALL
            .iter()
            .enumerate()
            .map(move |(i, item)| (*item, i == self.cursor))
    }
}

impl<T: Choice> Default for OptionList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::catalog::{ConfirmAction, Framework, PackageManager};

    #[test]
    fn move_up_at_zero_is_idempotent() {
        let mut list: OptionList<PackageManager> = OptionList::new();
        for _ in 0..5 {
            assert!(!list.move_up());
            assert_eq!(list.cursor(), 0);
        }
    }

    #[test]
    fn move_down_clamps_at_last_entry() {
        let mut list: OptionList<ConfirmAction> = OptionList::new();
        for _ in 0..20 {
            list.move_down();
        }
        assert_eq!(list.cursor(), 6);
        assert_eq!(list.current(), ConfirmAction::Cancel);
        assert!(!list.move_down());
    }

    #[test]
    fn mixed_moves_stay_in_bounds() {
        let mut list: OptionList<Framework> = OptionList::new();
        let pattern = [true, true, false, true, false, false, false, true];
        for down in pattern.iter().cycle().take(64) {
            if *down {
                list.move_down();
            } else {
                list.move_up();
            }
            assert!(list.cursor() < list.len());
        }
    }

    #[test]
    fn entries_mark_only_the_cursor() {
        let mut list: OptionList<PackageManager> = OptionList::new();
        list.move_down();
        let active: Vec<_> = list
            .entries()
            .filter(|(_, active)| *active)
            .map(|(pm, _)| pm)
            .collect();
        assert_eq!(active, vec![PackageManager::Pnpm]);
    }
}
