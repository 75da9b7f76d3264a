// Lexicographic permutation walk with skip-ahead.

/// Walks the distinct permutations of a multiset in lexicographic order.
///
/// [`advance`](Self::advance) takes a skip-ahead hint: the number of leading
/// symbols whose current arrangement is known to be useless. Every remaining
/// permutation that shares that prefix is skipped in one step.
#[derive(Debug, Clone)]
pub struct PermutationWalker<T> {
    items: Vec<T>,
    done: bool,
}

impl<T: Ord> PermutationWalker<T> {
    /// Start at the smallest permutation of `items`.
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_unstable();
        Self { items, done: false }
    }

    /// The current permutation, or `None` once the walk is finished.
    pub fn current(&self) -> Option<&[T]> {
        if self.done { None } else { Some(&self.items) }
    }

    /// Move to the next permutation that differs from the current one within
    /// its first `keep` positions. `keep >= len` steps to the immediate
    /// successor.
    ///
    /// Returns `false` when there is no such permutation; the walk is then
    /// finished.
    pub fn advance(&mut self, keep: usize) -> bool {
        if self.done {
            return false;
        }
        // Arranging the tail in descending order makes it the last
        // permutation of that tail, so the successor must change the prefix.
        if keep < self.items.len() {
            self.items[keep..].sort_unstable_by(|a, b| b.cmp(a));
        }
        if !next_permutation(&mut self.items) {
            self.done = true;
        }
        !self.done
    }
}

/// Rearrange `items` into its lexicographic successor.
///
/// Returns `false` (leaving `items` in descending order) if `items` is
/// already the last permutation.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Rightmost ascent.
    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };

    // Rightmost element greater than the pivot; one exists because of the ascent.
    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
