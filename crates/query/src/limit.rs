//! Limit adapter for query result streams.

/// Iterator adapter yielding at most `n` leading items of its input.
///
/// Finite and not restartable after exhaustion, like the query streams it
/// wraps. Items are pulled from the input one at a time, so early termination
/// wastes no work and each input item is consumed at most once.
pub struct Limit<I> {
    inner: I,
    remaining: Option<usize>,
}

/// Bounds a sequence to at most `n` leading items, preserving order.
///
/// With `n` of `None` or zero the input passes through unchanged (unbounded).
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> Limit<I> {
    let remaining = match n {
        None | Some(0) => None,
        Some(n) => Some(n),
    };
    Limit { inner: iter, remaining }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.remaining.as_mut() {
            None => self.inner.next(),
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                self.inner.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(n) => (
                lower.min(n),
                Some(upper.map_or(n, |u| u.min(n))),
            ),
        }
    }
}
