//! Fibonacci numbers by recursion.

use crate::memo::Memo;

/// Returns the n-th Fibonacci number, with f(0) = 0 and f(1) = 1.
///
/// Runs the two-branch recurrence directly, so it costs O(phi^n) calls;
/// fine for demonstration sizes, hopeless past n of about 40. Use
/// [`MemoizedFibonacci`] for anything larger.
pub fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// Fibonacci solver that collapses the recurrence to O(n) via caching.
///
/// Overflows `u64` past n = 93.
#[derive(Debug, Default)]
pub struct MemoizedFibonacci {
    cache: Memo<u32, u64>,
}

impl MemoizedFibonacci {
    /// Creates a solver with an empty cache.
    pub fn new() -> Self {
        Self { cache: Memo::new() }
    }

    /// Returns the n-th Fibonacci number.
    pub fn solve(&mut self, n: u32) -> u64 {
        if n < 2 {
            return u64::from(n);
        }
        if let Some(&hit) = self.cache.get(&n) {
            return hit;
        }

        let value = self.solve(n - 1) + self.solve(n - 2);
        self.cache.insert(n, value);
        value
    }
}
