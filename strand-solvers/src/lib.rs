//! Recursive solvers with optional memoization.
//!
//! Three small problems driven by their recurrences, each in two flavors: a
//! plain recursive function and a memoized struct that answers repeat
//! queries from a cache.
//!
//! - [`hanoi`]: Towers of Hanoi plans as typed [`hanoi::Move`] lists
//! - [`factorial`]: n!
//! - [`fibonacci`]: the Fibonacci sequence
//!
//! The [`memo::Memo`] cache behind the memoized variants logs cache misses
//! at debug level through the `log` facade; the crate never installs a
//! logger itself.
//!
//! # Example
//!
//! ```
//! use strand_solvers::fibonacci::{fibonacci, MemoizedFibonacci};
//! use strand_solvers::hanoi;
//!
//! assert_eq!(fibonacci(10), 55);
//!
//! let mut fib = MemoizedFibonacci::new();
//! assert_eq!(fib.solve(90), 2_880_067_194_370_816_120);
//!
//! // 2^n - 1 moves for n disks
//! assert_eq!(hanoi::solve(4).len(), 15);
//! ```

#![warn(missing_docs)]

pub mod factorial;
pub mod fibonacci;
pub mod hanoi;
pub mod memo;

pub use factorial::{factorial, MemoizedFactorial};
pub use fibonacci::{fibonacci, MemoizedFibonacci};
pub use hanoi::{Move, Peg};
pub use memo::Memo;
