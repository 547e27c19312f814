//! Linked-list engines over slab storage, with owned and ordered views.
//!
//! This crate is the storage core of the `strand` workspace. Nodes live in a
//! slab-like arena and link to each other by index, so a list is just three
//! words of bookkeeping (head, tail, length) over storage it does not own:
//!
//! ```text
//! Arena (slots + free list)   - owns the nodes, hands out stable indices
//! SinglyList / DoublyList     - link indices, maintain head/tail/len
//! SinglyLinkedList /
//! DoublyLinkedList /
//! OrderedList                 - bundle an engine with its arena, add
//!                               value-oriented operations and error returns
//! ```
//!
//! Index links instead of owning pointers sidestep the usual linked-list
//! ownership problems: no `Rc`/`RefCell` cycles, no unbounded recursive drop,
//! and a back-link is just another integer.
//!
//! # Quick Start
//!
//! Most callers want the owned types:
//!
//! ```
//! use strand_collections::{DoublyLinkedList, OrderedList};
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop_back(), Ok(2));
//! assert!(list.contains(&1));
//!
//! let mut ordered: OrderedList<u64> = OrderedList::new();
//! ordered.add(3);
//! ordered.add(1);
//! ordered.add(2);
//! assert_eq!(ordered.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! The engines are available directly when storage should be provisioned up
//! front or swapped for another backend:
//!
//! ```
//! use strand_collections::{DoublyArena, DoublyList};
//!
//! let mut arena: DoublyArena<u64> = DoublyArena::with_capacity(1024);
//! let mut list: DoublyList<u64, DoublyArena<u64>> = DoublyList::new();
//!
//! let idx = list.push_back(&mut arena, 42);
//! assert_eq!(list.remove(&mut arena, idx), Some(42));
//! ```
//!
//! # Choosing a variant
//!
//! | Type | Back link | `pop_back` | delete located node |
//! |------|-----------|------------|---------------------|
//! | [`SinglyLinkedList`] | no | O(n) | O(n) |
//! | [`DoublyLinkedList`] | yes | O(1) | O(1) |
//!
//! [`OrderedList`] keeps ascending order across every insert and rides on the
//! doubly engine for O(1) removal at both ends.
//!
//! # Iteration and mutation
//!
//! Iterators borrow the list for their whole lifetime, so mutating a list
//! mid-traversal is rejected at compile time rather than producing a torn
//! walk.
//!
//! # Feature Flags
//!
//! - `slab` - implement [`Storage`] for `slab::Slab`

#![warn(missing_docs)]

pub mod doubly;
pub mod error;
pub mod index;
mod owned;
pub mod singly;
pub mod storage;

pub use doubly::{DoublyArena, DoublyList, DoublyNode};
pub use error::{Empty, NotFound};
pub use index::Index;
pub use owned::{DoublyLinkedList, OrderedList, SinglyLinkedList};
pub use singly::{SinglyArena, SinglyList, SinglyNode};
pub use storage::{Arena, Storage};
