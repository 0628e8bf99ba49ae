//! Core types for intlist
//!
//! A singly linked list of `i32` values, the two traversals over it
//! (print and sum), and the error and source-position types shared by
//! the rest of the workspace.

pub mod error;
pub mod list;
pub mod source;
pub mod traversal;

pub use error::ListError;
pub use list::{IntList, Iter, Node, values};
pub use source::{Position, SourceMap, Span};
pub use traversal::{DELIMITER, ELEMENT_PREFIX, checked_sum, print, sum, write_to};
