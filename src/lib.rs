//! intlist: a singly linked list of integers
//!
//! Re-exports the list core and the text reader so callers can depend on a
//! single package.

pub use intlist_core::*;
pub use intlist_lexer::{Lexer, SpannedToken, Token, parse_list, parse_list_with_filename};
