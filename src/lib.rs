//! A singly-linked list whose nodes are owned one by the next, together with the small operation
//! language used by the `listnode` binary.

pub mod command;
mod error;
pub mod linked_list;

pub use command::{Command, CommandError};
pub use error::ListError;
pub use linked_list::{LinkedList, LinkedListIter, Node};
