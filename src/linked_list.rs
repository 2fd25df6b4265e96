use std::fmt;
use std::iter::FromIterator;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::ListError;

type Link<T> = Option<Box<Node<T>>>;

pub struct LinkedList<T> {
    head: Link<T>,
    size: usize,
}

pub struct LinkedListIter<'a, T> {
    current: Option<&'a Node<T>>,
}

/// One element of the chain. Links are only ever rewired by the owning `LinkedList`.
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<'a, T> Iterator for LinkedListIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        match self.current {
            Some(node) => {
                self.current = node.next.as_deref();
                Some(&node.value)
            }
            None => None,
        }
    }
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, or `None` for the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None, size: 0 }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.get_size() == 0
    }

    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter {
            current: self.head.as_deref(),
        }
    }

    /// Adds `value` as the new tail. Walks the whole chain.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value, None)));
        self.size += 1;
    }

    /// Adds `value` as the new head.
    pub fn prepend(&mut self, value: T) {
        let new_node: Box<Node<T>> = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.size += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node: Box<Node<T>> = self.head.take()?;
        self.head = node.next;
        self.size -= 1;
        Some(node.value)
    }

    /// Releases every node. The chain is unlinked one node at a time so dropping a long list
    /// never recurses.
    pub fn clear(&mut self) {
        let released = self.size;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
        log::trace!("cleared list, released {} nodes", released);
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the link (either `head` or some node's `next`) that owns the first node holding
    /// `value`. If there is no such node, the returned link is the empty one past the tail.
    fn link_to_mut(&mut self, value: &T) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |node| node.value != *value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        cursor
    }

    /// Returns the first node, in traversal order, holding `value`.
    pub fn find(&self, value: &T) -> Result<&Node<T>, ListError> {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.value == *value {
                return Ok(node);
            }
            current = node.next.as_deref();
        }
        Err(ListError::NotFound)
    }

    /// Returns the node immediately preceding the first node holding `value`. When that node is
    /// the head there is no predecessor and `Ok(None)` is returned.
    pub fn find_prev(&self, value: &T) -> Result<Option<&Node<T>>, ListError> {
        let mut prev: Option<&Node<T>> = None;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.value == *value {
                return Ok(prev);
            }
            prev = Some(node);
            current = node.next.as_deref();
        }
        Err(ListError::NotFound)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_ok()
    }

    /// Splices a node holding `value` right after the first node holding `anchor`.
    pub fn insert_after(&mut self, anchor: &T, value: T) -> Result<(), ListError> {
        match self.link_to_mut(anchor) {
            Some(node) => {
                node.next = Some(Box::new(Node::new(value, node.next.take())));
            }
            None => return Err(ListError::OperationFailed),
        }
        self.size += 1;
        Ok(())
    }

    /// Splices a node holding `value` right before the first node holding `anchor`. If the
    /// anchor is the head, the new node becomes the head.
    pub fn insert_before(&mut self, anchor: &T, value: T) -> Result<(), ListError> {
        let link = self.link_to_mut(anchor);
        match link.take() {
            Some(anchor_node) => {
                *link = Some(Box::new(Node::new(value, Some(anchor_node))));
            }
            None => return Err(ListError::OperationFailed),
        }
        self.size += 1;
        Ok(())
    }

    /// Unlinks the first node holding `value` and hands its value back.
    pub fn delete(&mut self, value: &T) -> Result<T, ListError> {
        let link = self.link_to_mut(value);
        let removed = match link.take() {
            Some(mut node) => {
                *link = node.next.take();
                node.value
            }
            None => return Err(ListError::ValueAbsent),
        };
        self.size -= 1;
        Ok(removed)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Values in traversal order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in iter {
            *tail = Some(Box::new(Node::new(value, None)));
            list.size += 1;
            if let Some(node) = tail {
                tail = &mut node.next;
            }
        }
        log::trace!("built list of {} nodes", list.size);
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, rhs: &LinkedList<T>) -> bool {
        if self.size != rhs.size {
            return false;
        }
        self.iter().eq(rhs.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIter<'a, T>;

    fn into_iter(self) -> LinkedListIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(LinkedList::from)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
