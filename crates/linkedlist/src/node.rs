//! Chain links.

/// Owning link to the next node; `None` marks the end of the chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single link of a [`LinkedList`](crate::LinkedList).
///
/// Each node is owned by exactly one predecessor, or by the list itself when
/// it is the head.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// The value held by this node.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The successor of this node, if any.
    #[must_use]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_terminal() {
        let node = Node::new(7);
        assert_eq!(*node.data(), 7);
        assert!(node.next().is_none());
    }

    #[test]
    fn test_next_follows_link() {
        let mut first = Node::new("a");
        first.next = Some(Box::new(Node::new("b")));

        let second = first.next().map(Node::data);
        assert_eq!(second, Some(&"b"));
    }
}
