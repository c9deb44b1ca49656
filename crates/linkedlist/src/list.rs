//! The singly-linked list container.
//!
//! [`LinkedList`] owns a chain of [`Node`]s starting at its head. Every
//! operation walks that chain from the head; there is no cached tail or
//! length, so appends and length queries are linear in the size of the list.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::index::Index;
use crate::node::{Link, Node};
use crate::value::Value;

/// What `set_item` accepts as an index.
const INTEGER_ONLY: &str = "an integer";

/// A singly-linked list.
///
/// The element type defaults to [`Value`], so a plain `LinkedList` holds
/// heterogeneous elements. The end of the chain is marked by the link, not
/// by the payload, so any value can be stored without cutting the chain
/// short.
///
/// # Examples
///
/// ```
/// use linkedlist::{linked_list, LinkedList, Slice, Value};
///
/// let mut list: LinkedList = linked_list![7, "Hello", vec![1, 2, 3]];
/// assert_eq!(list.len(), 3);
///
/// list.remove(&Value::from("Hello"))?;
/// list.set_item(0, Value::from(9))?;
/// assert_eq!(list.to_string(), "9 -> [1, 2, 3] -> None");
///
/// let reversed = list.get_item(Slice::reversed())?;
/// assert_eq!(reversed.to_string(), "[1, 2, 3] -> 9 -> None");
/// # Ok::<(), linkedlist::Error>(())
/// ```
pub struct LinkedList<T = Value> {
    head: Link<T>,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { head: None }
    }

    /// The first node of the chain, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Check if the list has no head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Count the nodes by walking the whole chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over the values from head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Append values at the tail, in order.
    ///
    /// Each value walks the chain from the head to find the current tail.
    /// Appending nothing leaves the list untouched.
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut appended = 0_usize;
        for value in values {
            *self.tail_link_mut() = Some(Box::new(Node::new(value)));
            appended += 1;
        }
        if appended > 0 {
            trace!("Appended {} value(s)", appended);
        }
    }

    /// Return the value `index` steps from the head.
    ///
    /// Unlike [`get_item`](Self::get_item) this never fails: a negative
    /// index, an index past the tail or an empty list all give `None`.
    #[must_use]
    pub fn get(&self, index: isize) -> Option<&T> {
        let steps = usize::try_from(index).ok()?;
        self.iter().nth(steps)
    }

    /// Overwrite the value at an integer position, keeping the node in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndexType`] for a slice index and
    /// [`Error::IndexOutOfRange`] when the walk runs off the chain, including
    /// negative positions and the empty list.
    pub fn set_item(&mut self, index: impl Into<Index>, value: T) -> Result<()> {
        let index = match index.into() {
            Index::Position(index) => index,
            slice @ Index::Slice(_) => {
                return Err(Error::invalid_index_type(slice, INTEGER_ONLY));
            }
        };

        match usize::try_from(index)
            .ok()
            .and_then(|steps| self.node_at_mut(steps))
        {
            Some(node) => {
                node.data = value;
                debug!("Replaced value at index {}", index);
                Ok(())
            }
            None => Err(Error::index_out_of_range(index, self.len())),
        }
    }

    fn tail_link_mut(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn link_at_mut(&mut self, steps: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..steps {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn node_at_mut(&mut self, steps: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..steps {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { data, next } = *node;
            self.head = next;
            data
        })
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Unlink the first node whose value equals `value`.
    ///
    /// Later duplicates are left alone. The chain is only modified once a
    /// match has been found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueNotFound`] if no node holds `value`.
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: fmt::Display,
    {
        let Some(position) = self.iter().position(|data| data == value) else {
            return Err(Error::value_not_found(value));
        };

        if let Some(link) = self.link_at_mut(position) {
            if let Some(node) = link.take() {
                let Node { next, .. } = *node;
                *link = next;
            }
        }
        debug!("Removed value at position {}", position);
        Ok(())
    }
}

impl<T: Clone> LinkedList<T> {
    /// Collect the values into a `Vec`, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    pub fn to_sequence(&self) -> Result<Vec<T>> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.iter().cloned().collect())
    }

    /// Build a new list from a position or a slice of this one.
    ///
    /// A position selects one element (negative positions count from the
    /// end). A slice follows sequence-slicing rules: bounds clamp, a negative
    /// step reverses, and an empty selection gives an empty list. The source
    /// list is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if this list is empty,
    /// [`Error::IndexOutOfRange`] for a position outside the list, and
    /// [`Error::ZeroSliceStep`] for a slice with a step of zero.
    pub fn get_item(&self, index: impl Into<Index>) -> Result<Self> {
        let index = index.into();
        let sequence = self.to_sequence()?;
        let len = sequence.len();

        let mut result = Self::new();
        match index {
            Index::Position(position) => {
                let at = Index::resolve_position(position, len)?;
                result.append(sequence.into_iter().nth(at));
            }
            Index::Slice(slice) => {
                let positions = slice.positions(len)?;
                let mut slots: Vec<Option<T>> = sequence.into_iter().map(Some).collect();
                result.append(positions.into_iter().filter_map(|at| slots[at].take()));
            }
        }
        trace!("Selected [{}] from list of length {}", index, len);
        Ok(result)
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// Print the list to standard output.
    ///
    /// ```text
    /// Elements of List:
    /// 8 -> 7 -> hello -> None
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty, or
    /// [`Error::Io`] if standard output cannot be written.
    pub fn display_elements(&self) -> Result<()> {
        self.write_elements(&mut io::stdout().lock(), &DisplayConfig::default())
    }

    /// Write the rendering of [`display_elements`](Self::display_elements)
    /// to `out` using the given style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty, or
    /// [`Error::Io`] if writing fails.
    pub fn write_elements<W: Write>(&self, out: &mut W, style: &DisplayConfig) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        writeln!(out, "{}", style.label)?;
        for data in self {
            write!(out, "{data}{}", style.separator)?;
        }
        writeln!(out, "{}", style.terminator)?;
        Ok(())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so dropping a long chain cannot overflow the stack.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the chain line alone: `7 -> Hello -> None`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self {
            write!(f, "{data} -> ")?;
        }
        f.write_str("None")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`], head to tail.
#[derive(Debug)]
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Build a [`LinkedList`] from a list of values, converting each with `Into`.
///
/// ```
/// use linkedlist::{linked_list, LinkedList};
///
/// let list: LinkedList = linked_list![8, 7, "hello"];
/// assert_eq!(list.to_string(), "8 -> 7 -> hello -> None");
/// ```
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::LinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::LinkedList::new();
        list.append([$(::core::convert::Into::into($value)),+]);
        list
    }};
}
