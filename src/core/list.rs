//! core::list
//!
//! Ordered, index-addressable sequence used as the result type throughout
//! the engine.
//!
//! # Ordering
//!
//! The list has no implicit ordering. [`OrderedList::sort_by_swap`] and
//! [`OrderedList::filter_out`] are the only operations that reorder or drop
//! elements, and both keep the relative order of elements they do not touch.
//!
//! # Example
//!
//! ```
//! use dirshell::core::list::OrderedList;
//!
//! let mut list: OrderedList<i32> = vec![5, 4, 1, 3, 2].into();
//! list.sort_by_swap(|a, b| a > b);
//! assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
//!
//! let evens = list.filter_out(|n| n % 2 != 0);
//! assert_eq!(evens.as_slice(), &[2, 4]);
//! ```

use std::ops::{Index, IndexMut};

/// A growable sequence with comparator-driven sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> OrderedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an element at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the last element, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Append every element of `other`, in order.
    pub fn concat(&mut self, other: OrderedList<T>) {
        self.items.extend(other.items);
    }

    /// Sort in place with a "should swap" predicate.
    ///
    /// Adjacent elements `a, b` are swapped whenever `should_swap(a, b)` is
    /// true, repeated until a full pass makes no swaps. A strict predicate
    /// (`a > b`) never swaps equal keys, so their order is kept.
    pub fn sort_by_swap<F>(&mut self, mut should_swap: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = self.items.len();
        for pass in 0..len {
            let mut swapped = false;
            for j in 0..len.saturating_sub(pass + 1) {
                if should_swap(&self.items[j], &self.items[j + 1]) {
                    self.items.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> OrderedList<T> {
    /// Whether any element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|el| el == item)
    }
}

impl<T: Clone> OrderedList<T> {
    /// Copy of the list without the elements matching `reject`.
    ///
    /// The source list is left untouched and the kept elements stay in their
    /// original relative order.
    pub fn filter_out<F>(&self, mut reject: F) -> OrderedList<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|el| !reject(*el)).cloned().collect()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for OrderedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for OrderedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
