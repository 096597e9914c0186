//! Non-empty vector for runtime-sized flag lists
//!
//! Every list-taking flag query needs at least one flag. Fixed lists are
//! written as arrays and checked at compile time; lists whose length is only
//! known at runtime use [`NonEmptyVec`], which cannot be constructed empty.
//!
//! # Examples
//!
//! ```
//! use flagwater::NonEmptyVec;
//!
//! let flags = NonEmptyVec::new(0b0001u8, vec![0b0010, 0b0100]);
//! assert_eq!(flags.head(), &0b0001);
//! assert_eq!(flags.tail(), &[0b0010, 0b0100]);
//! assert_eq!(flags.len(), 3);
//! ```

/// A vector guaranteed to contain at least one element.
///
/// # Example
///
/// ```
/// use flagwater::NonEmptyVec;
///
/// let configured = vec![0b01u8, 0b10];
/// let flags = NonEmptyVec::from_vec(configured).unwrap();
/// assert_eq!(flags.len(), 2);
///
/// assert!(NonEmptyVec::<u8>::from_vec(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use flagwater::NonEmptyVec;
    ///
    /// let one = NonEmptyVec::singleton(0x80u8);
    /// assert_eq!(one.len(), 1);
    /// assert_eq!(one.last(), &0x80);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Convert a `Vec`, returning `None` when it is empty.
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element; the head when there is no tail.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Map a function over every element, keeping non-emptiness.
    ///
    /// # Example
    ///
    /// ```
    /// use flagwater::NonEmptyVec;
    ///
    /// let bits = NonEmptyVec::new(0u32, vec![3, 5]);
    /// let masks = bits.map(|bit| 1u32 << bit);
    /// assert_eq!(masks.into_vec(), vec![0b1, 0b1000, 0b10_0000]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> std::iter::Chain<std::iter::Once<&T>, std::slice::Iter<'_, T>> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<T> for NonEmptyVec<T> {
    fn from(value: T) -> Self {
        Self::singleton(value)
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton(0b100u8);
        assert_eq!(nev.head(), &0b100);
        assert_eq!(nev.tail(), &[] as &[u8]);
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let nev = NonEmptyVec::from_vec(vec![1u8, 2, 4]).unwrap();
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 4]);

        assert!(NonEmptyVec::from_vec(Vec::<u8>::new()).is_none());
    }

    #[test]
    fn test_last() {
        assert_eq!(NonEmptyVec::new(1u8, vec![2, 4]).last(), &4);
        assert_eq!(NonEmptyVec::singleton(8u8).last(), &8);
    }

    #[test]
    fn test_push_and_index() {
        let mut nev = NonEmptyVec::singleton(1u16);
        nev.push(2);
        nev.push(4);
        assert_eq!(nev.len(), 3);
        assert_eq!(nev[0], 1);
        assert_eq!(nev[1], 2);
        assert_eq!(nev[2], 4);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let nev = NonEmptyVec::singleton(1u8);
        let _ = nev[1];
    }

    #[test]
    fn test_iteration_preserves_order() {
        let nev = NonEmptyVec::new(1u8, vec![2, 4, 8]);
        let by_ref: Vec<u8> = nev.iter().copied().collect();
        assert_eq!(by_ref, vec![1, 2, 4, 8]);

        let owned: Vec<u8> = nev.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_from_single_value() {
        let nev: NonEmptyVec<u32> = 0x10.into();
        assert_eq!(nev.into_vec(), vec![0x10]);
    }
}
