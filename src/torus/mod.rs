//! Dense N-dimensional grids with wrap-around addressing
//!
//! A [`Torus`] stores `dims[0] * dims[1] * ... * dims[N-1]` elements in
//! row-major order (the last axis varies fastest). Every coordinate wraps
//! modulo its axis length, so any coordinate array addresses some element and
//! lookups cannot fail once the torus exists.
//!
//! # Example
//!
//! ```rust
//! use flagwater::torus::Torus;
//!
//! let mut grid = Torus::<u8, 2>::new([3, 4]).unwrap();
//! assert_eq!(grid.size(), 12);
//!
//! grid[[1, 2]] = 0b0101;
//! assert_eq!(grid[[1, 2]], 0b0101);
//! // one lap around each axis lands on the same cell
//! assert_eq!(grid[[4, 6]], 0b0101);
//! assert_eq!(*grid.get_signed([-2, -2]), 0b0101);
//! ```

mod error;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::TorusError;

use std::ops::{Index, IndexMut};

/// A dense grid of `N` dimensions whose coordinates wrap around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Torus<T, const N: usize> {
    dims: [usize; N],
    strides: [usize; N],
    data: Vec<T>,
}

/// Strides and element count for `dims`, holding elements of type `T`.
fn layout<T, const N: usize>(dims: [usize; N]) -> Result<([usize; N], usize), TorusError> {
    const { assert!(N > 0, "a torus needs at least one dimension") };

    if let Some(axis) = dims.iter().position(|&dim| dim == 0) {
        return Err(TorusError::ZeroDimension { axis });
    }

    let mut strides = [0; N];
    let mut size: usize = 1;
    for axis in (0..N).rev() {
        strides[axis] = size;
        size = size.checked_mul(dims[axis]).ok_or(TorusError::TooLarge)?;
    }

    // keeps every axis length representable as isize for signed lookups
    if size > isize::MAX as usize {
        return Err(TorusError::TooLarge);
    }

    // a Vec cannot hold more than isize::MAX bytes
    let bytes = size
        .checked_mul(std::mem::size_of::<T>())
        .ok_or(TorusError::TooLarge)?;
    if bytes > isize::MAX as usize {
        return Err(TorusError::TooLarge);
    }

    Ok((strides, size))
}

impl<T, const N: usize> Torus<T, N> {
    /// A torus with every element set to `T::default()`.
    pub fn new(dims: [usize; N]) -> Result<Self, TorusError>
    where
        T: Default,
    {
        Self::from_fn(dims, |_| T::default())
    }

    /// A torus with every element set to a clone of `value`.
    pub fn filled(dims: [usize; N], value: T) -> Result<Self, TorusError>
    where
        T: Clone,
    {
        let (strides, size) = layout::<T, N>(dims)?;
        Ok(Self {
            dims,
            strides,
            data: vec![value; size],
        })
    }

    /// A torus whose element at each coordinate is `f(coordinate)`.
    ///
    /// Elements are produced in row-major order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagwater::torus::Torus;
    ///
    /// let grid = Torus::from_fn([2, 3], |[row, col]| row * 10 + col).unwrap();
    /// let cells: Vec<usize> = grid.iter().copied().collect();
    /// assert_eq!(cells, vec![0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<F>(dims: [usize; N], mut f: F) -> Result<Self, TorusError>
    where
        F: FnMut([usize; N]) -> T,
    {
        let (strides, size) = layout::<T, N>(dims)?;
        let data = (0..size)
            .map(|offset| f(coordinates_of(offset, &dims, &strides)))
            .collect();
        Ok(Self {
            dims,
            strides,
            data,
        })
    }

    /// Wrap existing row-major data.
    pub fn from_vec(dims: [usize; N], data: Vec<T>) -> Result<Self, TorusError> {
        let (strides, size) = layout::<T, N>(dims)?;
        if data.len() != size {
            return Err(TorusError::LengthMismatch {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Self {
            dims,
            strides,
            data,
        })
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Length of each axis.
    pub fn dims(&self) -> [usize; N] {
        self.dims
    }

    /// Offset into the row-major storage for `coords`, after wrapping.
    pub fn offset(&self, coords: [usize; N]) -> usize {
        coords
            .iter()
            .zip(self.dims.iter().zip(self.strides.iter()))
            .map(|(&coord, (&dim, &stride))| (coord % dim) * stride)
            .sum()
    }

    /// The element at `coords`, each wrapped modulo its axis.
    pub fn get(&self, coords: [usize; N]) -> &T {
        &self.data[self.offset(coords)]
    }

    /// Mutable access to the element at `coords`.
    pub fn get_mut(&mut self, coords: [usize; N]) -> &mut T {
        let offset = self.offset(coords);
        &mut self.data[offset]
    }

    /// The element at signed `coords`; negative values count back from the
    /// end of their axis.
    pub fn get_signed(&self, coords: [isize; N]) -> &T {
        self.get(self.wrap(coords))
    }

    /// Mutable access to the element at signed `coords`.
    pub fn get_signed_mut(&mut self, coords: [isize; N]) -> &mut T {
        let coords = self.wrap(coords);
        self.get_mut(coords)
    }

    fn wrap(&self, coords: [isize; N]) -> [usize; N] {
        let mut wrapped = [0; N];
        for (axis, &coord) in coords.iter().enumerate() {
            // axis lengths fit in isize, checked in `layout`
            wrapped[axis] = coord.rem_euclid(self.dims[axis] as isize) as usize;
        }
        wrapped
    }

    /// The canonical coordinates of a storage offset.
    ///
    /// Returns `None` when `offset` is outside the storage.
    pub fn coordinates(&self, offset: usize) -> Option<[usize; N]> {
        (offset < self.data.len()).then(|| coordinates_of(offset, &self.dims, &self.strides))
    }

    /// All elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the torus, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

fn coordinates_of<const N: usize>(
    offset: usize,
    dims: &[usize; N],
    strides: &[usize; N],
) -> [usize; N] {
    let mut coords = [0; N];
    for axis in 0..N {
        coords[axis] = (offset / strides[axis]) % dims[axis];
    }
    coords
}

impl<T, const N: usize> Index<[usize; N]> for Torus<T, N> {
    type Output = T;

    fn index(&self, coords: [usize; N]) -> &T {
        self.get(coords)
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for Torus<T, N> {
    fn index_mut(&mut self, coords: [usize; N]) -> &mut T {
        self.get_mut(coords)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Torus<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_with_default() {
        let torus = Torus::<u32, 3>::new([2, 3, 4]).unwrap();
        assert_eq!(torus.size(), 24);
        assert_eq!(torus.dims(), [2, 3, 4]);
        assert!(torus.iter().all(|&cell| cell == 0));
    }

    #[test]
    fn test_filled() {
        let torus = Torus::filled([2, 2], 0xffu8).unwrap();
        assert_eq!(torus.as_slice(), &[0xff; 4]);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(Torus::<u8, 3>::new([2, 0, 0]), Err(TorusError::ZeroDimension { axis: 1 }));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert_eq!(Torus::<(), 2>::new([usize::MAX, 2]), Err(TorusError::TooLarge));
        assert_eq!(Torus::<(), 1>::new([usize::MAX]), Err(TorusError::TooLarge));
    }

    #[test]
    fn test_oversized_storage_rejected() {
        // element counts fit in isize, the byte counts do not
        let half = (isize::MAX as usize) / 2;
        assert_eq!(Torus::<u64, 1>::new([half]), Err(TorusError::TooLarge));
        assert_eq!(Torus::<u32, 2>::filled([1 << 31, 1 << 30], 0), Err(TorusError::TooLarge));
        assert_eq!(Torus::<u16, 1>::from_fn([half + 1], |_| 0), Err(TorusError::TooLarge));
        assert_eq!(Torus::<u64, 1>::from_vec([half], Vec::new()), Err(TorusError::TooLarge));
    }

    #[test]
    fn test_row_major_offsets() {
        let torus = Torus::<u8, 3>::new([2, 3, 4]).unwrap();
        assert_eq!(torus.offset([0, 0, 0]), 0);
        assert_eq!(torus.offset([0, 0, 1]), 1);
        assert_eq!(torus.offset([0, 1, 0]), 4);
        assert_eq!(torus.offset([1, 0, 0]), 12);
        assert_eq!(torus.offset([1, 2, 3]), 23);
    }

    #[test]
    fn test_coordinates_wrap() {
        let mut torus = Torus::<i32, 2>::new([3, 5]).unwrap();
        torus[[2, 4]] = 7;
        assert_eq!(torus[[5, 9]], 7);
        assert_eq!(*torus.get_signed([-1, -1]), 7);
        assert_eq!(*torus.get_signed([-4, 14]), 7);

        *torus.get_signed_mut([0, -5]) = 3;
        assert_eq!(*torus.get([0, 0]), 3);
    }

    #[test]
    fn test_coordinates_inverse_offset() {
        let torus = Torus::<u8, 3>::new([2, 3, 4]).unwrap();
        for offset in 0..torus.size() {
            let coords = torus.coordinates(offset).unwrap();
            assert_eq!(torus.offset(coords), offset);
        }
        assert_eq!(torus.coordinates(24), None);
    }

    #[test]
    fn test_from_vec_checks_length() {
        let torus = Torus::from_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(torus[[1, 0]], 3);

        assert_eq!(
            Torus::from_vec([2, 2], vec![1, 2, 3]),
            Err(TorusError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_one_dimensional_ring() {
        let ring = Torus::from_fn([4], |[i]| i as u8).unwrap();
        assert_eq!(ring[[5]], 1);
        assert_eq!(*ring.get_signed([-1]), 3);
    }

    #[test]
    fn test_iter_mut_and_into_vec() {
        let mut torus = Torus::<u8, 2>::new([2, 2]).unwrap();
        for (i, cell) in torus.iter_mut().enumerate() {
            *cell = 1 << i;
        }
        let total: u8 = (&torus).into_iter().fold(0, |acc, &cell| acc | cell);
        assert_eq!(total, 0b1111);
        assert_eq!(torus.into_vec(), vec![1, 2, 4, 8]);
    }
}
