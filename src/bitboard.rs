//! Fixed-size occupancy masks packed into an unsigned integer.
//!
//! A `BitBoard<T, N>` stores an `N×N` grid in the low `N * N` bits of `T`,
//! row-major. Ships keep one mask each and the board unions them, so spacing
//! rules become a handful of shifts and ANDs instead of nested cell loops.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

/// Errors returned by bitboard operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N * N` cells do not fit in the backing integer, or `N` is zero.
    #[error("a {n}x{n} board does not fit in {capacity} bits")]
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is outside `[0, N)`.
    #[error("cell ({row}, {col}) is out of bounds")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// An `N×N` occupancy mask stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;
    const CAPACITY: usize = mem::size_of::<T>() * 8;
    const FITS: bool = N > 0 && Self::BOARD_BITS <= Self::CAPACITY;
    const ASSERT_FITS: () = assert!(Self::FITS, "N * N must fit in the bits of T");

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == T::zero().count_zeros() as usize {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Bits of the given column in every row.
    fn column(col: usize) -> T {
        (0..N).fold(T::zero(), |acc, row| acc | (T::one() << (row * N + col)))
    }

    /// Create an empty mask. Fails to compile when the grid does not fit in `T`.
    #[inline]
    pub fn new() -> Self {
        let () = Self::ASSERT_FITS;
        BitBoard { bits: T::zero() }
    }

    /// Create an empty mask, reporting an undersized `T` as an error.
    pub fn try_new() -> Result<Self, BitBoardError> {
        if Self::FITS {
            Ok(BitBoard { bits: T::zero() })
        } else {
            Err(BitBoardError::SizeTooLarge {
                n: N,
                capacity: Self::CAPACITY,
            })
        }
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a mask from the raw integer, dropping bits past `N * N`.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        let () = Self::ASSERT_FITS;
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a mask from `(row, col)` positions.
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// The cells of this mask plus every cell touching one of them, diagonals
    /// included.
    pub fn neighborhood(&self) -> Self {
        // Column masks stop a horizontal shift from wrapping onto the next row.
        let first = Self::column(0);
        let last = Self::column(N - 1);
        let row_spread =
            self.bits | ((self.bits & !last) << 1) | ((self.bits & !first) >> 1);
        Self::from_raw(row_spread | (row_spread << N) | (row_spread >> N))
    }

    /// Iterator over occupied cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}> ({} set):", N, N, self.count_ones())?;
        fmt::Display::fmt(self, f)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '·'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a mask.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
