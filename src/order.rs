use crate::error::{AxisError, Result};

/// Memory order of an array's backing storage.
///
/// - `RowMajor` means that the index along the last axis is the most rapidly changing
/// - `ColumnMajor` means that the index along the first axis is the most rapidly changing
///
/// Row major is called "C" order and column major is called "F" (Fortran) order,
/// which is also how the conversion functions spell them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Order {
    /// Row major or "C" order
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order {
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Parse the single letter spelling, `'C'` or `'F'` (case insensitive).
    pub fn from_char(c: char) -> Result<Order> {
        match c {
            'C' | 'c' => Ok(Order::RowMajor),
            'F' | 'f' => Ok(Order::ColumnMajor),
            _ => Err(AxisError::InvalidArgument(format!(
                "order must be one of 'C' or 'F', got {:?}",
                c
            ))),
        }
    }

    /// Return true if input is Order::RowMajor, false otherwise
    #[inline]
    pub fn is_row_major(self) -> bool {
        match self {
            Order::RowMajor => true,
            Order::ColumnMajor => false,
        }
    }

    /// Return true if input is Order::ColumnMajor, false otherwise
    #[inline]
    pub fn is_column_major(self) -> bool {
        !self.is_row_major()
    }

    /// Return the transpose: row major becomes column major and vice versa.
    #[inline]
    pub fn transpose(self) -> Order {
        match self {
            Order::RowMajor => Order::ColumnMajor,
            Order::ColumnMajor => Order::RowMajor,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::RowMajor
    }
}
