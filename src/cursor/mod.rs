//! Row cursor module
//!
//! Pull-based, forward-only access to an accumulated result, one record per
//! call. Running out of records is a normal outcome signalled with `None`.

mod row_cursor;

pub use row_cursor::RowCursor;
