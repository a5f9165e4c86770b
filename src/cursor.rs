use sqlx::{Column, ColumnIndex, Decode, Row, Type, ValueRef};

/// A single field that a cursor can decode a column into.
///
/// Every type SQLx can decode for a row's database is a target, so plain
/// scalars, `String`, `Option<T>` and `#[sqlx(transparent)]` newtypes all
/// bind without extra code. `Option<T>` receives `None` for SQL `NULL`.
///
/// Some drivers decode `NULL` into a non-`Option` type as its zero value, so
/// the binder rejects `NULL` for fields not marked nullable before any
/// target is decoded.
pub trait Target<C: ?Sized> {
    /// Decodes column `index` of the current row of `cursor` into `self`.
    ///
    /// # Errors
    ///
    /// Returns the SQLx error when the column cannot be decoded as `Self`.
    fn decode_from(&mut self, cursor: &C, index: usize) -> Result<(), sqlx::Error>;
}

impl<R, T> Target<R> for T
where
    R: Row,
    usize: ColumnIndex<R>,
    T: for<'r> Decode<'r, R::Database> + Type<R::Database>,
{
    fn decode_from(&mut self, row: &R, index: usize) -> Result<(), sqlx::Error> {
        *self = row.try_get(index)?;
        Ok(())
    }
}

/// A result row positioned by the data-access layer.
///
/// Implemented for every SQLx row type (`SqliteRow`, `MySqlRow`, `PgRow`, ...).
/// The binder only reads column names and hands back an ordered list of
/// targets; all decoding happens in [`Cursor::scan`].
pub trait Cursor {
    /// Column names of the current row, in result order.
    fn column_names(&self) -> Vec<String>;

    /// Whether column `index` of the current row holds SQL `NULL`.
    ///
    /// # Errors
    ///
    /// Returns the SQLx error when `index` is out of bounds.
    fn is_null(&self, index: usize) -> Result<bool, sqlx::Error>;

    /// Decodes column `i` into `targets[i]` for every column.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::Error::Decode`] when the number of targets differs
    /// from the number of columns, or the first error raised while decoding.
    fn scan(&self, targets: &mut [&mut dyn Target<Self>]) -> Result<(), sqlx::Error>;
}

impl<R> Cursor for R
where
    R: Row,
    usize: ColumnIndex<R>,
{
    fn column_names(&self) -> Vec<String> {
        self.columns()
            .iter()
            .map(|column| column.name().to_owned())
            .collect()
    }

    fn is_null(&self, index: usize) -> Result<bool, sqlx::Error> {
        Ok(self.try_get_raw(index)?.is_null())
    }

    fn scan(&self, targets: &mut [&mut dyn Target<Self>]) -> Result<(), sqlx::Error> {
        if targets.len() != self.len() {
            return Err(sqlx::Error::Decode(
                format!(
                    "expected {} destination arguments in scan, got {}",
                    self.len(),
                    targets.len()
                )
                .into(),
            ));
        }

        for (index, target) in targets.iter_mut().enumerate() {
            target.decode_from(self, index)?;
        }
        Ok(())
    }
}
