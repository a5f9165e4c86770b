use crate::binder::scan_struct;
use crate::cursor::Cursor;
use crate::record::ScanStruct;

/// Method-call form of [`scan_struct`] for any row.
///
/// ```rust,no_run
/// use sqlx::{Connection, SqliteConnection};
/// use sqlx_scan_struct::{ScanExt, ScanStruct};
///
/// #[derive(Default, ScanStruct)]
/// struct Person {
///     age: i64,
///     name: String,
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
/// let rows = sqlx::query("SELECT age, name FROM people").fetch_all(&mut conn).await?;
///
/// let mut people = Vec::new();
/// for row in &rows {
///     let mut person = Person::default();
///     row.scan_into(&mut person)?;
///     people.push(person);
/// }
/// # Ok(())
/// # }
/// ```
pub trait ScanExt: Cursor + Sized {
    /// Scans this row into `record`. See [`scan_struct`].
    ///
    /// # Errors
    ///
    /// Same as [`scan_struct`].
    fn scan_into<T>(&self, record: &mut T) -> crate::Result<()>
    where
        T: ScanStruct<Self>,
    {
        scan_struct(record, self)
    }
}

impl<C: Cursor> ScanExt for C {}
