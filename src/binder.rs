use crate::cursor::{Cursor, Target};
use crate::error::Error;
use crate::record::ScanStruct;
use sqlx::error::UnexpectedNullError;

/// Scans the current row of `cursor` into the matching fields of `record`.
///
/// Every column must match exactly one field by case-insensitive name.
/// Fields that no column names are left untouched. When a struct declares
/// several fields with the same lowercased name, the first declared field
/// wins.
///
/// # Errors
///
/// - [`Error::UnmatchedColumn`] if a column has no matching field
/// - [`Error::DuplicateColumn`] if two columns resolve to the same field
/// - [`Error::Decode`] if a `NULL` column targets a field that is not
///   nullable, or SQLx fails to decode a column into its field
///
/// Column resolution and the `NULL` check finish before any field is
/// written, so those failures leave `record` unchanged. After any other
/// decode error the fields decoded before the failing column hold new values.
///
/// # Examples
///
/// ```rust,no_run
/// use sqlx::{Connection, SqliteConnection};
/// use sqlx_scan_struct::{scan_struct, ScanStruct};
///
/// #[derive(Debug, Default, ScanStruct)]
/// struct Person {
///     age: i64,
///     name: String,
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
/// let row = sqlx::query("SELECT 13 AS Age, 'Arne' AS Name")
///     .fetch_one(&mut conn)
///     .await?;
///
/// let mut person = Person::default();
/// scan_struct(&mut person, &row)?;
/// assert_eq!(person.age, 13);
/// # Ok(())
/// # }
/// ```
pub fn scan_struct<C, T>(record: &mut T, cursor: &C) -> crate::Result<()>
where
    C: Cursor,
    T: ScanStruct<C>,
{
    assert_eq!(
        T::NULLABLE.len(),
        T::FIELDS.len(),
        "ScanStruct::NULLABLE lists {} flags for {} declared fields",
        T::NULLABLE.len(),
        T::FIELDS.len()
    );

    let columns = cursor.column_names();
    tracing::trace!(columns = columns.len(), fields = T::FIELDS.len(), "Scanning row into struct");

    let order = resolve_columns(T::FIELDS, &columns)?;
    check_nulls(cursor, T::NULLABLE, &order, &columns)?;

    let mut slots: Vec<Option<&mut dyn Target<C>>> =
        record.targets().into_iter().map(Some).collect();
    assert_eq!(
        slots.len(),
        T::FIELDS.len(),
        "ScanStruct::targets returned {} targets for {} declared fields",
        slots.len(),
        T::FIELDS.len()
    );

    // `order` holds distinct indices, so each slot is taken at most once.
    let mut targets: Vec<&mut dyn Target<C>> = order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect();

    cursor.scan(&mut targets).map_err(|e| {
        tracing::debug!(error = %e, "Row decode failed");
        Error::Decode(e)
    })
}

/// Fails on the first `NULL` column whose field does not accept `NULL`.
fn check_nulls<C: Cursor>(
    cursor: &C,
    nullable: &[bool],
    order: &[usize],
    columns: &[String],
) -> crate::Result<()> {
    for (position, &field) in order.iter().enumerate() {
        if !nullable[field] && cursor.is_null(position)? {
            tracing::debug!(column = %columns[position], "NULL in non-nullable field");
            return Err(Error::Decode(sqlx::Error::ColumnDecode {
                index: columns[position].clone(),
                source: Box::new(UnexpectedNullError),
            }));
        }
    }
    Ok(())
}

/// Resolves each column to the index of its field in `fields`.
///
/// Names are compared after lowercasing only. The first declared field wins
/// when several share a lowercased name.
pub(crate) fn resolve_columns(fields: &[&str], columns: &[String]) -> crate::Result<Vec<usize>> {
    let mut bound = vec![false; fields.len()];

    columns
        .iter()
        .map(|column| {
            let wanted = column.to_lowercase();
            let index = fields
                .iter()
                .position(|field| field.to_lowercase() == wanted)
                .ok_or_else(|| {
                    tracing::debug!(column = %column, "No field matches column");
                    Error::UnmatchedColumn(column.clone())
                })?;

            if std::mem::replace(&mut bound[index], true) {
                tracing::debug!(column = %column, field = fields[index], "Field already bound");
                return Err(Error::DuplicateColumn(column.clone()));
            }
            Ok(index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_resolve_columns_in_field_order() {
        let order = resolve_columns(&["age", "name"], &columns(&["age", "name"])).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_resolve_columns_follows_column_order() {
        let order = resolve_columns(&["age", "name"], &columns(&["name", "age"])).unwrap();
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_resolve_columns_ignores_case() {
        let order = resolve_columns(&["age", "name"], &columns(&["NAME", "Age"])).unwrap();
        assert_eq!(order, vec![1, 0]);

        let order = resolve_columns(&["Age", "Name"], &columns(&["age", "name"])).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_resolve_columns_allows_extra_fields() {
        let order = resolve_columns(&["age", "name", "extra"], &columns(&["age", "name"])).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_resolve_columns_unmatched() {
        let err = resolve_columns(&["age"], &columns(&["age", "name"])).unwrap_err();
        assert!(matches!(err, Error::UnmatchedColumn(ref c) if c == "name"));
    }

    #[test]
    fn test_resolve_columns_no_normalization() {
        let err = resolve_columns(&["user_id"], &columns(&["userid"])).unwrap_err();
        assert!(matches!(err, Error::UnmatchedColumn(ref c) if c == "userid"));

        let err = resolve_columns(&["user"], &columns(&["user_id"])).unwrap_err();
        assert!(matches!(err, Error::UnmatchedColumn(ref c) if c == "user_id"));
    }

    #[test]
    fn test_resolve_columns_first_declared_field_wins() {
        let order = resolve_columns(&["Age", "age"], &columns(&["AGE"])).unwrap();
        assert_eq!(order, vec![0]);
    }

    #[test]
    fn test_resolve_columns_duplicate() {
        let err = resolve_columns(&["age", "name"], &columns(&["age", "AGE"])).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn(ref c) if c == "AGE"));
    }

    #[test]
    fn test_resolve_columns_empty_result() {
        let order = resolve_columns(&["age"], &[]).unwrap();
        assert!(order.is_empty());
    }

    /// Declares a field but hands back no target for it.
    struct MissingTarget {
        #[allow(dead_code)]
        age: i64,
    }

    impl<C: ?Sized> ScanStruct<C> for MissingTarget {
        const FIELDS: &'static [&'static str] = &["age"];
        const NULLABLE: &'static [bool] = &[false];

        fn targets(&mut self) -> Vec<&mut dyn Target<C>> {
            Vec::new()
        }
    }

    /// Lists fewer nullability flags than fields.
    struct MissingNullable {
        age: i64,
    }

    impl<C: ?Sized> ScanStruct<C> for MissingNullable
    where
        i64: Target<C>,
    {
        const FIELDS: &'static [&'static str] = &["age"];
        const NULLABLE: &'static [bool] = &[];

        fn targets(&mut self) -> Vec<&mut dyn Target<C>> {
            vec![&mut self.age as &mut dyn Target<C>]
        }
    }

    async fn age_row() -> sqlx::sqlite::SqliteRow {
        use sqlx::Connection;

        let mut conn = sqlx::SqliteConnection::connect("sqlite::memory:").await.unwrap();
        sqlx::query("SELECT 13 AS age")
            .fetch_one(&mut conn)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[should_panic(expected = "ScanStruct::targets returned 0 targets for 1 declared fields")]
    async fn test_scan_struct_panics_on_missing_target() {
        let row = age_row().await;
        let _ = scan_struct(&mut MissingTarget { age: 0 }, &row);
    }

    #[tokio::test]
    #[should_panic(expected = "ScanStruct::NULLABLE lists 0 flags for 1 declared fields")]
    async fn test_scan_struct_panics_on_missing_nullable_flag() {
        let row = age_row().await;
        let _ = scan_struct(&mut MissingNullable { age: 0 }, &row);
    }
}
