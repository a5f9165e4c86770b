use crate::cursor::Target;

/// A struct whose fields can be bound to result columns by name.
///
/// Usually derived with `#[derive(ScanStruct)]`. A hand-written
/// implementation must return exactly one target per entry of
/// [`FIELDS`](ScanStruct::FIELDS), in the same order, and list one
/// [`NULLABLE`](ScanStruct::NULLABLE) flag per field.
///
/// The derive marks a field nullable when its declared type is `Option<..>`.
/// Use `#[scan(nullable)]` for a field whose type accepts `NULL` behind an
/// alias or a generic parameter.
///
/// # Examples
///
/// ```rust
/// use sqlx_scan_struct::{ScanStruct, Target};
///
/// struct Person {
///     age: Option<i64>,
///     name: String,
/// }
///
/// impl<C: ?Sized> ScanStruct<C> for Person
/// where
///     Option<i64>: Target<C>,
///     String: Target<C>,
/// {
///     const FIELDS: &'static [&'static str] = &["age", "name"];
///     const NULLABLE: &'static [bool] = &[true, false];
///
///     fn targets(&mut self) -> Vec<&mut dyn Target<C>> {
///         let Person { age, name } = self;
///         vec![age as &mut dyn Target<C>, name as &mut dyn Target<C>]
///     }
/// }
/// ```
///
/// The derive only accepts structs with named fields:
///
/// ```compile_fail
/// #[derive(sqlx_scan_struct::ScanStruct)]
/// enum Status {
///     Active,
///     Retired,
/// }
/// ```
///
/// ```compile_fail
/// #[derive(sqlx_scan_struct::ScanStruct)]
/// struct Pair(i64, String);
/// ```
///
/// ```compile_fail
/// #[derive(sqlx_scan_struct::ScanStruct)]
/// struct Person {
///     #[scan(flatten)]
///     age: i64,
/// }
/// ```
pub trait ScanStruct<C: ?Sized> {
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Whether each field of [`FIELDS`](ScanStruct::FIELDS) accepts SQL `NULL`.
    const NULLABLE: &'static [bool];

    /// One mutable borrow per field, in [`FIELDS`](ScanStruct::FIELDS) order.
    fn targets(&mut self) -> Vec<&mut dyn Target<C>>;
}
