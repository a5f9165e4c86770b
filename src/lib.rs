//! # sqlx-scan-struct
//!
//! A SQLx extension that scans a result row into the fields of an existing struct,
//! matching each column to a field by case-insensitive name.
//!
//! ## Features
//!
//! - **Name Matching**: `SELECT Age, NAME` fills fields `age` and `name`, whatever their order
//! - **Nullable Fields**: `Option<T>` fields receive `None` for SQL `NULL`; `NULL` into any
//!   other field is a decode error
//! - **Named Scalar Types**: `#[sqlx(transparent)]` newtypes bind like the type they wrap
//! - **Extra Fields**: fields without a column are left untouched
//! - **Any Driver**: works with `SqliteRow`, `MySqlRow`, `PgRow` and any other SQLx `Row`
//! - **No Reflection**: `#[derive(ScanStruct)]` generates the field table at compile time
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sqlx = { version = "0.8", features = ["sqlite", "runtime-tokio"] }
//! sqlx-scan-struct = "0.1"
//! ```
//!
//! ### Cargo Features
//!
//! - `derive` (default): `#[derive(ScanStruct)]`
//! - `sqlite`, `mysql`, `postgres`: enable the matching SQLx driver, for crates that
//!   take their SQLx drivers through this crate:
//!
//! ```toml
//! [dependencies]
//! sqlx-scan-struct = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! Rows of every enabled driver work the same way; the binder only relies on SQLx's `Row`.
//!
//! ## Examples
//!
//! ### Scanning a Row
//!
//! ```rust,no_run
//! use sqlx::SqlitePool;
//! use sqlx_scan_struct::{ScanExt, ScanStruct};
//!
//! #[derive(Debug, Default, ScanStruct)]
//! struct Person {
//!     age: i64,
//!     name: String,
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = SqlitePool::connect("sqlite::memory:").await?;
//! let row = sqlx::query("SELECT * FROM people").fetch_one(&pool).await?;
//!
//! let mut person = Person::default();
//! row.scan_into(&mut person)?;
//! println!("{} is {}", person.name, person.age);
//! # Ok(())
//! # }
//! ```
//!
//! ### Nullable Columns and Named Types
//!
//! ```rust,no_run
//! use sqlx_scan_struct::{scan_struct, ScanStruct};
//!
//! #[derive(Debug, Default, sqlx::Type)]
//! #[sqlx(transparent)]
//! struct Name(String);
//!
//! #[derive(Debug, Default, ScanStruct)]
//! struct Person {
//!     age: Option<i64>,
//!     name: Name,
//!     #[scan(rename = "e_mail")]
//!     email: Option<String>,
//!     #[scan(skip)]
//!     tags: Vec<String>,
//! }
//!
//! # async fn example(row: sqlx::sqlite::SqliteRow) -> Result<(), Box<dyn std::error::Error>> {
//! let mut person = Person::default();
//! scan_struct(&mut person, &row)?;
//! if person.age.is_none() {
//!     println!("{} did not tell", person.name.0);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nullability comes from the declared `Option<..>` type. Mark a field `#[scan(nullable)]`
//! when `Option` is hidden behind a type alias or a generic parameter.
//!
//! ## How It Works
//!
//! 1. **Columns**: Read the column names of the row
//! 2. **Resolve**: Match every column to a field of the struct, failing on unknown or repeated columns
//! 3. **Nulls**: Reject `NULL` in any column whose field is not nullable, before writing anything
//! 4. **Scan**: Hand the ordered field borrows to the row, which decodes each column in place
//!
//! ## Limitations
//!
//! - Every column of the row must have a field; select only the columns you need
//! - No nested structs, collections or custom decoding hooks beyond SQLx's own `Decode`
//! - Field types must decode without borrowing from the row (`String`, not `&str`)
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at your option.

pub mod binder;
pub mod cursor;
pub mod error;
pub mod ext;
pub mod record;

pub use binder::scan_struct;
pub use cursor::{Cursor, Target};
pub use error::{Error, Result};
pub use ext::ScanExt;
pub use record::ScanStruct;

#[cfg(feature = "derive")]
pub use sqlx_scan_struct_derive::ScanStruct;

/// Convenience re-exports for common use cases
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scan_struct;
    pub use crate::ScanExt;
    pub use crate::ScanStruct;
}
