//! Basic example demonstrating scanning rows into a struct
//!
//! Run with: cargo run --example basic
//!
//! Uses an in-memory SQLite database unless DATABASE_URL points at another SQLite file:
//! export DATABASE_URL="sqlite://people.db?mode=rwc"

use sqlx::{Connection, SqliteConnection};
use sqlx_scan_struct::{ScanExt, ScanStruct};

#[derive(Debug, Default, ScanStruct)]
struct Person {
    id: i64,
    name: String,
    email: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    println!("Connecting to database...");
    let mut conn = SqliteConnection::connect(&database_url).await?;

    println!("\nCreating people table...");
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL
        )",
    )
    .execute(&mut conn)
    .await?;

    sqlx::query("INSERT INTO people (name, email) VALUES ('Arne', 'arne@example.com'), ('Berit', 'berit@example.com')")
        .execute(&mut conn)
        .await?;

    // Column order and case need not match the struct
    println!("\nScanning rows...");
    let rows = sqlx::query("SELECT EMAIL, Name, id FROM people ORDER BY id")
        .fetch_all(&mut conn)
        .await?;

    for row in &rows {
        let mut person = Person::default();
        row.scan_into(&mut person)?;
        println!("  {:?}", person);
    }

    // A column without a field is reported instead of being dropped
    let row = sqlx::query("SELECT id, name, email, 1 AS active FROM people LIMIT 1")
        .fetch_one(&mut conn)
        .await?;
    let mut person = Person::default();
    match row.scan_into(&mut person) {
        Ok(()) => println!("\nUnexpected success: {:?}", person),
        Err(e) => println!("\nExpected failure: {}", e),
    }

    println!("\nDone!");
    Ok(())
}
