//! Example with nullable columns, a named scalar type and field attributes
//!
//! Run with: RUST_LOG=sqlx_scan_struct=trace cargo run --example nullable

use sqlx::{Connection, SqliteConnection};
use sqlx_scan_struct::{scan_struct, ScanStruct};

#[derive(Debug, Default, sqlx::Type)]
#[sqlx(transparent)]
struct Email(String);

#[derive(Debug, Default, ScanStruct)]
struct Account {
    id: i64,
    #[scan(rename = "e_mail")]
    email: Option<Email>,
    nickname: Option<String>,
    #[scan(skip)]
    notes: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

    sqlx::query("CREATE TABLE accounts (id INTEGER, e_mail TEXT, nickname TEXT)")
        .execute(&mut conn)
        .await?;
    sqlx::query(
        "INSERT INTO accounts (id, e_mail, nickname) VALUES
            (1, 'arne@example.com', NULL),
            (2, NULL, 'bee')",
    )
    .execute(&mut conn)
    .await?;

    let rows = sqlx::query("SELECT * FROM accounts ORDER BY id")
        .fetch_all(&mut conn)
        .await?;

    for row in &rows {
        let mut account = Account {
            notes: vec!["left as is".to_string()],
            ..Account::default()
        };
        scan_struct(&mut account, row)?;
        println!(
            "id={} email={:?} nickname={:?} notes={:?}",
            account.id, account.email, account.nickname, account.notes
        );
    }

    Ok(())
}
