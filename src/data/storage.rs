use {
    crate::models::PricePoint,
    anyhow::Result,
    async_trait::async_trait,
    sqlx::{
        Pool, QueryBuilder, Row, Sqlite,
        sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    },
    std::{str::FromStr, time::Duration},
};

#[async_trait]
pub trait PriceStorage: Send + Sync {
    async fn initialize(&self) -> Result<()>;
    async fn last_close_time(&self, symbol: &str) -> Result<Option<i64>>;
    async fn insert_points(&self, symbol: &str, points: &[PricePoint]) -> Result<u64>;
    async fn load_points(&self, symbol: &str, start_time: Option<i64>) -> Result<Vec<PricePoint>>;
}

pub struct SqliteStorage {
    pool: Pool<Sqlite>,
}

impl SqliteStorage {
    pub async fn new(db_path: &str) -> Result<Self> {
        let connection_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(60))
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(connection_options)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PriceStorage for SqliteStorage {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS monthly_closes (
                symbol TEXT NOT NULL,
                open_time INTEGER NOT NULL,
                close REAL NOT NULL,
                PRIMARY KEY (symbol, open_time)
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn last_close_time(&self, symbol: &str) -> Result<Option<i64>> {
        let result = sqlx::query(
            r#"
            SELECT MAX(open_time) as last_time
            FROM monthly_closes
            WHERE symbol = ?
            "#,
        )
        .bind(symbol)
        .fetch_one(&self.pool)
        .await?;

        let last_time: Option<i64> = result.try_get("last_time")?;
        Ok(last_time)
    }

    /// Batches rows to stay well within SQLite's parameter limit.
    async fn insert_points(&self, symbol: &str, points: &[PricePoint]) -> Result<u64> {
        if points.is_empty() {
            return Ok(0);
        }

        for chunk in points.chunks(3000) {
            let mut query_builder =
                QueryBuilder::new("INSERT OR REPLACE INTO monthly_closes (symbol, open_time, close) ");

            query_builder.push_values(chunk, |mut b, p| {
                b.push_bind(symbol)
                    .push_bind(p.timestamp_ms)
                    .push_bind(p.close);
            });

            query_builder.build().execute(&self.pool).await?;
        }

        Ok(points.len() as u64)
    }

    async fn load_points(&self, symbol: &str, start_time: Option<i64>) -> Result<Vec<PricePoint>> {
        let query_str = if start_time.is_some() {
            r#"
            SELECT open_time, close
            FROM monthly_closes
            WHERE symbol = ? AND open_time >= ?
            ORDER BY open_time ASC
            "#
        } else {
            r#"
            SELECT open_time, close
            FROM monthly_closes
            WHERE symbol = ?
            ORDER BY open_time ASC
            "#
        };

        let mut query = sqlx::query(query_str).bind(symbol);
        if let Some(ts) = start_time {
            query = query.bind(ts);
        }

        let rows = query.fetch_all(&self.pool).await?;

        let points = rows
            .iter()
            .map(|row| PricePoint {
                timestamp_ms: row.get("open_time"),
                close: row.get("close"),
            })
            .collect();

        Ok(points)
    }
}
