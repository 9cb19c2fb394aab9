use anyhow::Result;
use sqlx::Row;

use crate::domain::city::City;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct CityService {
    db: Db,
}

impl CityService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Cities open to end users, alphabetical. Unsupported rows never leave the database.
    pub async fn list_supported(&self) -> Result<Vec<City>> {
        let rows = sqlx::query(
            "SELECT id, name, country_code, supported, created_at \
             FROM cities \
             WHERE supported = true \
             ORDER BY name ASC, id ASC",
        )
        .fetch_all(self.db.pool())
        .await?;

        let cities = rows
            .into_iter()
            .map(|row| City {
                id: row.get("id"),
                name: row.get("name"),
                country_code: row.get("country_code"),
                supported: row.get("supported"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(cities)
    }
}
