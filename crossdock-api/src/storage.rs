//! A Postgres-backed storage for the five planning datasets.
//!
//! Imports truncate a table and batch-insert the fresh rows; optimization reads each table as
//! a flat sequence at request start.

use chrono::NaiveDate;
use crossdock_core::prelude::{Distance, InterCityRate, IntraCityRate, Shipment, Terminal};
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Rows are inserted in chunks to stay far below the Postgres bind parameter limit.
const INSERT_CHUNK_SIZE: usize = 1000;

pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn truncate_shipments(&self) -> sqlx::Result<()> {
        sqlx::query("TRUNCATE shipments CASCADE").execute(&self.pool).await.map(|_| ())
    }

    pub async fn truncate_terminals(&self) -> sqlx::Result<()> {
        sqlx::query("TRUNCATE terminals CASCADE").execute(&self.pool).await.map(|_| ())
    }

    pub async fn truncate_distances(&self) -> sqlx::Result<()> {
        sqlx::query("TRUNCATE distances CASCADE").execute(&self.pool).await.map(|_| ())
    }

    pub async fn truncate_inter_city_rates(&self) -> sqlx::Result<()> {
        sqlx::query("TRUNCATE inter_city_rates CASCADE").execute(&self.pool).await.map(|_| ())
    }

    pub async fn truncate_intra_city_rates(&self) -> sqlx::Result<()> {
        sqlx::query("TRUNCATE intra_city_rates CASCADE").execute(&self.pool).await.map(|_| ())
    }

    pub async fn batch_insert_shipments(&self, shipments: &[Shipment]) -> sqlx::Result<()> {
        for chunk in shipments.chunks(INSERT_CHUNK_SIZE) {
            let mut query = QueryBuilder::<Postgres>::new(
                "INSERT INTO shipments (id, weight_kg, volume_m3, destination_city, date) ",
            );
            query.push_values(chunk, |mut row, shipment| {
                row.push_bind(&shipment.id)
                    .push_bind(shipment.weight_kg)
                    .push_bind(shipment.volume_m3)
                    .push_bind(&shipment.destination_city)
                    .push_bind(shipment.date);
            });
            query.push(" ON CONFLICT (id) DO NOTHING");
            query.build().execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn batch_insert_terminals(&self, terminals: &[Terminal]) -> sqlx::Result<()> {
        for chunk in terminals.chunks(INSERT_CHUNK_SIZE) {
            let mut query =
                QueryBuilder::<Postgres>::new("INSERT INTO terminals (city, direction, distance_from_moscow_km) ");
            query.push_values(chunk, |mut row, terminal| {
                row.push_bind(&terminal.city)
                    .push_bind(&terminal.direction)
                    .push_bind(terminal.distance_from_moscow_km);
            });
            query.push(" ON CONFLICT (city) DO NOTHING");
            query.build().execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn batch_insert_distances(&self, distances: &[Distance]) -> sqlx::Result<()> {
        for chunk in distances.chunks(INSERT_CHUNK_SIZE) {
            let mut query = QueryBuilder::<Postgres>::new("INSERT INTO distances (from_city, to_city, km) ");
            query.push_values(chunk, |mut row, distance| {
                row.push_bind(&distance.from_city).push_bind(&distance.to_city).push_bind(distance.km);
            });
            query.push(" ON CONFLICT (from_city, to_city) DO NOTHING");
            query.build().execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn batch_insert_inter_city_rates(&self, rates: &[InterCityRate]) -> sqlx::Result<()> {
        for chunk in rates.chunks(INSERT_CHUNK_SIZE) {
            let mut query =
                QueryBuilder::<Postgres>::new("INSERT INTO inter_city_rates (volume_m3, weight_tons, rate_per_km) ");
            query.push_values(chunk, |mut row, rate| {
                row.push_bind(rate.volume_m3).push_bind(rate.weight_tons).push_bind(rate.rate_per_km);
            });
            query.push(" ON CONFLICT (volume_m3, weight_tons) DO NOTHING");
            query.build().execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn batch_insert_intra_city_rates(&self, rates: &[IntraCityRate]) -> sqlx::Result<()> {
        for chunk in rates.chunks(INSERT_CHUNK_SIZE) {
            let mut query =
                QueryBuilder::<Postgres>::new("INSERT INTO intra_city_rates (volume_m3, weight_tons, rate_fixed) ");
            query.push_values(chunk, |mut row, rate| {
                row.push_bind(rate.volume_m3).push_bind(rate.weight_tons).push_bind(rate.rate_fixed);
            });
            query.push(" ON CONFLICT (volume_m3, weight_tons) DO NOTHING");
            query.build().execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn fetch_shipments(&self) -> sqlx::Result<Vec<Shipment>> {
        let rows: Vec<(String, f64, f64, String, NaiveDate)> =
            sqlx::query_as("SELECT id, weight_kg, volume_m3, destination_city, date FROM shipments")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, weight_kg, volume_m3, destination_city, date)| Shipment {
                id,
                weight_kg,
                volume_m3,
                destination_city,
                date,
            })
            .collect())
    }

    pub async fn fetch_terminals(&self) -> sqlx::Result<Vec<Terminal>> {
        let rows: Vec<(String, String, i32)> =
            sqlx::query_as("SELECT city, direction, distance_from_moscow_km FROM terminals")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(city, direction, distance_from_moscow_km)| Terminal { city, direction, distance_from_moscow_km })
            .collect())
    }

    pub async fn fetch_distances(&self) -> sqlx::Result<Vec<Distance>> {
        let rows: Vec<(String, String, i32)> =
            sqlx::query_as("SELECT from_city, to_city, km FROM distances").fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|(from_city, to_city, km)| Distance { from_city, to_city, km }).collect())
    }

    pub async fn fetch_inter_city_rates(&self) -> sqlx::Result<Vec<InterCityRate>> {
        let rows: Vec<(f64, f64, f64)> =
            sqlx::query_as("SELECT volume_m3, weight_tons, rate_per_km FROM inter_city_rates")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(volume_m3, weight_tons, rate_per_km)| InterCityRate { volume_m3, weight_tons, rate_per_km }).collect())
    }

    pub async fn fetch_intra_city_rates(&self) -> sqlx::Result<Vec<IntraCityRate>> {
        let rows: Vec<(f64, f64, f64)> =
            sqlx::query_as("SELECT volume_m3, weight_tons, rate_fixed FROM intra_city_rates")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(volume_m3, weight_tons, rate_fixed)| IntraCityRate { volume_m3, weight_tons, rate_fixed }).collect())
    }
}
