//! Sample data for development databases
//!
//! Wipes both tables and loads a small fixed data set. Destructive: every
//! existing client and appointment is lost.

use crate::db::{appointments, begin_write, clients, create_schema, drop_schema};
use crate::Result;
use chrono::{Duration, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

/// (name, phone)
const SAMPLE_CLIENTS: [(&str, &str); 4] = [
    ("Thais", "11998765432"),
    ("Zayan", "11991234567"),
    ("Ramon", "21987654321"),
    ("Lucas", "31976543210"),
];

/// (index into SAMPLE_CLIENTS, service, days ago)
const SAMPLE_APPOINTMENTS: [(usize, &str, i64); 4] = [
    (0, "Corte de cabelo", 3),
    (0, "Hidratação", 1),
    (1, "Corte de cabelo", 2),
    (2, "Manicure", 0),
];

/// Row counts written by [`reset_with_sample_data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub clients: usize,
    pub appointments: usize,
}

/// Drop and recreate the schema, then load the sample rows
///
/// Runs in one transaction; visit counters are recomputed from the
/// inserted appointments before commit.
pub async fn reset_with_sample_data(pool: &SqlitePool) -> Result<SeedSummary> {
    reset_with_sample_data_at(pool, Utc::now().naive_utc()).await
}

/// Same as [`reset_with_sample_data`] with a fixed reference time
pub async fn reset_with_sample_data_at(
    pool: &SqlitePool,
    now: NaiveDateTime,
) -> Result<SeedSummary> {
    let mut tx = begin_write(pool).await?;

    drop_schema(&mut tx).await?;
    create_schema(&mut tx).await?;

    let mut client_ids = Vec::with_capacity(SAMPLE_CLIENTS.len());
    for (name, phone) in SAMPLE_CLIENTS {
        let client = clients::insert_client(&mut *tx, name, Some(phone)).await?;
        client_ids.push(client.id);
    }

    for (client_index, service, days_ago) in SAMPLE_APPOINTMENTS {
        appointments::insert_appointment_at(
            &mut *tx,
            client_ids[client_index],
            service,
            now - Duration::days(days_ago),
        )
        .await?;
    }

    clients::recount_visits(&mut *tx).await?;
    tx.commit().await?;

    let summary = SeedSummary {
        clients: SAMPLE_CLIENTS.len(),
        appointments: SAMPLE_APPOINTMENTS.len(),
    };
    info!(
        "Loaded sample data: {} clients, {} appointments",
        summary.clients, summary.appointments
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;

    #[tokio::test]
    async fn test_seed_populates_counters() {
        let (_dir, pool) = test_pool().await;

        let summary = reset_with_sample_data(&pool).await.unwrap();
        assert_eq!(summary, SeedSummary { clients: 4, appointments: 4 });

        let all = clients::list_clients(&pool).await.unwrap();
        assert_eq!(all.len(), 4);

        let visits = |name: &str| {
            all.iter()
                .find(|c| c.name == name)
                .map(|c| c.total_visits)
                .unwrap()
        };
        assert_eq!(visits("Thais"), 2);
        assert_eq!(visits("Zayan"), 1);
        assert_eq!(visits("Ramon"), 1);
        assert_eq!(visits("Lucas"), 0);
    }

    #[tokio::test]
    async fn test_seed_wipes_existing_rows() {
        let (_dir, pool) = test_pool().await;

        let stale = clients::insert_client(&pool, "Stale", None).await.unwrap();
        appointments::insert_appointment(&pool, stale.id, "Escova")
            .await
            .unwrap();

        reset_with_sample_data(&pool).await.unwrap();

        assert!(clients::find_client_by_name(&pool, "Stale")
            .await
            .unwrap()
            .is_none());
        assert_eq!(appointments::list_appointments(&pool).await.unwrap().len(), 4);
    }
}
