//! SQLite-backed stores for application history and user preferences.
//!
//! Preferences are keyed by an opaque `user_id`; absence is a normal case and
//! malformed stored JSON degrades to empty lists rather than failing a
//! scoring request.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::models::preferences::PreferenceSet;

/// One row of a user's application history.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ApplicationRow {
    pub id: i64,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub match_score: i64,
    pub url: Option<String>,
    pub applied_at: DateTime<Utc>,
}

pub async fn insert_application(
    pool: &SqlitePool,
    job_title: &str,
    company: &str,
    match_score: u32,
    url: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO applications (job_title, company, status, match_score, url, applied_at)
         VALUES (?, ?, 'Not Submitted', ?, ?, ?)",
    )
    .bind(job_title)
    .bind(company)
    .bind(match_score as i64)
    .bind(url)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list_applications(pool: &SqlitePool) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT id, job_title, company, status, match_score, url, applied_at
         FROM applications ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await
}

#[derive(Debug, FromRow)]
struct PreferenceRow {
    values_json: String,
    field: String,
    subfield: String,
    specialization: String,
    locations_json: String,
    remote_preference: bool,
    role_level: String,
}

impl From<PreferenceRow> for PreferenceSet {
    fn from(row: PreferenceRow) -> Self {
        PreferenceSet {
            // Malformed stored JSON degrades to "no declared values".
            values: serde_json::from_str(&row.values_json).unwrap_or_default(),
            field: row.field,
            subfield: row.subfield,
            specialization: row.specialization,
            locations: serde_json::from_str(&row.locations_json).unwrap_or_default(),
            remote_preference: row.remote_preference,
            role_level: row.role_level,
        }
    }
}

pub async fn upsert_preferences(
    pool: &SqlitePool,
    user_id: &str,
    prefs: &PreferenceSet,
) -> Result<(), sqlx::Error> {
    let values_json = serde_json::to_string(&prefs.values).unwrap_or_else(|_| "[]".to_string());
    let locations_json =
        serde_json::to_string(&prefs.locations).unwrap_or_else(|_| "[]".to_string());

    sqlx::query(
        "INSERT INTO user_preferences
           (user_id, values_json, field, subfield, specialization,
            locations_json, remote_preference, role_level)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(user_id) DO UPDATE SET
           values_json = excluded.values_json,
           field = excluded.field,
           subfield = excluded.subfield,
           specialization = excluded.specialization,
           locations_json = excluded.locations_json,
           remote_preference = excluded.remote_preference,
           role_level = excluded.role_level",
    )
    .bind(user_id)
    .bind(values_json)
    .bind(&prefs.field)
    .bind(&prefs.subfield)
    .bind(&prefs.specialization)
    .bind(locations_json)
    .bind(prefs.remote_preference)
    .bind(&prefs.role_level)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_preferences(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<PreferenceSet>, sqlx::Error> {
    let row = sqlx::query_as::<_, PreferenceRow>(
        "SELECT values_json, field, subfield, specialization,
                locations_json, remote_preference, role_level
         FROM user_preferences WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(PreferenceSet::from))
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    // One connection: each :memory: connection is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::run_migrations(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prefs() -> PreferenceSet {
        PreferenceSet {
            values: vec!["Career Growth".to_string(), "Company Culture".to_string()],
            field: "Software Engineering".to_string(),
            subfield: "Backend".to_string(),
            specialization: "Distributed Systems".to_string(),
            locations: vec!["Berlin".to_string()],
            remote_preference: true,
            role_level: "Senior".to_string(),
        }
    }

    #[tokio::test]
    async fn test_preferences_round_trip() {
        let pool = test_pool().await;
        let prefs = sample_prefs();

        upsert_preferences(&pool, "user-1", &prefs).await.unwrap();
        let loaded = get_preferences(&pool, "user-1").await.unwrap().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[tokio::test]
    async fn test_absent_user_returns_none() {
        let pool = test_pool().await;
        assert!(get_preferences(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_overwrites_existing_row() {
        let pool = test_pool().await;
        upsert_preferences(&pool, "user-1", &sample_prefs())
            .await
            .unwrap();

        let updated = PreferenceSet {
            field: "Data Science".to_string(),
            ..Default::default()
        };
        upsert_preferences(&pool, "user-1", &updated).await.unwrap();

        let loaded = get_preferences(&pool, "user-1").await.unwrap().unwrap();
        assert_eq!(loaded.field, "Data Science");
        assert!(loaded.values.is_empty());
    }

    #[tokio::test]
    async fn test_applications_insert_and_list_newest_first() {
        let pool = test_pool().await;
        insert_application(&pool, "Engineer", "Acme", 75, Some("https://a.example"))
            .await
            .unwrap();
        insert_application(&pool, "Senior Engineer", "Globex", 90, None)
            .await
            .unwrap();

        let rows = list_applications(&pool).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].job_title, "Senior Engineer");
        assert_eq!(rows[0].status, "Not Submitted");
        assert_eq!(rows[1].match_score, 75);
        assert_eq!(rows[1].url.as_deref(), Some("https://a.example"));
    }

    #[tokio::test]
    async fn test_malformed_stored_json_degrades_to_empty() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO user_preferences
               (user_id, values_json, field, subfield, specialization,
                locations_json, remote_preference, role_level)
             VALUES ('user-1', 'not json', '', '', '', '[broken', 0, '')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let loaded = get_preferences(&pool, "user-1").await.unwrap().unwrap();
        assert!(loaded.values.is_empty());
        assert!(loaded.locations.is_empty());
    }
}
