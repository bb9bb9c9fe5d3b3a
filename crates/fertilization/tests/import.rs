use pupuk_fertilization::{Command, ImportInput, ImportSummary};
use pupuk_shared::Category;
use temp_dir::TempDir;

mod helpers;

use helpers::record;

async fn count(pool: &sqlx::SqlitePool, table: &str) -> anyhow::Result<i64> {
    let (total,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;

    Ok(total)
}

#[tokio::test]
async fn test_import_from_dashboard_json() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    let input: ImportInput = serde_json::from_str(
        r#"{
            "rencana": [
                { "kebun": "Kebun A", "kategori": "oil_palm", "aplikasi": 1, "kg": 100, "tanggal": "2025-03-10" },
                { "kebun": "Kebun B", "kategori": "rubber", "aplikasi": 2 }
            ],
            "realisasi": [
                { "estate": "Kebun A", "category": "oil_palm", "round": 1, "quantity_kg": 50.5, "applied_on": " 2025-03-09 " }
            ]
        }"#,
    )?;

    let summary = Command(pool.clone()).import(input).await?;

    assert_eq!(
        summary,
        ImportSummary {
            planned: 2,
            actual: 1
        }
    );
    assert_eq!(count(&pool, "fertilization_plan").await?, 2);
    assert_eq!(count(&pool, "fertilization_actual").await?, 1);

    let (applied_on,): (String,) =
        sqlx::query_as("SELECT applied_on FROM fertilization_actual")
            .fetch_one(&pool)
            .await?;
    assert_eq!(applied_on, "2025-03-09");

    Ok(())
}

#[tokio::test]
async fn test_import_rejects_negative_quantity() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    let result = Command(pool.clone())
        .import(ImportInput {
            planned: vec![
                record("Kebun A", Category::OilPalm, Some(1), Some(10.0), None),
                record("Kebun A", Category::OilPalm, Some(1), Some(-1.0), None),
            ],
            actual: vec![],
        })
        .await;

    assert!(matches!(result, Err(pupuk_shared::Error::Validate(_))));
    assert_eq!(count(&pool, "fertilization_plan").await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_import_rejects_bad_date_and_writes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    let result = Command(pool.clone())
        .import(ImportInput {
            planned: vec![record("Kebun A", Category::OilPalm, Some(1), Some(10.0), None)],
            actual: vec![record(
                "Kebun A",
                Category::OilPalm,
                Some(1),
                Some(5.0),
                Some("10/03/2025"),
            )],
        })
        .await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "invalid date '10/03/2025' for estate Kebun A, expected YYYY-MM-DD"
    );
    assert_eq!(count(&pool, "fertilization_plan").await?, 0);
    assert_eq!(count(&pool, "fertilization_actual").await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_import_rejects_blank_estate() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    let result = Command(pool.clone())
        .import(ImportInput {
            planned: vec![record("   ", Category::Rubber, Some(1), Some(1.0), None)],
            actual: vec![],
        })
        .await;

    assert_eq!(result.unwrap_err().to_string(), "estate must not be empty");

    Ok(())
}
