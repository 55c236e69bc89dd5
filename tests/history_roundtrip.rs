//! History write/read round trips against the in-memory blob store.

use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use image_workbench::{HistoryLogger, HistoryReader, MemoryBlobStore};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hour, 15, 0)
        .unwrap()
}

#[tokio::test]
async fn records_round_trip_through_the_store() -> Result<()> {
    let store = Arc::new(MemoryBlobStore::new());
    let logger = HistoryLogger::new(store.clone());
    let reader = HistoryReader::new(store);

    logger.record("holiday", at(3, 9)).await?;
    logger.record("invoice", at(3, 17)).await?;
    logger.record("scan", at(4, 8)).await?;

    let mut records = reader.list_history().await?;
    records.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].file_name, "holiday");
    assert_eq!(records[0].uploaded_at, at(3, 9));
    Ok(())
}

#[tokio::test]
async fn same_file_name_overwrites_its_record() -> Result<()> {
    let store = Arc::new(MemoryBlobStore::new());
    let logger = HistoryLogger::new(store.clone());
    let reader = HistoryReader::new(store);

    logger.record("holiday", at(3, 9)).await?;
    logger.record("holiday", at(5, 12)).await?;

    let records = reader.list_history().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].uploaded_at, at(5, 12));
    Ok(())
}

#[tokio::test]
async fn daily_counts_feed_the_chart() -> Result<()> {
    let store = Arc::new(MemoryBlobStore::new());
    let logger = HistoryLogger::new(store.clone());
    let reader = HistoryReader::new(store);

    logger.record("a", at(3, 9)).await?;
    logger.record("b", at(3, 11)).await?;
    logger.record("c", at(5, 16)).await?;

    let records = reader.list_history().await?;
    let counts = HistoryReader::daily_counts(&records);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].date, NaiveDate::from_ymd_opt(2026, 8, 3).unwrap());
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
    assert_eq!(counts[1].count, 1);
    Ok(())
}

#[tokio::test]
async fn empty_history_is_not_an_error() -> Result<()> {
    let reader = HistoryReader::new(Arc::new(MemoryBlobStore::new()));
    let records = reader.list_history().await?;
    assert!(records.is_empty());
    assert!(HistoryReader::daily_counts(&records).is_empty());
    Ok(())
}
