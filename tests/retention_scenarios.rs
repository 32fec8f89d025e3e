//! Lifecycle scenarios driven through the file-backed store.

use chrono::Duration;
use snapwarden::app::SimulationDriver;
use snapwarden::domain::{Cadence, ClusterId};
use snapwarden::testkit::{config::schedule, domain::day};
use tempfile::tempdir;

fn driver(dir: &tempfile::TempDir) -> SimulationDriver {
    let cluster = ClusterId::new("db");
    SimulationDriver::seed(dir.path().join("snapstore.json"), vec![cluster]).expect("seed store")
}

#[tokio::test]
async fn eight_sundays_keep_exactly_seven_weekly_snapshots() {
    let dir = tempdir().unwrap();
    let driver = driver(&dir);

    // 2024-01-07 is a Sunday; none of the eight Sundays is a 1st, so
    // only the weekly tier ever fires.
    let first_sunday = day(2024, 1, 7);
    for week in 0..8 {
        driver
            .step(schedule(2, 2, 7), first_sunday + Duration::weeks(week))
            .await
            .unwrap();
    }

    let survivors = driver.store().all_snapshots().unwrap();
    assert_eq!(survivors.len(), 7);
    assert!(survivors.iter().all(|s| s.tags.contains(Cadence::Weekly)));
    // The first Sunday's snapshot is the one that was purged.
    assert!(survivors.iter().all(|s| s.created_at > first_sunday));
    assert!(survivors
        .iter()
        .any(|s| s.created_at == first_sunday + Duration::weeks(1)));
}

#[tokio::test]
async fn coincident_triggers_create_one_snapshot_with_both_tags() {
    let dir = tempdir().unwrap();
    let driver = driver(&dir);

    // 2024-09-01 is both the 1st of a month and a Sunday.
    driver.step(schedule(2, 2, 7), day(2024, 9, 1)).await.unwrap();

    let survivors = driver.store().all_snapshots().unwrap();
    assert_eq!(survivors.len(), 1);
    assert!(survivors[0].tags.contains(Cadence::Monthly));
    assert!(survivors[0].tags.contains(Cadence::Weekly));
    assert!(!survivors[0].tags.contains(Cadence::Yearly));
}

#[tokio::test]
async fn multi_tag_snapshot_survives_until_every_tier_releases_it() {
    let dir = tempdir().unwrap();
    let driver = driver(&dir);

    // 2024-01-01: yearly and monthly fire together.
    driver.step(schedule(2, 2, 7), day(2024, 1, 1)).await.unwrap();
    let survivors = driver.store().all_snapshots().unwrap();
    assert_eq!(survivors.len(), 1);
    assert!(survivors[0].tags.contains(Cadence::Yearly));
    assert!(survivors[0].tags.contains(Cadence::Monthly));

    // Disabling yearly purges its claim but the snapshot survives on
    // the monthly tag.
    driver.step(schedule(0, 2, 7), day(2024, 1, 2)).await.unwrap();
    let survivors = driver.store().all_snapshots().unwrap();
    assert_eq!(survivors.len(), 1);
    assert!(!survivors[0].tags.contains(Cadence::Yearly));
    assert!(survivors[0].tags.contains(Cadence::Monthly));

    // Disabling monthly as well removes the last claim.
    driver.step(schedule(0, 0, 7), day(2024, 1, 3)).await.unwrap();
    assert!(driver.store().all_snapshots().unwrap().is_empty());
}

#[tokio::test]
async fn zero_retention_purges_a_tier_without_waiting_for_its_trigger() {
    let dir = tempdir().unwrap();
    let driver = driver(&dir);

    driver.step(schedule(2, 2, 7), day(2024, 1, 7)).await.unwrap();
    driver.step(schedule(2, 2, 7), day(2024, 1, 14)).await.unwrap();
    assert_eq!(driver.store().all_snapshots().unwrap().len(), 2);

    // 2024-01-16 is a Tuesday: not a weekly trigger day, yet the
    // disabled tier is still fully purged.
    driver.step(schedule(2, 2, 0), day(2024, 1, 16)).await.unwrap();
    assert!(driver.store().all_snapshots().unwrap().is_empty());
}

#[tokio::test]
async fn lowering_retention_purges_down_to_the_new_count() {
    let dir = tempdir().unwrap();
    let driver = driver(&dir);

    let first_sunday = day(2024, 1, 7);
    for week in 0..8 {
        driver
            .step(schedule(2, 2, 7), first_sunday + Duration::weeks(week))
            .await
            .unwrap();
    }
    assert_eq!(driver.store().all_snapshots().unwrap().len(), 7);

    // Ninth Sunday with weekly retention dropped to 2: one slot is
    // reserved for today's snapshot, so only the newest survivor stays.
    driver
        .step(schedule(2, 2, 2), first_sunday + Duration::weeks(8))
        .await
        .unwrap();

    let survivors = driver.store().all_snapshots().unwrap();
    assert_eq!(survivors.len(), 2);
    assert!(survivors
        .iter()
        .any(|s| s.created_at == first_sunday + Duration::weeks(8)));
    assert!(survivors
        .iter()
        .any(|s| s.created_at == first_sunday + Duration::weeks(7)));
}
