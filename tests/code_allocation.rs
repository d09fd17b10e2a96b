//! Code allocation tests against the embedded database: per-table
//! sequencing, no reuse after deletes, startup backfill and padding.

use surrealdb::RecordId;

use inventory_server::db::DbService;
use inventory_server::db::models::{BranchInput, UnitInput};
use inventory_server::db::repository::{BranchRepository, UnitRepository};
use inventory_server::db::sequence::{CODED_RESOURCES, CodeSequences};

fn actor() -> RecordId {
    "user:tester".parse().unwrap()
}

fn branch(name: &str) -> BranchInput {
    BranchInput {
        branch_name: name.to_string(),
        branch_address: None,
        branch_status: None,
    }
}

async fn open_db() -> (tempfile::TempDir, DbService) {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(&tmp.path().join("inventory.db")).await.unwrap();
    (tmp, service)
}

#[tokio::test]
async fn sequences_are_independent_per_resource() {
    let (_tmp, service) = open_db().await;
    let sequences = CodeSequences::new(service.db.clone());

    let branches = BranchRepository::new(service.db.clone(), sequences.clone());
    let units = UnitRepository::new(service.db.clone(), sequences.clone());

    for (i, expected) in ["BR-00001", "BR-00002", "BR-00003"].iter().enumerate() {
        let created = branches
            .create(branch(&format!("Branch {i}")), actor())
            .await
            .unwrap();
        assert_eq!(created.branch_code, *expected);
    }

    // The unit counter is untouched by branch allocations
    let unit = units
        .create(
            UnitInput {
                name: "kg".to_string(),
                status: None,
            },
            actor(),
        )
        .await
        .unwrap();
    assert_eq!(unit.code, "UNI-00001");
}

#[tokio::test]
async fn deleting_the_newest_record_does_not_recycle_codes() {
    let (_tmp, service) = open_db().await;
    let sequences = CodeSequences::new(service.db.clone());
    let branches = BranchRepository::new(service.db.clone(), sequences);

    branches.create(branch("First"), actor()).await.unwrap();
    let second = branches.create(branch("Second"), actor()).await.unwrap();
    assert_eq!(second.branch_code, "BR-00002");

    let second_id = second.id.unwrap().to_string();
    branches.delete(&second_id).await.unwrap();

    // The counter does not rewind; BR-00002 is never reissued
    let third = branches.create(branch("Third"), actor()).await.unwrap();
    assert_eq!(third.branch_code, "BR-00003");
}

#[tokio::test]
async fn backfill_seeds_from_largest_matching_code() {
    let (_tmp, service) = open_db().await;

    // Pre-existing rows written outside the allocator: one well-formed
    // code and one legacy/foreign code that must not reset the sequence.
    service
        .db
        .query(
            "CREATE branch SET branch_code = 'BR-00007', branch_name = 'Imported', \
             branch_status = 1, created_at = 1, updated_at = 1",
        )
        .await
        .unwrap()
        .check()
        .unwrap();
    service
        .db
        .query(
            "CREATE branch SET branch_code = 'LEGACY-9', branch_name = 'Old system', \
             branch_status = 1, created_at = 2, updated_at = 2",
        )
        .await
        .unwrap()
        .check()
        .unwrap();

    let sequences = CodeSequences::new(service.db.clone());
    sequences.backfill(&CODED_RESOURCES).await.unwrap();

    let branches = BranchRepository::new(service.db.clone(), sequences);
    let created = branches.create(branch("Fresh"), actor()).await.unwrap();
    assert_eq!(created.branch_code, "BR-00008");
}

#[tokio::test]
async fn codes_widen_past_five_digits() {
    let (_tmp, service) = open_db().await;

    service
        .db
        .query("UPSERT sequence:branch SET value = 99999")
        .await
        .unwrap()
        .check()
        .unwrap();

    let sequences = CodeSequences::new(service.db.clone());
    let branches = BranchRepository::new(service.db.clone(), sequences);
    let created = branches.create(branch("Big"), actor()).await.unwrap();
    assert_eq!(created.branch_code, "BR-100000");
}
