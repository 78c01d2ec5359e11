//! Tests for the record administration service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockRecordStore;
use crate::domain::{
    Assignment, AssignmentFilter, ErrorCode, Module, NewAssignment, NewUser, User, UserFilter,
};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn clock(now: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixtureClock { utc_now: now })
}

fn user_service(
    store: MockRecordStore<User>,
    now: DateTime<Utc>,
) -> RecordService<User, MockRecordStore<User>> {
    RecordService::new(Arc::new(store), clock(now))
}

fn ann() -> NewUser {
    NewUser::try_new("0xA", "student", "Ann", "a@x.io").expect("valid user")
}

#[rstest]
#[tokio::test]
async fn create_inserts_stamped_record_when_key_is_free(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<User>::new();
    store
        .expect_find_one()
        .withf(|filter| *filter == FieldFilter::eq("address", "0xA"))
        .times(1)
        .return_once(|_| Ok(None));
    store
        .expect_insert_one()
        .withf(move |user| user.address() == "0xA" && user.created_at() == now)
        .times(1)
        .return_once(|_| Ok(()));

    let ack = user_service(store, now)
        .create(ann())
        .await
        .expect("create succeeds");

    assert_eq!(ack.message, "User created successfully");
}

#[rstest]
#[tokio::test]
async fn create_rejects_existing_key_without_writing(now: DateTime<Utc>) {
    let existing = User::from_draft(ann(), now);
    let mut store = MockRecordStore::<User>::new();
    store
        .expect_find_one()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    store.expect_insert_one().never();

    let error = user_service(store, now)
        .create(ann())
        .await
        .expect_err("duplicate rejected");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "User already exists");
}

#[rstest]
#[tokio::test]
async fn create_maps_racing_duplicate_to_conflict(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<User>::new();
    store.expect_find_one().times(1).return_once(|_| Ok(None));
    store
        .expect_insert_one()
        .times(1)
        .return_once(|_| Err(RecordStoreError::duplicate_key("E11000 address_1")));

    let error = user_service(store, now)
        .create(ann())
        .await
        .expect_err("race rejected");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "User already exists");
}

#[rstest]
#[case(RecordStoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RecordStoreError::query("bad filter"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_store_failures(
    now: DateTime<Utc>,
    #[case] failure: RecordStoreError,
    #[case] expected: ErrorCode,
) {
    let mut store = MockRecordStore::<User>::new();
    store
        .expect_find_one()
        .times(1)
        .return_once(move |_| Err(failure));
    store.expect_insert_one().never();

    let error = user_service(store, now)
        .create(ann())
        .await
        .expect_err("store failure surfaces");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn assignment_create_reports_metadata_saved(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<Assignment>::new();
    store
        .expect_find_one()
        .withf(|filter| *filter == FieldFilter::eq("assignmentId", 1_i64))
        .times(1)
        .return_once(|_| Ok(None));
    store.expect_insert_one().times(1).return_once(|_| Ok(()));
    let service: RecordService<Assignment, _> = RecordService::new(Arc::new(store), clock(now));

    let draft = NewAssignment::new(1, 10, "HW1");
    let ack = service.create(draft).await.expect("create succeeds");

    assert_eq!(ack.message, "Assignment metadata saved");
}

#[rstest]
#[tokio::test]
async fn list_passes_role_filter(now: DateTime<Utc>) {
    let stored = User::from_draft(ann(), now);
    let mut store = MockRecordStore::<User>::new();
    store
        .expect_find()
        .withf(|filter| *filter == Some(FieldFilter::eq("role", "student")))
        .times(1)
        .return_once(move |_| Ok(vec![stored]));

    let users = user_service(store, now)
        .list(UserFilter {
            role: Some("student".to_owned()),
        })
        .await
        .expect("list succeeds");

    assert_eq!(users.len(), 1);
    assert_eq!(users.first().map(User::name), Some("Ann"));
}

#[rstest]
#[tokio::test]
async fn list_without_role_is_unfiltered(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<User>::new();
    store
        .expect_find()
        .withf(Option::is_none)
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let users = user_service(store, now)
        .list(UserFilter::default())
        .await
        .expect("list succeeds");

    assert!(users.is_empty());
}

#[rstest]
#[tokio::test]
async fn assignment_list_filters_by_module(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<Assignment>::new();
    store
        .expect_find()
        .withf(|filter| *filter == Some(FieldFilter::eq("moduleId", 10_i64)))
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let service: RecordService<Assignment, _> = RecordService::new(Arc::new(store), clock(now));

    let assignments = service
        .list(AssignmentFilter { module_id: 10 })
        .await
        .expect("list succeeds");

    assert!(assignments.is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_reports_missing_record(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<Module>::new();
    store
        .expect_delete_one()
        .withf(|filter| *filter == FieldFilter::eq("moduleId", 99_i64))
        .times(1)
        .return_once(|_| Ok(0));
    let service: RecordService<Module, _> = RecordService::new(Arc::new(store), clock(now));

    let error = service.delete(99).await.expect_err("missing module");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Module not found");
}

#[rstest]
#[tokio::test]
async fn delete_acknowledges_removal(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<User>::new();
    store.expect_delete_one().times(1).return_once(|_| Ok(1));

    let ack = user_service(store, now)
        .delete("0xA".to_owned())
        .await
        .expect("delete succeeds");

    assert_eq!(ack.message, "User removed successfully");
}

#[rstest]
#[tokio::test]
async fn prepare_creates_unique_index(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<Module>::new();
    store.expect_ensure_unique_key().times(1).return_once(|| Ok(()));
    let service: RecordService<Module, _> = RecordService::new(Arc::new(store), clock(now));

    service.prepare().await.expect("index ensured");
}

#[rstest]
#[tokio::test]
async fn prepare_surfaces_unreachable_store(now: DateTime<Utc>) {
    let mut store = MockRecordStore::<Module>::new();
    store
        .expect_ensure_unique_key()
        .times(1)
        .return_once(|| Err(RecordStoreError::connection("no servers available")));
    let service: RecordService<Module, _> = RecordService::new(Arc::new(store), clock(now));

    let error = service.prepare().await.expect_err("unreachable store");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
