use super::common::*;

use crate::risk::domain::ClientId;
use crate::risk::store::{ClientRecordStore, ClientStoreError, MalformedSourceError};

fn load(csv: &str) -> Result<ClientRecordStore, ClientStoreError> {
    ClientRecordStore::from_reader(csv.as_bytes(), ID_COLUMN)
}

fn malformed(csv: &str) -> MalformedSourceError {
    match load(csv) {
        Err(ClientStoreError::Malformed(err)) => err,
        other => panic!("expected malformed source, got {other:?}"),
    }
}

#[test]
fn schema_excludes_identifier_column() {
    let store = store();
    assert_eq!(store.id_column(), ID_COLUMN);
    assert_eq!(store.schema(), ["SCORE_HINT", "AMT_CREDIT", "AMT_ANNUITY"]);
    assert!(store
        .records()
        .all(|record| record.features.len() == store.schema().len()));
}

#[test]
fn get_returns_record_for_known_id() {
    let store = store();
    let record = store.get(ClientId(456202)).expect("client present");
    assert_eq!(record.id, ClientId(456202));
    assert_eq!(record.features, vec![0.73, 135000.0, 6750.0]);
    assert!(store.get(ClientId(999999)).is_none());
}

#[test]
fn empty_cells_load_as_missing_values() {
    let store = store();
    let credit = store
        .feature(ClientId(100066), "AMT_CREDIT")
        .expect("column and client exist");
    assert!(credit.is_nan());
    assert_eq!(store.feature(ClientId(100066), "AMT_ANNUITY"), Some(21865.5));
    assert_eq!(store.feature(ClientId(100066), "DAYS_BIRTH"), None);
}

#[test]
fn known_ids_and_records_are_sorted() {
    let store = store();
    let ids: Vec<i64> = store.known_ids().into_iter().map(|id| id.0).collect();
    assert_eq!(ids, vec![100001, 100028, 100066, 456202]);
    let listed: Vec<i64> = store.records().map(|record| record.id.0).collect();
    assert_eq!(listed, ids);
    assert_eq!(store.len(), 4);
    assert!(!store.is_empty());
}

#[test]
fn identifier_column_may_sit_anywhere() {
    let store = load("AMT_CREDIT,SK_ID_CURR,AMT_ANNUITY\n1000,7,50\n").expect("loads");
    assert_eq!(store.schema(), ["AMT_CREDIT", "AMT_ANNUITY"]);
    assert_eq!(
        store.get(ClientId(7)).map(|record| record.features.clone()),
        Some(vec![1000.0, 50.0])
    );
}

#[test]
fn rejects_missing_identifier_column() {
    let err = malformed("CLIENT,AMT_CREDIT\n1,2\n");
    assert_eq!(
        err,
        MalformedSourceError::MissingIdColumn {
            column: ID_COLUMN.to_string()
        }
    );
}

#[test]
fn rejects_duplicate_identifiers() {
    let err = malformed("SK_ID_CURR,AMT_CREDIT\n1,2\n1,3\n");
    assert_eq!(
        err,
        MalformedSourceError::DuplicateId {
            line: 3,
            id: ClientId(1)
        }
    );
}

#[test]
fn rejects_non_integer_identifiers() {
    let err = malformed("SK_ID_CURR,AMT_CREDIT\nabc,2\n");
    assert!(matches!(err, MalformedSourceError::InvalidId { value, .. } if value == "abc"));
}

#[test]
fn rejects_rows_with_wrong_field_count() {
    let err = malformed("SK_ID_CURR,AMT_CREDIT,AMT_ANNUITY\n1,2\n");
    assert_eq!(
        err,
        MalformedSourceError::FieldCount {
            line: 2,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn rejects_non_numeric_features() {
    let err = malformed("SK_ID_CURR,NAME_CONTRACT_TYPE\n1,Cash loans\n");
    assert!(matches!(
        err,
        MalformedSourceError::InvalidFeature { column, value, .. }
            if column == "NAME_CONTRACT_TYPE" && value == "Cash loans"
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ClientRecordStore::from_path("does/not/exist.csv", ID_COLUMN)
        .expect_err("file is absent");
    assert!(matches!(err, ClientStoreError::Io(_)));
}
