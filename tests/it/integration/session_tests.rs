//! Ingest session workflows: upload, replace, race, and failure handling.

use chartboard::data::{ChartPayload, IngestSession, SubmitOutcome};
use chartboard::types::ChartKind;

#[test]
fn test_upload_then_chart() {
    let session = IngestSession::new();
    session
        .submit("sales.csv".to_string(), b"region,sales\nnorth,100".to_vec())
        .join()
        .unwrap()
        .unwrap();

    let payload = session.payload(ChartKind::Bar);
    assert!(payload.is_renderable());

    let ChartPayload::Series(series) = payload else {
        panic!("expected series payload");
    };
    assert_eq!(series.labels, vec!["north"]);
}

#[test]
fn test_reupload_replaces_dataset_wholesale() {
    let session = IngestSession::new();
    session
        .submit("first.csv".to_string(), b"a\n1".to_vec())
        .join()
        .unwrap()
        .unwrap();
    session
        .submit("second.csv".to_string(), b"b,c\nx,2\ny,3".to_vec())
        .join()
        .unwrap()
        .unwrap();

    let ds = session.dataset().unwrap();
    assert_eq!(ds.name, "second");
    assert_eq!(ds.columns, vec!["b", "c"]);

    // Axes were re-derived for the new dataset, not patched
    let axes = session.axes();
    assert_eq!(axes.category.as_deref(), Some("b"));
    assert_eq!(axes.value.as_deref(), Some("c"));
}

#[test]
fn test_racing_submissions_resolve_to_newest() {
    let session = IngestSession::new();

    // Fire both before joining either; whatever the completion order, the
    // newest submission must own the final state
    let first = session.submit("first.csv".to_string(), b"a\n1".to_vec());
    let second = session.submit("second.csv".to_string(), b"b\n2".to_vec());

    let first_outcome = first.join().unwrap().unwrap();
    let second_outcome = second.join().unwrap().unwrap();

    assert_eq!(second_outcome, SubmitOutcome::Installed);
    // The older submission either landed before the newer one or was discarded
    assert!(matches!(
        first_outcome,
        SubmitOutcome::Installed | SubmitOutcome::Superseded
    ));
    assert_eq!(session.dataset().unwrap().name, "second");
}

#[test]
fn test_failed_upload_keeps_previous_dataset() {
    let session = IngestSession::new();
    session
        .submit("good.csv".to_string(), b"a\n1".to_vec())
        .join()
        .unwrap()
        .unwrap();

    let result = session
        .submit("bad.xlsx".to_string(), b"not a workbook".to_vec())
        .join()
        .unwrap();

    assert!(result.is_err());
    assert_eq!(session.dataset().unwrap().name, "good");
    assert!(session.last_error().is_some());
}

#[test]
fn test_unsupported_format_reported_without_decode() {
    let session = IngestSession::new();
    let result = session
        .submit("photo.png".to_string(), vec![1, 2, 3])
        .join()
        .unwrap();

    assert!(result.is_err());
    assert!(session.dataset().is_none());
}

#[test]
fn test_axis_override_drives_payload() {
    let session = IngestSession::new();
    session
        .submit(
            "sales.csv".to_string(),
            b"region,q1,q2\nnorth,10,20\nsouth,30,40".to_vec(),
        )
        .join()
        .unwrap()
        .unwrap();

    // Default value axis is q1; switch both axes in one update
    session.set_axes(Some("region".to_string()), Some("q2".to_string()));

    let ChartPayload::Series(series) = session.payload(ChartKind::Bar) else {
        panic!("expected series payload");
    };
    assert_eq!(series.label, "q2");
    assert_eq!(series.values, vec![20.0, 40.0]);
}
