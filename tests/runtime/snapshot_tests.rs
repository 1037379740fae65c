//! Snapshot catalog tests.

use std::io::Write;

use cartpick_foundation::{Catalog, ErrorKind, Listing, Query};
use cartpick_runtime::{Snapshot, SnapshotCatalog};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_snapshot_from_file() {
    let file = write_temp(
        r#"{
            "store": "corner-shop",
            "results": {
                "cream": [ { "name": "Cream 20%", "price": 2.4 } ]
            }
        }"#,
    );

    let mut catalog = SnapshotCatalog::new(Snapshot::load_from_file(file.path()).unwrap());
    assert_eq!(catalog.store(), Some("corner-shop"));

    catalog.search(&Query::new("cream")).unwrap();
    assert_eq!(catalog.products().unwrap(), vec![Listing::new("Cream 20%", 2.4)]);
}

#[test]
fn missing_snapshot_file() {
    let err = Snapshot::load_from_file("/no/such/snapshot.json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Snapshot(ref m) if m.contains("snapshot.json")));
}

#[test]
fn store_is_optional() {
    let snapshot = Snapshot::from_json(r#"{ "results": {} }"#).unwrap();
    assert_eq!(SnapshotCatalog::new(snapshot).store(), None);
}

#[test]
fn search_replaces_previous_page() {
    let snapshot = Snapshot::default()
        .with_results("a", vec![Listing::new("A", 1.0)])
        .with_results("b", vec![Listing::new("B", 2.0), Listing::new("B2", 3.0)]);
    let mut catalog = SnapshotCatalog::new(snapshot);

    catalog.search(&Query::new("b")).unwrap();
    assert_eq!(catalog.products().unwrap().len(), 2);
    catalog.search(&Query::new("a")).unwrap();
    assert_eq!(catalog.products().unwrap(), vec![Listing::new("A", 1.0)]);
}

#[test]
fn queries_are_looked_up_verbatim() {
    let snapshot = Snapshot::default().with_results("blue shoes", vec![Listing::new("Blue shoes", 30.0)]);
    let mut catalog = SnapshotCatalog::new(snapshot);

    catalog.search(&Query::new(" blue shoes")).unwrap();
    assert!(catalog.products().unwrap().is_empty());
}
