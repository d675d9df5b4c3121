//! End-to-end behavior of the documentation browser pipeline: filter,
//! annotate, sort, select.

mod fixtures;

use docportal_core::{DocumentCategory, FavoritesStore, InMemoryFavorites};
use docportal_search::{
    search_all, sort_machines, DocumentQuery, MachineSort, Selection, SortField, SortState,
};
use fixtures::{document, engine, now, sample_catalog, sample_machines};

fn ids(docs: &[docportal_core::AnnotatedDocument]) -> Vec<String> {
    docs.iter().map(|d| d.id().to_string()).collect()
}

#[test]
fn test_category_filter_keeps_catalog_order() {
    let catalog = vec![
        document("a", "one.pdf", "S1", "01-01-2024", DocumentCategory::Manuals, None),
        document("b", "two.pdf", "S2", "01-01-2024", DocumentCategory::Manuals, None),
        document("c", "three.pdf", "S3", "01-01-2024", DocumentCategory::Boms, None),
    ];
    let result = engine().query(
        &catalog,
        &DocumentQuery::new(DocumentCategory::Manuals),
        &InMemoryFavorites::new(),
        now(),
    );
    assert_eq!(ids(&result), vec!["a", "b"]);
}

#[test]
fn test_every_category_partition_is_complete() {
    let catalog = sample_catalog();
    let favorites = InMemoryFavorites::new();
    let mut total = 0;
    for category in DocumentCategory::ALL {
        let result = engine().query(&catalog, &DocumentQuery::new(category), &favorites, now());
        assert!(result.iter().all(|d| d.document.category == category));
        total += result.len();
    }
    assert_eq!(total, catalog.len());
}

#[test]
fn test_search_is_case_insensitive() {
    let query = DocumentQuery::new(DocumentCategory::Manuals).with_search("abc");
    let result = engine().query(&sample_catalog(), &query, &InMemoryFavorites::new(), now());
    assert_eq!(ids(&result), vec!["d2"]);
}

#[test]
fn test_machine_scope_and_search_combine() {
    let query = DocumentQuery::new(DocumentCategory::Manuals)
        .scoped_to_machine("m-2")
        .with_search("hydraulic");
    let result = engine().query(&sample_catalog(), &query, &InMemoryFavorites::new(), now());
    assert_eq!(ids(&result), vec!["d6"]);
}

#[test]
fn test_annotations() {
    let mut favorites = InMemoryFavorites::new();
    favorites.toggle("d6").unwrap();

    let result = engine().query(
        &sample_catalog(),
        &DocumentQuery::new(DocumentCategory::Manuals),
        &favorites,
        now(),
    );
    let flags: Vec<(&str, bool, bool)> = result
        .iter()
        .map(|d| (d.id(), d.is_favorite, d.is_new))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("d1", false, true),
            ("d2", false, false),
            ("d4", false, false),
            ("d6", true, false),
        ]
    );
}

#[test]
fn test_sort_cycle_returns_to_catalog_order() {
    let catalog = sample_catalog();
    let favorites = InMemoryFavorites::new();
    let mut query = DocumentQuery::new(DocumentCategory::Manuals);
    let original = ids(&engine().query(&catalog, &query, &favorites, now()));

    query.sort.toggle(SortField::DateModified);
    let ascending = ids(&engine().query(&catalog, &query, &favorites, now()));
    assert_eq!(ascending, vec!["d6", "d2", "d1", "d4"]);

    query.sort.toggle(SortField::DateModified);
    let descending = ids(&engine().query(&catalog, &query, &favorites, now()));
    assert_eq!(descending, vec!["d1", "d2", "d6", "d4"]);

    query.sort.toggle(SortField::DateModified);
    assert_eq!(query.sort, SortState::unsorted());
    let restored = ids(&engine().query(&catalog, &query, &favorites, now()));
    assert_eq!(restored, original);
}

#[test]
fn test_sort_by_serial_number() {
    let query = DocumentQuery::new(DocumentCategory::Manuals)
        .sorted(SortState::descending(SortField::SerialNumber));
    let result = engine().query(&sample_catalog(), &query, &InMemoryFavorites::new(), now());
    assert_eq!(ids(&result), vec!["d4", "d2", "d6", "d1"]);
}

#[test]
fn test_select_all_double_toggle() {
    let result = engine().query(
        &sample_catalog(),
        &DocumentQuery::new(DocumentCategory::Manuals),
        &InMemoryFavorites::new(),
        now(),
    );
    let visible = ids(&result);

    let mut selection = Selection::new();
    selection.toggle_all(&visible);
    assert!(selection.is_all_selected(&visible));
    assert_eq!(selection.len(), visible.len());

    selection.toggle_all(&visible);
    assert!(selection.is_empty());
}

#[test]
fn test_bulk_download_of_visible_selection() {
    let result = engine().query(
        &sample_catalog(),
        &DocumentQuery::new(DocumentCategory::Manuals).with_search("manual"),
        &InMemoryFavorites::new(),
        now(),
    );
    let visible = ids(&result);

    let mut selection = Selection::new();
    selection.toggle_all(&visible);

    let mut downloaded = Vec::new();
    let mut sink = |ids: &[String]| downloaded.extend_from_slice(ids);
    assert_eq!(selection.download_selected(&mut sink), visible.len());
    assert!(selection.is_empty());
    assert_eq!(downloaded, visible);
}

#[test]
fn test_global_search_spans_machines_and_documents() {
    let results = search_all("amf-200", &sample_machines(), &sample_catalog());
    assert_eq!(results.machines.len(), 1);
    assert_eq!(results.machines[0].id, "m-2");
    let doc_ids: Vec<&str> = results.documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(doc_ids, vec!["d2", "d6"]);
}

#[test]
fn test_machine_listing_sorted_by_installation_date() {
    let mut machines = sample_machines();
    sort_machines(
        &mut machines,
        MachineSort::InstallationDate,
        engine().dates(),
    );
    assert_eq!(machines[0].id, "m-2");
}
