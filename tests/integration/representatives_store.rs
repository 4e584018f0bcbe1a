use super::IntegrationHarness;
use chrono::{Duration, TimeZone, Utc};
use parcours::profiles::ProfileRecord;
use parcours::representatives::{CsvFileBackend, ProfileStore};
use std::fs;

fn profile(url: &str) -> ProfileRecord {
    ProfileRecord::from_fields([("Profile Public URL", url)])
}

#[test]
fn store_survives_reopening_and_keeps_three_per_domain() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();

    for i in 0..3 {
        // A fresh store per call, as separate runs of the app would do.
        let store = workspace.open_store().expect("open store");
        store
            .record_at(
                &profile(&format!("https://example.org/in/{i}")),
                "Informatique",
                "joliot",
                t0 + Duration::minutes(i),
            )
            .expect("record");
    }
    let store = workspace.open_store().expect("reopen store");
    store
        .record_at(
            &profile("https://example.org/in/3"),
            "Informatique",
            "louise",
            t0 + Duration::minutes(3),
        )
        .expect("record fourth");

    let remaining: Vec<String> = store
        .entries_for_domain("Informatique")
        .unwrap()
        .into_iter()
        .map(|e| e.identifier)
        .collect();
    assert_eq!(
        remaining,
        vec![
            "https://example.org/in/1",
            "https://example.org/in/2",
            "https://example.org/in/3",
        ]
    );

    let raw = fs::read_to_string(workspace.store_path()).unwrap();
    let mut lines = raw.lines();
    assert_eq!(lines.next(), Some("Profile URL,Domaine,Lycée,Timestamp"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn legacy_store_file_is_extended_in_place() {
    let harness = IntegrationHarness::new();
    let path = harness.workspace_path().join("profils_representatifs.csv");
    fs::write(
        &path,
        "Profile URL,Domaine,Lycée,Timestamp\n\
         https://example.org/in/old,Commerce,louise,2025-02-10T14:03:11.000001\n\
         https://example.org/in/older,Commerce,claude,2025-02-09T09:00:00.5\n\
         https://example.org/in/other,Santé,joliot,2025-02-08T09:00:00\n\
         https://example.org/in/newest,Commerce,joliot,2025-02-11T18:45:00.250000\n",
    )
    .unwrap();

    let store = ProfileStore::new(CsvFileBackend::new(&path));
    store
        .record(&profile("https://example.org/in/fresh"), "Commerce", "claude")
        .unwrap();

    let ids: Vec<String> = store
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.identifier)
        .collect();
    assert_eq!(
        ids,
        vec![
            "https://example.org/in/old",
            "https://example.org/in/other",
            "https://example.org/in/newest",
            "https://example.org/in/fresh",
        ]
    );
}

#[test]
fn profile_without_identifier_is_stored_as_unknown() {
    let harness = IntegrationHarness::new();
    let store = harness.workspace().open_store().unwrap();
    store
        .record(&ProfileRecord::default(), "Droit", "joliot")
        .unwrap();
    let entries = store.entries().unwrap();
    assert_eq!(entries[0].identifier, "unknown");
    assert_eq!(entries[0].domain, "Droit");
}

#[test]
fn configured_bound_is_honoured() {
    let harness = IntegrationHarness::new();
    let mut workspace = harness.workspace();
    workspace.config.store.max_per_domain = 2;
    let store = workspace.open_store().unwrap();
    for i in 0..4 {
        store
            .record(&profile(&format!("p{i}")), "Art", "claude")
            .unwrap();
    }
    assert_eq!(store.domain_counts().unwrap().get("Art"), Some(&2));
}
