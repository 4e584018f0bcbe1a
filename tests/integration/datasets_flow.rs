use super::{IntegrationHarness, JOLIOT_CSV};
use parcours::profiles::columns;
use parcours::workspace::{Workspace, HOME_ENV_VAR};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

#[test]
fn groups_are_discovered_from_the_datasets_directory() {
    let harness = IntegrationHarness::new();
    harness.write_dataset("louise", JOLIOT_CSV);
    harness.write_dataset("joliot", JOLIOT_CSV);
    let groups: Vec<String> = harness
        .workspace()
        .dataset_sources()
        .unwrap()
        .into_iter()
        .map(|s| s.group)
        .collect();
    assert_eq!(groups, vec!["joliot", "louise"]);
}

#[test]
fn sample_then_confirm_records_under_domain_and_group() {
    let harness = IntegrationHarness::new();
    harness.write_dataset("joliot", JOLIOT_CSV);
    let workspace = harness.workspace();
    let dataset = workspace.load_dataset("joliot").unwrap();

    assert_eq!(
        dataset.distinct_values(columns::LAST_POSITION_DOMAIN),
        vec!["Commerce", "Gestion", "Informatique"]
    );

    let candidates = dataset.filter_eq(columns::LAST_POSITION_DOMAIN, "Informatique");
    assert_eq!(candidates.len(), 2);
    let mut rng = StdRng::seed_from_u64(42);
    let chosen = candidates.sample_one(&mut rng).unwrap();
    let chosen_id = chosen.identity().unwrap().to_string();
    assert!(chosen_id.ends_with("amina") || chosen_id.ends_with("dylan"));

    let store = workspace.open_store().unwrap();
    store
        .record(&chosen, "Informatique", dataset.source_group())
        .unwrap();
    let stored = store.entries_for_domain("Informatique").unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].identifier, chosen_id);
    assert_eq!(stored[0].source_group, "joliot");
}

#[test]
fn breakdown_counts_follow_filters() {
    let harness = IntegrationHarness::new();
    harness.write_dataset("joliot", JOLIOT_CSV);
    let dataset = harness.workspace().load_dataset("joliot").unwrap();

    let levels = dataset.value_counts(columns::DEGREE_LEVEL);
    assert_eq!(levels[0], ("Bac+2".to_string(), 2));

    let bac2 = dataset.filter_eq(columns::DEGREE_LEVEL, "Bac+2");
    assert_eq!(
        bac2.value_counts(columns::DEGREE_DOMAIN),
        vec![("Commerce".to_string(), 1), ("Gestion".to_string(), 1)]
    );
    assert!(dataset.value_counts(columns::BROAD_DOMAIN).is_empty());
}

#[test]
fn workspace_root_follows_home_override() {
    let harness = IntegrationHarness::new();
    env::set_var(HOME_ENV_VAR, harness.workspace_path());
    let workspace = Workspace::new().expect("workspace");
    env::remove_var(HOME_ENV_VAR);

    assert_eq!(workspace.root, harness.workspace_path());
    assert_eq!(workspace.config.store.max_per_domain, 3);
    assert_eq!(
        workspace.config_path,
        harness.workspace_path().join("config").join("config.toml")
    );
}
