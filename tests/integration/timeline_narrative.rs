use super::{IntegrationHarness, JOLIOT_CSV};
use parcours::profiles::{EntryKind, ProfileSummary, TimelineBuilder};

#[test]
fn loaded_profile_reads_oldest_first() {
    let harness = IntegrationHarness::new();
    harness.write_dataset("joliot", JOLIOT_CSV);
    let dataset = harness.workspace().load_dataset("joliot").unwrap();
    let amina = dataset
        .find_by_identity("https://example.org/in/amina")
        .unwrap();

    let lines = TimelineBuilder::new().build(&amina);
    assert_eq!(
        lines,
        vec![
            "🎓 Bac STI2D – Lycée Joliot Curie (2013 - 2016)",
            "🎓 Licence Informatique – Université Paris Nanterre (2016 - 2019)",
            "💼 Stagiaire – Beta (2019)",
            "💼 Développeuse – Acme (Sept 2021 - present)",
        ]
    );
}

#[test]
fn unparseable_periods_lead_the_narrative() {
    let harness = IntegrationHarness::new();
    harness.write_dataset("joliot", JOLIOT_CSV);
    let dataset = harness.workspace().load_dataset("joliot").unwrap();
    let chloe = dataset
        .find_by_identity("https://example.org/in/chloe")
        .unwrap();

    let entries = TimelineBuilder::new().entries(&chloe);
    let years: Vec<i32> = entries.iter().map(|e| e.year).collect();
    // A "nan" study period yields no year; "depuis 2020" does.
    assert_eq!(years, vec![0, 2017, 2020]);
    assert_eq!(entries[0].kind, EntryKind::Education);
    assert_eq!(entries[0].label(), "🎓 DUT GEA – IUT de Sceaux (nan)");
    assert_eq!(entries[2].label(), "💼 Comptable – Cabinet X (depuis 2020)");
}

#[test]
fn summary_accompanies_timeline() {
    let harness = IntegrationHarness::new();
    harness.write_dataset("joliot", JOLIOT_CSV);
    let dataset = harness.workspace().load_dataset("joliot").unwrap();
    let bruno = dataset
        .find_by_identity("https://example.org/in/bruno")
        .unwrap();

    let summary = ProfileSummary::from_record(&bruno);
    assert_eq!(summary.job_title, "Vendeur");
    assert_eq!(summary.company, "Decathlon");
    assert_eq!(summary.institution, "Lycée Louise Michel");
    assert_eq!(summary.status, "Employé");
    assert_eq!(TimelineBuilder::new().build(&bruno).len(), 2);
}
