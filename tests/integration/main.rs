use parcours::workspace::{AppConfig, Workspace};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

pub const JOLIOT_CSV: &str = "\
Profile Public URL,Diplôme Titre #1,Établissement Diplôme #1,Study Period #1,Niveau Diplôme #1,Domaine Diplôme #1,Diplôme Titre #2,Établissement Diplôme #2,Study Period #2,Job Title,Company Name,Tenure,Past Job Title #1,Past Company Name #1,Past Tenure #1,Domaine du dernier poste,Catégorie socio-professionnelle
https://example.org/in/amina,Licence Informatique,Université Paris Nanterre,2016 - 2019,Bac+3,Informatique,Bac STI2D,Lycée Joliot Curie,2013 - 2016,Développeuse,Acme,Sept 2021 - present,Stagiaire,Beta,2019,Informatique,Cadre
https://example.org/in/bruno,BTS MCO,Lycée Louise Michel,2015 - 2017,Bac+2,Commerce,,,,Vendeur,Decathlon,2018 - 2022,,,,Commerce,Employé
https://example.org/in/chloe,DUT GEA,IUT de Sceaux,nan,Bac+2,Gestion,,,,Comptable,Cabinet X,depuis 2020,Assistante,Cabinet Y,2017 - 2019,Gestion,Employé
https://example.org/in/dylan,Master Data,Université Paris Saclay,2018 - 2020,Bac+5,Informatique,,,,Data Engineer,Gamma,2020 - 2023,,,,Informatique,Cadre
";

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::with_config(self.workspace_path(), AppConfig::default())
    }

    pub fn write_dataset(&self, group: &str, contents: &str) {
        let dir = self.workspace_path().join("datasets");
        fs::create_dir_all(&dir).expect("datasets dir");
        fs::write(dir.join(format!("profils-lycée-{group}.csv")), contents)
            .expect("write dataset");
    }
}

mod datasets_flow;
mod representatives_store;
mod timeline_narrative;
