use crate::config::Config;
use crate::render::Fragment;
use std::path::Path;
use tempfile::TempDir;

/// A complete config for the 2024/2025 school year.
pub(crate) const SAMPLE_CONFIG: &str = r#"
progetto:
  titolo: Laboratorio di musica
  sottotitolo: Progetto per la scuola dell'infanzia
  anno_scolastico: 2024/2025
  gruppo: Sezione Girasoli

programmazione:
  inizio: 2024-10-01
  fine: 2025-05-31
  giorno_settimana: mercoledì

vacanze:
  - inizio: 2024-12-23
    fine: 2025-01-06
    descrizione: Vacanze di Natale
  - inizio: 2025-04-17
    fine: 2025-04-25
    descrizione: Vacanze di Pasqua

costi:
  mesi_inclusi: [Ottobre, Novembre, Dicembre, Gennaio, Febbraio, Marzo, Aprile, Maggio]
  quota_bimestrale: 100

maestri:
  - nome: Anna Rossi
    qualifica: Diplomata in pianoforte
  - nome: Marco Bianchi
    qualifica: Educatore musicale

scuola:
  nome: Scuola dell'infanzia Arcobaleno
"#;

pub(crate) fn sample_config() -> Config {
    Config::from_yaml(SAMPLE_CONFIG).unwrap()
}

pub(crate) fn fragment(name: &str, text: &str) -> Fragment {
    Fragment::new(name, text)
}

/// Create a temporary project directory holding `config.yml` and the given
/// section files under `docs/sezioni/`.
pub(crate) fn create_project(config: &str, sections: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    std::fs::write(path.join("config.yml"), config).unwrap();
    write_sections(&path.join("docs").join("sezioni"), sections);

    temp_dir
}

pub(crate) fn write_sections(dir: &Path, sections: &[(&str, &str)]) {
    std::fs::create_dir_all(dir).unwrap();
    for (name, text) in sections {
        std::fs::write(dir.join(name), text).unwrap();
    }
}
