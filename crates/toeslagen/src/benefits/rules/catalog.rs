use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::super::domain::ProgramYear;
use super::{RulesError, ToeslagRules};

/// Read-only lookup of validated rules tables by program year.
#[derive(Debug, Clone, Default)]
pub struct RulesCatalog {
    tables: BTreeMap<ProgramYear, Arc<ToeslagRules>>,
}

impl RulesCatalog {
    /// Catalog holding every table compiled into the crate, each validated on the way in.
    pub fn standard() -> Result<Self, RulesError> {
        let mut catalog = Self::default();
        catalog.insert(ToeslagRules::year_2026())?;
        Ok(catalog)
    }

    /// Register a table, replacing any table already held for the same year.
    pub fn insert(&mut self, rules: ToeslagRules) -> Result<Arc<ToeslagRules>, RulesError> {
        let rules = Arc::new(rules.validated()?);
        self.tables.insert(rules.program_year, Arc::clone(&rules));
        Ok(rules)
    }

    pub fn get(&self, year: ProgramYear) -> Option<Arc<ToeslagRules>> {
        self.tables.get(&year).cloned()
    }

    pub fn years(&self) -> Vec<ProgramYear> {
        self.tables.keys().copied().collect()
    }

    /// Parse and validate a JSON rules table.
    pub fn parse<R: Read>(reader: R) -> Result<ToeslagRules, RulesError> {
        let rules: ToeslagRules = serde_json::from_reader(reader)?;
        rules.validated()
    }

    /// Load every `<year>.json` file in `dir` into the catalog.
    ///
    /// The file stem must match the `programYear` declared inside the file.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, RulesError> {
        let entries = fs::read_dir(dir).map_err(|source| RulesError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RulesError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }

        Ok(paths.len())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<Arc<ToeslagRules>, RulesError> {
        let expected = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u16>().ok())
            .map(ProgramYear)
            .ok_or_else(|| RulesError::UnnamedFile {
                path: path.to_path_buf(),
            })?;

        let file = fs::File::open(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::parse(file)?;

        if rules.program_year != expected {
            return Err(RulesError::YearMismatch {
                path: path.to_path_buf(),
                expected,
                found: rules.program_year,
            });
        }

        debug!(year = %expected, path = %path.display(), "loaded rules table");
        self.insert(rules)
    }
}
