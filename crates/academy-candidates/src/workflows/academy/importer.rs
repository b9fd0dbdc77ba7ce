use super::domain::{Candidate, RoleGroups};
use super::parser::{self, RawRow, RowError};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Failures while turning an academy export into candidates.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read candidate file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid candidate data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 4 ';'-separated fields, found {fields}")]
    MalformedLine { line: u64, fields: usize },
    #[error("line {line}: age '{value}' is not a whole number")]
    InvalidAge { line: u64, value: String },
    #[error("no candidate records found in input")]
    EmptyInput,
}

impl From<RowError> for ImportError {
    fn from(err: RowError) -> Self {
        match err {
            RowError::Csv(err) => Self::Csv(err),
            RowError::FieldCount { line, fields } => Self::MalformedLine { line, fields },
        }
    }
}

pub struct CandidateImporter;

impl CandidateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RoleGroups, ImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let groups = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            candidates = groups.len(),
            roles = groups.roles().len(),
            "candidate file imported"
        );
        Ok(groups)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RoleGroups, ImportError> {
        let candidates = read_candidates(reader)?;
        Ok(RoleGroups::from_candidates(candidates))
    }
}

/// Parses every data line, dropping a leading header row.
pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<Candidate>, ImportError> {
    let mut rows = parser::parse_rows(reader)?;

    if rows.first().is_some_and(RawRow::is_header) {
        debug!("header row detected");
        rows.remove(0);
    }

    if rows.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    rows.into_iter().map(into_candidate).collect()
}

fn into_candidate(row: RawRow) -> Result<Candidate, ImportError> {
    let age = row
        .age
        .parse::<i32>()
        .map_err(|_| ImportError::InvalidAge {
            line: row.line,
            value: row.age.clone(),
        })?;

    Ok(Candidate {
        name: row.name,
        age,
        role: row.role,
        state: row.state,
    })
}
