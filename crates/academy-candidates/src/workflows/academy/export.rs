use super::collation;
use super::domain::{Candidate, RoleGroups};
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_HEADER: [&str; 4] = ["Nome", "Idade", "Vaga", "Estado"];

#[derive(Debug, thiserror::Error)]
pub enum ReportWriteError {
    #[error("failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode report: {0}")]
    Csv(#[from] csv::Error),
}

/// One exported line: name, "<age> anos", role, state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow([String; 4]);

impl ReportRow {
    fn from_candidate(candidate: &Candidate) -> Self {
        Self([
            candidate.name.clone(),
            format!("{} anos", candidate.age),
            candidate.role.clone(),
            candidate.state.clone(),
        ])
    }

    pub fn name(&self) -> &str {
        &self.0[0]
    }

    pub fn fields(&self) -> &[String; 4] {
        &self.0
    }
}

/// Data rows sorted by name; the header is not included.
pub fn sorted_rows(groups: &RoleGroups) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = groups.candidates().map(ReportRow::from_candidate).collect();
    rows.sort_by(|left, right| collation::compare(left.name(), right.name()));
    rows
}

/// Header plus sorted rows, `;` between fields and `\n` between rows.
pub fn render_report(groups: &RoleGroups) -> Result<Vec<u8>, ReportWriteError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADER)?;
    for row in sorted_rows(groups) {
        writer.write_record(row.fields())?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

/// Writes the sorted report to `path`, returning the number of data rows.
pub fn write_report<P: AsRef<Path>>(
    path: P,
    groups: &RoleGroups,
) -> Result<usize, ReportWriteError> {
    let path = path.as_ref();
    let bytes = render_report(groups)?;
    std::fs::write(path, bytes).map_err(|source| ReportWriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = groups.len();
    info!(path = %path.display(), rows, "report written");
    Ok(rows)
}
