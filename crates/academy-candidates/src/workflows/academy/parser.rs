use std::io::Read;

pub(crate) const DELIMITER: u8 = b';';
pub(crate) const FIELD_COUNT: usize = 4;

/// Fields of one input line before the age is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRow {
    pub(crate) line: u64,
    pub(crate) name: String,
    pub(crate) age: String,
    pub(crate) role: String,
    pub(crate) state: String,
}

impl RawRow {
    /// `Nome;Idade;Vaga;Estado` as exported by the academy spreadsheet.
    pub(crate) fn is_header(&self) -> bool {
        self.name == "Nome" && self.role == "Vaga" && self.state == "Estado"
    }
}

#[derive(Debug)]
pub(crate) enum RowError {
    Csv(csv::Error),
    FieldCount { line: u64, fields: usize },
}

impl From<csv::Error> for RowError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, RowError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        if record.len() != FIELD_COUNT {
            return Err(RowError::FieldCount {
                line,
                fields: record.len(),
            });
        }

        rows.push(RawRow {
            line,
            name: record[0].to_string(),
            age: record[1].to_string(),
            role: record[2].to_string(),
            state: record[3].to_string(),
        });
    }

    Ok(rows)
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_blank_and_whitespace_only_lines() {
        let rows = parse_rows(Cursor::new(
            "Ana Silva;25;QA;SC\n\n   \nBob Costa;35;Mobile;PI\n\n",
        ))
        .expect("rows parse");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ana Silva");
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[1].state, "PI");
    }

    #[test]
    fn trims_fields_and_carriage_returns() {
        let rows = parse_rows(Cursor::new("  Ana Silva ; 25 ;QA;SC \r\n")).expect("rows parse");
        assert_eq!(
            rows[0],
            RawRow {
                line: 1,
                name: "Ana Silva".to_string(),
                age: "25".to_string(),
                role: "QA".to_string(),
                state: "SC".to_string(),
            }
        );
    }

    #[test]
    fn quotes_are_kept_verbatim() {
        let rows = parse_rows(Cursor::new("\"Ana\";25;QA;SC\n")).expect("rows parse");
        assert_eq!(rows[0].name, "\"Ana\"");
    }

    #[test]
    fn reports_line_with_wrong_field_count() {
        let error = parse_rows(Cursor::new("Ana Silva;25;QA;SC\nBob Costa;35;Mobile\n"))
            .expect_err("short line rejected");
        match error {
            RowError::FieldCount { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 3);
            }
            other => panic!("expected field count error, got {other:?}"),
        }
    }

    #[test]
    fn detects_header_labels() {
        let rows = parse_rows(Cursor::new("Nome;Idade;Vaga;Estado\n")).expect("rows parse");
        assert!(rows[0].is_header());
    }
}
