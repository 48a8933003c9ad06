use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::LoadError;

/// An in-memory CSV table: a header row plus text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file).map_err(|err| err.with_path(path))
    }

    /// Parse CSV text. Rows may be ragged; missing cells read as empty.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text, or the empty string if the row or cell does not exist.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cells of one column for the given rows, in the given order.
    pub fn column_values<'a>(
        &'a self,
        rows: &'a [usize],
        column: usize,
    ) -> impl Iterator<Item = &'a str> + 'a {
        rows.iter().map(move |&row| self.cell(row, column))
    }

    /// Every row index, in order.
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ID,Subject,Question_EN,Answer_EN\n\
                          1,Science,What is H2O?,Water\n\
                          2, Technology ,\"Who wrote \"\"Hello, World\"\"?\",Kernighan\n\
                          3,Science,Short row\n";

    #[test]
    fn test_from_reader_parses_headers_and_rows() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            dataset.headers(),
            &["ID", "Subject", "Question_EN", "Answer_EN"]
        );
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.cell(1, 1), "Technology");
        assert_eq!(dataset.cell(1, 2), "Who wrote \"Hello, World\"?");
    }

    #[test]
    fn test_missing_cells_read_as_empty() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.cell(2, 3), "");
        assert_eq!(dataset.cell(99, 0), "");
    }

    #[test]
    fn test_column_values_follow_row_order() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let answers: Vec<&str> = dataset.column_values(&[1, 0], 3).collect();
        assert_eq!(answers, vec!["Kernighan", "Water"]);
        assert_eq!(dataset.column_index("Subject"), Some(1));
        assert_eq!(dataset.column_index("subject"), None);
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let dataset = Dataset::from_reader("ID,Goal\n".as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.all_rows().is_empty());
    }
}
