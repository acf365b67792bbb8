use crate::error::CoreError;

pub const PHONE_NUMBER_COLUMN: &str = "Phone Number";

/// One row of a contact list. Cells are positional and line up with the
/// owning [`Dataset`]'s columns; an empty spreadsheet cell is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRecord {
    values: Vec<Option<String>>,
}

impl ContactRecord {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|value| value.as_deref())
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for ContactRecord {
    fn from_iter<T: IntoIterator<Item = Option<S>>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|value| value.map(Into::into)).collect())
    }
}

/// An ordered contact list sharing one column schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<ContactRecord>,
}

impl Dataset {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    pub fn with_records<I, S>(columns: I, records: Vec<ContactRecord>) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Self::new(columns);
        dataset.records.reserve(records.len());
        for record in records {
            dataset.push(record)?;
        }
        Ok(dataset)
    }

    /// Builds a dataset holding only the phone number column.
    pub fn from_phone_numbers<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            columns: vec![PHONE_NUMBER_COLUMN.to_string()],
            records: numbers
                .into_iter()
                .map(|number| ContactRecord::new(vec![number.map(Into::into)]))
                .collect(),
        }
    }

    pub fn push(&mut self, record: ContactRecord) -> Result<(), CoreError> {
        if record.len() != self.columns.len() {
            return Err(CoreError::RecordWidth {
                expected: self.columns.len(),
                actual: record.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, CoreError> {
        self.column_index(name)
            .ok_or_else(|| CoreError::MissingColumn(name.to_string()))
    }

    /// Looks up a cell by column name.
    pub fn value<'a>(&self, record: &'a ContactRecord, column: &str) -> Option<&'a str> {
        self.column_index(column)
            .and_then(|index| record.value(index))
    }

    pub(crate) fn with_schema_of(source: &Dataset, records: Vec<ContactRecord>) -> Self {
        Self {
            columns: source.columns.clone(),
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRecord, Dataset, PHONE_NUMBER_COLUMN};
    use crate::error::CoreError;

    #[test]
    fn push_rejects_records_of_the_wrong_width() {
        let mut dataset = Dataset::new(["Name", PHONE_NUMBER_COLUMN]);
        let err = dataset
            .push(ContactRecord::from_iter([Some("Ada")]))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::RecordWidth {
                expected: 2,
                actual: 1
            }
        );
        assert!(dataset.is_empty());
    }

    #[test]
    fn value_looks_up_cells_by_column_name() {
        let dataset = Dataset::with_records(
            ["Name", PHONE_NUMBER_COLUMN],
            vec![ContactRecord::from_iter([Some("Ada"), None])],
        )
        .unwrap();
        let record = &dataset.records()[0];
        assert_eq!(dataset.value(record, "Name"), Some("Ada"));
        assert_eq!(dataset.value(record, PHONE_NUMBER_COLUMN), None);
        assert_eq!(dataset.value(record, "Email"), None);
    }

    #[test]
    fn require_column_names_the_missing_field() {
        let dataset = Dataset::new(["Name"]);
        let err = dataset.require_column(PHONE_NUMBER_COLUMN).unwrap_err();
        assert_eq!(err.to_string(), "'Phone Number' column must be present in the dataset");
    }

    #[test]
    fn from_phone_numbers_builds_single_column() {
        let dataset = Dataset::from_phone_numbers([Some("213-555-0100"), None]);
        assert_eq!(dataset.columns(), [PHONE_NUMBER_COLUMN.to_string()]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].value(0), None);
    }
}
