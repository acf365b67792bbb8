use crate::domain::{
    normalize, AreaCode, Dataset, NormalizationFailure, TimezoneCode, PHONE_NUMBER_COLUMN,
};
use crate::error::CoreError;
use crate::table::AreaCodeTable;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Valid {
        area_code: AreaCode,
        timezone: TimezoneCode,
    },
    Invalid(InvalidReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error(transparent)]
    Normalization(#[from] NormalizationFailure),
    #[error("area code {0} is not assigned to any timezone")]
    UnknownAreaCode(AreaCode),
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid { .. })
    }
}

pub fn classify(raw: Option<&str>, table: &AreaCodeTable) -> Classification {
    let digits = match normalize(raw) {
        Ok(digits) => digits,
        Err(failure) => return Classification::Invalid(failure.into()),
    };
    let area_code = digits.area_code();
    match table.timezone_of(&area_code) {
        Some(timezone) => Classification::Valid {
            area_code,
            timezone,
        },
        None => Classification::Invalid(InvalidReason::UnknownAreaCode(area_code)),
    }
}

/// True when the number normalizes and its prefix is a known area code.
pub fn is_valid_area_code(raw: Option<&str>, table: &AreaCodeTable) -> bool {
    normalize(raw)
        .map(|digits| table.contains(&digits.area_code()))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityReport {
    pub valid: Dataset,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl ValidityReport {
    pub fn total(&self) -> usize {
        self.valid_count + self.invalid_count
    }
}

/// Splits a dataset into rows with a valid area code and a count of the rest.
pub fn classify_validity(
    dataset: &Dataset,
    table: &AreaCodeTable,
) -> Result<ValidityReport, CoreError> {
    let column = dataset.require_column(PHONE_NUMBER_COLUMN)?;

    let mut kept = Vec::new();
    let mut invalid_count = 0;
    for record in dataset.records() {
        if is_valid_area_code(record.value(column), table) {
            kept.push(record.clone());
        } else {
            invalid_count += 1;
        }
    }

    let valid_count = kept.len();
    info!(valid = valid_count, invalid = invalid_count, "phone numbers classified");

    Ok(ValidityReport {
        valid: Dataset::with_schema_of(dataset, kept),
        valid_count,
        invalid_count,
    })
}

#[cfg(test)]
mod tests {
    use super::{classify, classify_validity, is_valid_area_code, Classification, InvalidReason};
    use crate::domain::{
        AreaCode, ContactRecord, Dataset, NormalizationFailure, TimezoneCode, PHONE_NUMBER_COLUMN,
    };
    use crate::error::CoreError;
    use crate::table::AreaCodeTable;

    fn table() -> AreaCodeTable {
        AreaCodeTable::new([
            (TimezoneCode::Pst, vec!["213", "310"]),
            (TimezoneCode::Est, vec!["202"]),
        ])
        .unwrap()
    }

    #[test]
    fn classify_reports_area_code_and_timezone() {
        let result = classify(Some("(202) 555-0101"), &table());
        assert_eq!(
            result,
            Classification::Valid {
                area_code: AreaCode::new("202").unwrap(),
                timezone: TimezoneCode::Est,
            }
        );
        assert!(result.is_valid());
    }

    #[test]
    fn classify_explains_invalid_numbers() {
        let table = table();
        assert_eq!(
            classify(None, &table),
            Classification::Invalid(InvalidReason::Normalization(
                NormalizationFailure::Missing
            ))
        );
        assert_eq!(
            classify(Some("+1 213 555 0100"), &table),
            Classification::Invalid(InvalidReason::Normalization(
                NormalizationFailure::DigitCount(11)
            ))
        );
        let unknown = classify(Some("999-555-0102"), &table);
        assert_eq!(
            unknown,
            Classification::Invalid(InvalidReason::UnknownAreaCode(
                AreaCode::new("999").unwrap()
            ))
        );
    }

    #[test]
    fn is_valid_area_code_never_fails_on_malformed_input() {
        let table = table();
        assert!(is_valid_area_code(Some("310.555.0199"), &table));
        for raw in [None, Some(""), Some("abc"), Some("213-555"), Some("1-213-555-0100")] {
            assert!(!is_valid_area_code(raw, &table), "{raw:?}");
        }
        assert!(!is_valid_area_code(Some("999-555-0102"), &table));
    }

    #[test]
    fn classify_validity_counts_every_row() {
        let dataset = Dataset::with_records(
            ["Name", PHONE_NUMBER_COLUMN],
            vec![
                ContactRecord::from_iter([Some("Ada"), Some("213-555-0100")]),
                ContactRecord::from_iter([Some("Grace"), None]),
                ContactRecord::from_iter([Some("Alan"), Some("999-555-0102")]),
                ContactRecord::from_iter([Some("Edsger"), Some("202 555 0101")]),
            ],
        )
        .unwrap();

        let report = classify_validity(&dataset, &table()).unwrap();
        assert_eq!(report.valid_count, 2);
        assert_eq!(report.invalid_count, 2);
        assert_eq!(report.total(), dataset.len());
        let names: Vec<_> = report
            .valid
            .records()
            .iter()
            .map(|record| record.value(0))
            .collect();
        assert_eq!(names, vec![Some("Ada"), Some("Edsger")]);
        assert_eq!(report.valid.columns(), dataset.columns());
    }

    #[test]
    fn classify_validity_handles_empty_dataset() {
        let dataset = Dataset::new([PHONE_NUMBER_COLUMN]);
        let report = classify_validity(&dataset, &table()).unwrap();
        assert_eq!(report.total(), 0);
        assert!(report.valid.is_empty());
    }

    #[test]
    fn classify_validity_requires_phone_column() {
        let dataset =
            Dataset::with_records(["Name"], vec![ContactRecord::from_iter([Some("Ada")])])
                .unwrap();
        let err = classify_validity(&dataset, &table()).unwrap_err();
        assert_eq!(err, CoreError::MissingColumn(PHONE_NUMBER_COLUMN.to_string()));
    }
}
