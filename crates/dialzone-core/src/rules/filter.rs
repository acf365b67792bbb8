use crate::domain::{normalize, Dataset, PHONE_NUMBER_COLUMN};
use crate::error::CoreError;
use crate::table::AreaCodeTable;
use tracing::info;

/// Keeps the records whose phone number falls in `timezone`, in input order.
///
/// The phone number column and the timezone code are both checked before any
/// row is looked at. Rows whose number does not normalize are dropped.
pub fn filter_by_timezone(
    dataset: &Dataset,
    timezone: &str,
    table: &AreaCodeTable,
) -> Result<Dataset, CoreError> {
    let column = dataset.require_column(PHONE_NUMBER_COLUMN)?;
    let (timezone, area_codes) = table.resolve_zone(timezone)?;

    let kept: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| {
            normalize(record.value(column))
                .map(|digits| area_codes.contains(&digits.area_code()))
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    info!(
        "Filtered {} contacts to {} contacts in timezone {}",
        dataset.len(),
        kept.len(),
        timezone
    );

    Ok(Dataset::with_schema_of(dataset, kept))
}

#[cfg(test)]
mod tests {
    use super::filter_by_timezone;
    use crate::domain::{normalize, ContactRecord, Dataset, TimezoneCode, PHONE_NUMBER_COLUMN};
    use crate::error::CoreError;
    use crate::table::AreaCodeTable;

    fn table() -> AreaCodeTable {
        AreaCodeTable::new([
            (TimezoneCode::Pst, vec!["213", "310"]),
            (TimezoneCode::Est, vec!["202"]),
        ])
        .unwrap()
    }

    fn contacts() -> Dataset {
        Dataset::with_records(
            ["Name", PHONE_NUMBER_COLUMN],
            vec![
                ContactRecord::from_iter([Some("Ada"), Some("213-555-0100")]),
                ContactRecord::from_iter([Some("Grace"), Some("202 555 0101")]),
                ContactRecord::from_iter([Some("Alan"), Some("999-555-0102")]),
                ContactRecord::from_iter([Some("Edsger"), Some("")]),
                ContactRecord::from_iter([Some("Barbara"), None]),
                ContactRecord::from_iter([Some("Donald"), Some("(310) 555-0199")]),
                ContactRecord::from_iter([Some("Ken"), Some("+1 213 555 0100")]),
            ],
        )
        .unwrap()
    }

    fn names(dataset: &Dataset) -> Vec<&str> {
        dataset
            .records()
            .iter()
            .filter_map(|record| record.value(0))
            .collect()
    }

    #[test]
    fn filter_keeps_only_requested_timezone() {
        let dataset = Dataset::from_phone_numbers([
            Some("213-555-0100"),
            Some("202 555 0101"),
            Some("999-555-0102"),
            Some(""),
        ]);
        let filtered = filter_by_timezone(&dataset, "PST", &table()).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].value(0), Some("213-555-0100"));
    }

    #[test]
    fn filter_preserves_order_and_schema() {
        let dataset = contacts();
        let filtered = filter_by_timezone(&dataset, "pst", &table()).unwrap();
        assert_eq!(names(&filtered), vec!["Ada", "Donald"]);
        assert_eq!(filtered.columns(), dataset.columns());

        let table = table();
        let codes = table.area_codes(TimezoneCode::Pst).unwrap();
        for record in filtered.records() {
            let digits = normalize(record.value(1)).unwrap();
            assert!(codes.contains(&digits.area_code()));
        }
    }

    #[test]
    fn filter_leaves_input_untouched() {
        let dataset = contacts();
        let before = dataset.clone();
        let _ = filter_by_timezone(&dataset, "EST", &table()).unwrap();
        assert_eq!(dataset, before);
    }

    #[test]
    fn filter_is_idempotent() {
        let table = table();
        let once = filter_by_timezone(&contacts(), "PST", &table).unwrap();
        let twice = filter_by_timezone(&once, "PST", &table).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_rejects_unknown_timezone_with_valid_list() {
        let err = filter_by_timezone(&contacts(), "XYZ", &table()).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownTimezone {
                requested: "XYZ".to_string(),
                valid: "PST, EST".to_string(),
            }
        );
        assert!(err.to_string().contains("PST, EST"));
    }

    #[test]
    fn filter_requires_phone_column_before_timezone() {
        let dataset = Dataset::with_records(
            ["Name", "Phone"],
            vec![ContactRecord::from_iter([Some("Ada"), Some("213-555-0100")])],
        )
        .unwrap();
        let err = filter_by_timezone(&dataset, "XYZ", &table()).unwrap_err();
        assert_eq!(err, CoreError::MissingColumn(PHONE_NUMBER_COLUMN.to_string()));
    }

    #[test]
    fn filter_on_empty_dataset_is_empty() {
        let dataset = Dataset::new([PHONE_NUMBER_COLUMN]);
        let filtered = filter_by_timezone(&dataset, "EST", &table()).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_with_north_american_table() {
        let table = AreaCodeTable::north_american().unwrap();
        let dataset = Dataset::from_phone_numbers([
            Some("907-555-0100"),
            Some("808-555-0100"),
            Some("212-555-0100"),
        ]);
        let filtered = filter_by_timezone(&dataset, "akst", &table).unwrap();
        assert_eq!(filtered.records()[0].value(0), Some("907-555-0100"));
        assert_eq!(filtered.len(), 1);
    }
}
