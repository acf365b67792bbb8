mod data;

use crate::domain::{AreaCode, TimezoneCode};
use crate::error::CoreError;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Immutable mapping from timezone to the area codes it covers.
///
/// Zones keep the order they were supplied in; that order is used whenever
/// the table's timezones are listed back to a caller. Every area code belongs
/// to exactly one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeTable {
    zones: Vec<(TimezoneCode, BTreeSet<AreaCode>)>,
    all: BTreeMap<AreaCode, TimezoneCode>,
}

impl AreaCodeTable {
    pub fn new<I, C, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (TimezoneCode, C)>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut zones: Vec<(TimezoneCode, BTreeSet<AreaCode>)> = Vec::new();
        let mut all = BTreeMap::new();

        for (timezone, codes) in entries {
            if zones.iter().any(|(existing, _)| *existing == timezone) {
                return Err(CoreError::DuplicateTimezone(timezone.to_string()));
            }

            let mut set = BTreeSet::new();
            for raw in codes {
                let code = AreaCode::new(raw.as_ref())?;
                if let Some(first) = all.insert(code, timezone) {
                    if first != timezone {
                        return Err(CoreError::OverlappingAreaCode {
                            code: code.to_string(),
                            first: first.to_string(),
                            second: timezone.to_string(),
                        });
                    }
                }
                set.insert(code);
            }
            zones.push((timezone, set));
        }

        debug!(
            zones = zones.len(),
            area_codes = all.len(),
            "area code table built"
        );
        Ok(Self { zones, all })
    }

    /// The embedded table of US and Canadian-border NPAs.
    pub fn north_american() -> Result<Self, CoreError> {
        Self::new(data::NORTH_AMERICAN_AREA_CODES.iter().copied())
    }

    pub fn timezones(&self) -> impl Iterator<Item = TimezoneCode> + '_ {
        self.zones.iter().map(|(timezone, _)| *timezone)
    }

    pub fn area_codes(&self, timezone: TimezoneCode) -> Option<&BTreeSet<AreaCode>> {
        self.zones
            .iter()
            .find(|(candidate, _)| *candidate == timezone)
            .map(|(_, codes)| codes)
    }

    /// Every valid area code across all zones, in ascending order.
    pub fn all_area_codes(&self) -> impl Iterator<Item = &AreaCode> + '_ {
        self.all.keys()
    }

    pub fn contains(&self, code: &AreaCode) -> bool {
        self.all.contains_key(code)
    }

    pub fn timezone_of(&self, code: &AreaCode) -> Option<TimezoneCode> {
        self.all.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Resolves a user-supplied timezone code against this table's zones.
    pub fn resolve_timezone(&self, raw: &str) -> Result<TimezoneCode, CoreError> {
        self.resolve_zone(raw).map(|(timezone, _)| timezone)
    }

    /// Like [`AreaCodeTable::resolve_timezone`], also returning the zone's area codes.
    pub fn resolve_zone(
        &self,
        raw: &str,
    ) -> Result<(TimezoneCode, &BTreeSet<AreaCode>), CoreError> {
        let requested = raw.trim().to_ascii_uppercase();
        requested
            .parse::<TimezoneCode>()
            .ok()
            .and_then(|timezone| self.area_codes(timezone).map(|codes| (timezone, codes)))
            .ok_or_else(|| CoreError::UnknownTimezone {
                requested,
                valid: self.timezone_list(),
            })
    }

    /// The table's timezone codes joined with `", "`.
    pub fn timezone_list(&self) -> String {
        self.timezones()
            .map(TimezoneCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
