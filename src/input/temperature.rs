use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::quantity::temperature::Fahrenheit;

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct DailyTemperature {
    pub date: NaiveDate,

    /// Daily average outdoor temperature.
    pub temperature: Fahrenheit,
}

/// Daily average outdoor temperatures ordered by date.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "Vec<DailyTemperature>")]
pub struct TemperatureSeries(BTreeMap<NaiveDate, Fahrenheit>);

impl From<Vec<DailyTemperature>> for TemperatureSeries {
    fn from(records: Vec<DailyTemperature>) -> Self {
        records.into_iter().collect()
    }
}

impl FromIterator<DailyTemperature> for TemperatureSeries {
    fn from_iter<I: IntoIterator<Item = DailyTemperature>>(iter: I) -> Self {
        Self(iter.into_iter().map(|record| (record.date, record.temperature)).collect())
    }
}

impl TemperatureSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Temperatures between the dates, both included.
    pub fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = Fahrenheit> + '_ {
        // `BTreeMap::range` panics on a reversed range:
        let range = (start <= end).then(|| self.0.range(start..=end));
        range.into_iter().flatten().map(|(_, temperature)| *temperature)
    }
}
