use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    core::{
        dispersion::Dispersion,
        home::Estimate,
        summary::{HeatLoadSummary, HomeSummary},
        winter_period::WinterPeriod,
    },
    input::billing::NormalizedBillingRecord,
    prelude::*,
    quantity::degree_days::DegreeDays,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    Kept,
    Outlier,
}

/// Winter period along with its billing dates.
#[derive(Clone, Debug, Serialize)]
pub struct WinterPeriodRow {
    /// Position in the billing history.
    pub index: usize,

    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
    pub status: PeriodStatus,
    pub days: usize,
    pub usage: f64,
    pub total_hdd: DegreeDays,
    pub partial_ua: f64,
    pub ua: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub heat_load: HeatLoadSummary,
    pub dispersion: Dispersion,

    /// Both kept and removed winter periods, in the billing order.
    pub winter_periods: Vec<WinterPeriodRow>,
}

impl Report {
    pub fn try_new(
        records: &[NormalizedBillingRecord],
        summary: &HomeSummary,
        estimate: &Estimate,
    ) -> Result<Self> {
        let kept = estimate.winter_periods.iter().map(|winter| (winter, PeriodStatus::Kept));
        let removed = estimate.outliers.iter().map(|winter| (winter, PeriodStatus::Outlier));
        let mut winter_periods = kept
            .chain(removed)
            .map(|(winter, status)| WinterPeriodRow::try_new(records, winter, status))
            .collect::<Result<Vec<_>>>()?;
        winter_periods.sort_by_key(|row| row.index);
        Ok(Self {
            heat_load: HeatLoadSummary::new(summary, estimate),
            dispersion: estimate.dispersion,
            winter_periods,
        })
    }
}

impl WinterPeriodRow {
    fn try_new(
        records: &[NormalizedBillingRecord],
        winter: &WinterPeriod,
        status: PeriodStatus,
    ) -> Result<Self> {
        let record = records
            .get(winter.index)
            .with_context(|| format!("no billing record #{}", winter.index))?;
        Ok(Self {
            index: winter.index,
            period_start_date: record.period_start_date,
            period_end_date: record.period_end_date,
            status,
            days: winter.period.days(),
            usage: winter.period.usage,
            total_hdd: winter.period.total_hdd(),
            partial_ua: winter.partial_ua,
            ua: winter.ua,
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{
        core::{analysis_type::AnalysisType, billing_period::BillingPeriod, fuel::FuelType},
        quantity::temperature::Fahrenheit,
    };

    fn record(month: u32) -> NormalizedBillingRecord {
        NormalizedBillingRecord {
            period_start_date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            period_end_date: NaiveDate::from_ymd_opt(2024, month, 10).unwrap(),
            usage: 10.0,
            inclusion_override: None,
        }
    }

    fn winter(index: usize, avg_temp: f64) -> WinterPeriod {
        let period = BillingPeriod::try_new(
            vec![Fahrenheit::from(avg_temp); 10],
            10.0,
            Fahrenheit::from(60.0),
            AnalysisType::Include,
        )
        .unwrap();
        WinterPeriod::try_new(index, period, 1.0, 1000.0).unwrap()
    }

    fn estimate() -> Estimate {
        Estimate {
            balance_point: Fahrenheit::from(60.0),
            dispersion: Dispersion { average: 5.0, stdev_pct: 0.0 },
            avg_non_heating_usage: 0.0,
            winter_periods: vec![winter(0, 40.0), winter(2, 40.0)],
            outliers: vec![winter(1, 50.0)],
        }
    }

    fn summary() -> HomeSummary {
        HomeSummary {
            fuel_type: FuelType::Gas,
            heating_system_efficiency: 0.8,
            thermostat_set_point: Fahrenheit::from(70.0),
            setback_temperature: None,
            setback_hours_per_day: None,
            design_temperature: Fahrenheit::from(5.0),
        }
    }

    #[test]
    fn test_rows_in_billing_order() {
        let report = Report::try_new(&[record(1), record(2), record(3)], &summary(), &estimate())
            .unwrap();
        assert_eq!(report.winter_periods.iter().map(|row| row.index).collect_vec(), [0, 1, 2]);
        assert_eq!(
            report.winter_periods.iter().map(|row| row.status).collect_vec(),
            [PeriodStatus::Kept, PeriodStatus::Outlier, PeriodStatus::Kept],
        );
        assert_eq!(report.winter_periods[1].period_start_date, record(2).period_start_date);
    }

    #[test]
    fn test_missing_record() {
        assert!(Report::try_new(&[record(1)], &summary(), &estimate()).is_err());
    }

    #[test]
    fn test_serialize() {
        let report = Report::try_new(&[record(1), record(2), record(3)], &summary(), &estimate())
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["winter_periods"][1]["status"], "outlier");
        assert_eq!(value["winter_periods"][0]["period_end_date"], "2024-01-10");
        assert_eq!(value["dispersion"]["average_ua"], 5.0);
        assert_eq!(value["heat_load"]["estimated_balance_point"], 60.0);
    }
}
