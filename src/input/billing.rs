use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    core::{analysis_type::AnalysisType, billing_period::BillingPeriod},
    input::temperature::TemperatureSeries,
    prelude::*,
    quantity::temperature::Fahrenheit,
};

/// Billing record in the fuel's billing units, regardless of the fuel.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct NormalizedBillingRecord {
    pub period_start_date: NaiveDate,

    /// Last day of the period, included.
    pub period_end_date: NaiveDate,

    pub usage: f64,

    #[serde(default)]
    pub inclusion_override: Option<AnalysisType>,
}

impl NormalizedBillingRecord {
    #[must_use]
    pub fn analysis_type(&self) -> AnalysisType {
        AnalysisType::resolve(self.period_end_date, self.inclusion_override)
    }
}

/// Converts fuel-specific billing into normalized records.
pub trait NormalizeBilling {
    fn normalize(&self) -> Result<Vec<NormalizedBillingRecord>>;
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillingInput {
    Normalized(NormalizedBilling),
    NaturalGas(NaturalGasBilling),
    OilPropane(OilPropaneBilling),
}

impl NormalizeBilling for BillingInput {
    fn normalize(&self) -> Result<Vec<NormalizedBillingRecord>> {
        match self {
            Self::Normalized(billing) => billing.normalize(),
            Self::NaturalGas(billing) => billing.normalize(),
            Self::OilPropane(billing) => billing.normalize(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NormalizedBilling {
    pub records: Vec<NormalizedBillingRecord>,
}

impl NormalizeBilling for NormalizedBilling {
    fn normalize(&self) -> Result<Vec<NormalizedBillingRecord>> {
        for record in &self.records {
            ensure!(
                record.period_start_date <= record.period_end_date,
                "billing period ends on {} before it starts on {}",
                record.period_end_date,
                record.period_start_date,
            );
        }
        Ok(self.records.clone())
    }
}

/// Metered natural gas bills.
#[derive(Clone, Debug, Deserialize)]
pub struct NaturalGasBilling {
    pub records: Vec<NaturalGasBillingRecord>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct NaturalGasBillingRecord {
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
    pub usage_therms: f64,

    #[serde(default)]
    pub inclusion_override: Option<AnalysisType>,
}

impl NormalizeBilling for NaturalGasBilling {
    fn normalize(&self) -> Result<Vec<NormalizedBillingRecord>> {
        NormalizedBilling {
            records: self
                .records
                .iter()
                .map(|record| NormalizedBillingRecord {
                    period_start_date: record.period_start_date,
                    period_end_date: record.period_end_date,
                    usage: record.usage_therms,
                    inclusion_override: record.inclusion_override,
                })
                .collect(),
        }
        .normalize()
    }
}

/// Oil or propane deliveries: each delivery covers the days since the previous one.
#[derive(Clone, Debug, Deserialize)]
pub struct OilPropaneBilling {
    /// Delivery which precedes the first one in the list.
    pub preceding_delivery_date: NaiveDate,

    pub records: Vec<OilPropaneDelivery>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct OilPropaneDelivery {
    /// Delivery date.
    pub period_end_date: NaiveDate,

    pub gallons: f64,

    #[serde(default)]
    pub inclusion_override: Option<AnalysisType>,
}

impl NormalizeBilling for OilPropaneBilling {
    fn normalize(&self) -> Result<Vec<NormalizedBillingRecord>> {
        let mut previous_delivery_date = self.preceding_delivery_date;
        let mut records = Vec::with_capacity(self.records.len());
        for delivery in &self.records {
            ensure!(
                delivery.period_end_date > previous_delivery_date,
                "delivery on {} does not follow the one on {}",
                delivery.period_end_date,
                previous_delivery_date,
            );
            let period_start_date = previous_delivery_date
                .succ_opt()
                .with_context(|| format!("no day after {previous_delivery_date}"))?;
            records.push(NormalizedBillingRecord {
                period_start_date,
                period_end_date: delivery.period_end_date,
                usage: delivery.gallons,
                inclusion_override: delivery.inclusion_override,
            });
            previous_delivery_date = delivery.period_end_date;
        }
        Ok(records)
    }
}

/// Attach the daily temperatures to the billing records.
pub fn build_billing_periods(
    records: &[NormalizedBillingRecord],
    temperatures: &TemperatureSeries,
    balance_point: Fahrenheit,
) -> Result<Vec<BillingPeriod>> {
    records
        .iter()
        .map(|record| {
            let avg_temps = temperatures
                .between(record.period_start_date, record.period_end_date)
                .collect();
            BillingPeriod::try_new(avg_temps, record.usage, balance_point, record.analysis_type())
                .with_context(|| {
                    format!(
                        "failed to build the billing period {}…{}",
                        record.period_start_date, record.period_end_date,
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::Datelike;
    use itertools::Itertools;

    use super::*;
    use crate::input::temperature::DailyTemperature;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_natural_gas() {
        let billing = NaturalGasBilling {
            records: vec![NaturalGasBillingRecord {
                period_start_date: date(1, 1),
                period_end_date: date(1, 31),
                usage_therms: 120.0,
                inclusion_override: Some(AnalysisType::DoNotInclude),
            }],
        };
        assert_eq!(
            billing.normalize().unwrap(),
            [NormalizedBillingRecord {
                period_start_date: date(1, 1),
                period_end_date: date(1, 31),
                usage: 120.0,
                inclusion_override: Some(AnalysisType::DoNotInclude),
            }],
        );
    }

    #[test]
    fn test_reversed_period() {
        let billing = NormalizedBilling {
            records: vec![NormalizedBillingRecord {
                period_start_date: date(2, 1),
                period_end_date: date(1, 1),
                usage: 1.0,
                inclusion_override: None,
            }],
        };
        assert!(billing.normalize().is_err());
    }

    #[test]
    fn test_oil_propane_deliveries() {
        let billing = OilPropaneBilling {
            preceding_delivery_date: date(11, 30),
            records: vec![
                OilPropaneDelivery {
                    period_end_date: date(12, 31),
                    gallons: 150.0,
                    inclusion_override: None,
                },
                OilPropaneDelivery {
                    period_end_date: date(2, 28).with_year(2025).unwrap(),
                    gallons: 200.0,
                    inclusion_override: None,
                },
            ],
        };
        let records = billing.normalize().unwrap();
        assert_eq!(
            records.iter().map(|record| record.period_start_date).collect_vec(),
            [date(12, 1), date(1, 1).with_year(2025).unwrap()],
        );
        assert_eq!(records[1].period_end_date, date(2, 28).with_year(2025).unwrap());
        assert_abs_diff_eq!(records[1].usage, 200.0);
    }

    #[test]
    fn test_oil_propane_out_of_order() {
        let billing = OilPropaneBilling {
            preceding_delivery_date: date(3, 1),
            records: vec![OilPropaneDelivery {
                period_end_date: date(3, 1),
                gallons: 10.0,
                inclusion_override: None,
            }],
        };
        assert!(billing.normalize().is_err());
    }

    #[test]
    fn test_analysis_type() {
        let record = NormalizedBillingRecord {
            period_start_date: date(1, 1),
            period_end_date: date(1, 31),
            usage: 1.0,
            inclusion_override: None,
        };
        assert_eq!(record.analysis_type(), AnalysisType::Include);
        let record = NormalizedBillingRecord {
            inclusion_override: Some(AnalysisType::IncludeInOtherAnalysis),
            ..record
        };
        assert_eq!(record.analysis_type(), AnalysisType::IncludeInOtherAnalysis);
    }

    #[test]
    fn test_build_billing_periods() {
        let temperatures: TemperatureSeries = (1..=31)
            .map(|day| DailyTemperature {
                date: date(1, day),
                temperature: Fahrenheit::from(50.0),
            })
            .collect();
        let records = [
            NormalizedBillingRecord {
                period_start_date: date(1, 1),
                period_end_date: date(1, 10),
                usage: 30.0,
                inclusion_override: None,
            },
            NormalizedBillingRecord {
                period_start_date: date(1, 11),
                period_end_date: date(1, 31),
                usage: 60.0,
                inclusion_override: None,
            },
        ];
        let periods =
            build_billing_periods(&records, &temperatures, Fahrenheit::from(60.0)).unwrap();
        assert_eq!(periods.iter().map(BillingPeriod::days).collect_vec(), [10, 21]);
        assert_abs_diff_eq!(periods[0].total_hdd().0, 100.0);
        assert_eq!(periods[1].analysis_type, AnalysisType::Include);
    }

    #[test]
    fn test_build_billing_periods_without_temperatures() {
        let records = [NormalizedBillingRecord {
            period_start_date: date(1, 1),
            period_end_date: date(1, 10),
            usage: 30.0,
            inclusion_override: None,
        }];
        let error =
            build_billing_periods(&records, &TemperatureSeries::default(), Fahrenheit::from(60.0))
                .unwrap_err();
        assert!(error.to_string().contains("2024-01-01"));
    }

    #[test]
    fn test_deserialize_tagged() {
        let billing: BillingInput = serde_json::from_str(
            r#"{
                "kind": "oil_propane",
                "preceding_delivery_date": "2024-11-30",
                "records": [{"period_end_date": "2024-12-31", "gallons": 150}]
            }"#,
        )
        .unwrap();
        let records = billing.normalize().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].period_start_date, date(12, 1));
    }
}
