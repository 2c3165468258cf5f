use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a billing period takes part in the estimation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Winter: the usage is dominated by heating.
    Include,

    /// Summer: the usage is assumed to be non-heating.
    DoNotInclude,

    /// Shoulder season: ambiguous, left to other analyses.
    IncludeInOtherAnalysis,
}

/// Season by month, starting from January.
const BY_MONTH: [AnalysisType; 12] = [
    AnalysisType::Include,
    AnalysisType::Include,
    AnalysisType::Include,
    AnalysisType::DoNotInclude,
    AnalysisType::DoNotInclude,
    AnalysisType::DoNotInclude,
    AnalysisType::IncludeInOtherAnalysis,
    AnalysisType::IncludeInOtherAnalysis,
    AnalysisType::IncludeInOtherAnalysis,
    AnalysisType::DoNotInclude,
    AnalysisType::DoNotInclude,
    AnalysisType::Include,
];

impl AnalysisType {
    /// Classify a billing period by the month of its end date.
    #[must_use]
    pub fn of_period_ending(end_date: NaiveDate) -> Self {
        // `month0()` is always below 12:
        BY_MONTH[end_date.month0() as usize]
    }

    /// Classify a billing period, letting an explicit override win.
    #[must_use]
    pub fn resolve(end_date: NaiveDate, inclusion_override: Option<Self>) -> Self {
        inclusion_override.unwrap_or_else(|| Self::of_period_ending(end_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_of(month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, month, 15).unwrap()
    }

    #[test]
    fn test_of_period_ending() {
        for month in [12, 1, 2, 3] {
            assert_eq!(AnalysisType::of_period_ending(end_of(month)), AnalysisType::Include);
        }
        for month in [4, 5, 6, 10, 11] {
            assert_eq!(AnalysisType::of_period_ending(end_of(month)), AnalysisType::DoNotInclude);
        }
        for month in [7, 8, 9] {
            assert_eq!(
                AnalysisType::of_period_ending(end_of(month)),
                AnalysisType::IncludeInOtherAnalysis,
            );
        }
    }

    #[test]
    fn test_resolve_override() {
        assert_eq!(
            AnalysisType::resolve(end_of(1), Some(AnalysisType::DoNotInclude)),
            AnalysisType::DoNotInclude,
        );
        assert_eq!(AnalysisType::resolve(end_of(8), None), AnalysisType::IncludeInOtherAnalysis);
    }

    #[test]
    fn test_deserialize() {
        let analysis_type: AnalysisType =
            serde_json::from_str(r#""include_in_other_analysis""#).unwrap();
        assert_eq!(analysis_type, AnalysisType::IncludeInOtherAnalysis);
    }
}
