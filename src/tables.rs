use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{analysis_type::AnalysisType, summary::HeatLoadSummary},
    report::{PeriodStatus, WinterPeriodRow},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_winter_periods_table(rows: &[WinterPeriodRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "#",
        "Start",
        "End",
        "Days",
        "Usage",
        "HDD",
        "Partial UA",
        "UA",
        "Status",
    ]);
    for row in rows {
        let status_color = match row.status {
            PeriodStatus::Kept => Color::Green,
            PeriodStatus::Outlier => Color::Red,
        };
        table.add_row(vec![
            Cell::new(row.index).add_attribute(Attribute::Dim),
            Cell::new(row.period_start_date),
            Cell::new(row.period_end_date),
            Cell::new(row.days).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", row.usage)).set_alignment(CellAlignment::Right),
            Cell::new(row.total_hdd).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", row.partial_ua)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", row.ua)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:?}", row.status)).fg(status_color),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(summary: &HeatLoadSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    let rows = [
        ("Balance point", summary.estimated_balance_point.to_string()),
        ("Other fuel usage", format!("{:.3} /day", summary.other_fuel_usage)),
        ("Average indoor temperature", summary.average_indoor_temperature.to_string()),
        ("Indoor minus balance point", summary.difference_between_ti_and_tbp.to_string()),
        ("Design temperature", summary.design_temperature.to_string()),
        ("Heat loss rate (UA)", format!("{:.1} BTU/h·°F", summary.whole_home_heat_loss_rate)),
        (
            "UA deviation",
            format!("{:.1} %", summary.standard_deviation_of_heat_loss_rate * 100.0),
        ),
        ("Average heat load", format!("{:.0} BTU/h", summary.average_heat_load)),
        ("Maximum heat load", format!("{:.0} BTU/h", summary.maximum_heat_load)),
    ];
    for (metric, value) in rows {
        table.add_row(vec![
            Cell::new(metric),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_classification_table(dates: &[NaiveDate]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period end", "Analysis"]);
    for date in dates {
        let analysis_type = AnalysisType::of_period_ending(*date);
        table.add_row(vec![
            Cell::new(date),
            Cell::new(format!("{analysis_type:?}")).fg(match analysis_type {
                AnalysisType::Include => Color::Blue,
                AnalysisType::DoNotInclude => Color::DarkYellow,
                AnalysisType::IncludeInOtherAnalysis => Color::Reset,
            }),
        ]);
    }
    table
}
