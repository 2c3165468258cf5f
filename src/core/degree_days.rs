use crate::quantity::{degree_days::DegreeDays, temperature::Fahrenheit, time::Days};

/// Heating degree-days of a single day: how far the day's average temperature falls below the
/// balance point, or zero when the day is warmer.
#[must_use]
pub fn hdd(avg_temp: Fahrenheit, balance_point: Fahrenheit) -> DegreeDays {
    (balance_point - avg_temp).max(Fahrenheit::ZERO) * Days::ONE
}

/// Total heating degree-days of a series of daily average temperatures.
#[must_use]
pub fn period_hdd(avg_temps: &[Fahrenheit], balance_point: Fahrenheit) -> DegreeDays {
    avg_temps.iter().map(|avg_temp| hdd(*avg_temp, balance_point)).sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn temperatures(values: &[f64]) -> Vec<Fahrenheit> {
        values.iter().copied().map(Fahrenheit::from).collect()
    }

    #[test]
    fn test_hdd_below_balance_point() {
        assert_abs_diff_eq!(hdd(Fahrenheit::from(35.5), Fahrenheit::from(60.0)).0, 24.5);
    }

    #[test]
    fn test_hdd_at_or_above_balance_point() {
        assert_eq!(hdd(Fahrenheit::from(60.0), Fahrenheit::from(60.0)), DegreeDays::ZERO);
        assert_eq!(hdd(Fahrenheit::from(75.0), Fahrenheit::from(60.0)), DegreeDays::ZERO);
    }

    #[test]
    fn test_hdd_non_increasing_in_temperature() {
        let balance_point = Fahrenheit::from(62.0);
        let mut previous = hdd(Fahrenheit::from(-20.0), balance_point);
        for step in 1..200 {
            let current = hdd(Fahrenheit::from(-20.0 + f64::from(step) * 0.5), balance_point);
            assert!(current >= DegreeDays::ZERO);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_period_hdd() {
        let avg_temps = temperatures(&[50.0, 55.0, 65.0, 40.0]);
        assert_abs_diff_eq!(period_hdd(&avg_temps, Fahrenheit::from(60.0)).0, 35.0);
    }

    #[test]
    fn test_period_hdd_empty() {
        assert_eq!(period_hdd(&[], Fahrenheit::from(60.0)), DegreeDays::ZERO);
    }

    #[test]
    fn test_period_hdd_additive() {
        let head = temperatures(&[12.0, 31.5, 58.0]);
        let tail = temperatures(&[61.0, 44.25, 20.0, 5.0]);
        let joined = [head.as_slice(), tail.as_slice()].concat();
        for balance_point in [45.0, 55.0, 60.0, 65.5] {
            let balance_point = Fahrenheit::from(balance_point);
            assert_abs_diff_eq!(
                period_hdd(&joined, balance_point).0,
                (period_hdd(&head, balance_point) + period_hdd(&tail, balance_point)).0,
                epsilon = 1e-9,
            );
        }
    }
}
