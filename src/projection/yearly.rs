//! Roll monthly points up into calendar years

use super::points::{LifeMonthlyPoint, LifeYearlyPoint};
use chrono::Datelike;
use std::collections::BTreeMap;

/// One row per calendar year, ascending. Net worth, real net worth and age
/// come from the last month of the year; income, expenses, contribution and
/// returns are summed.
pub fn aggregate_yearly(monthly: &[LifeMonthlyPoint]) -> Vec<LifeYearlyPoint> {
    let mut by_year: BTreeMap<i32, LifeYearlyPoint> = BTreeMap::new();

    for point in monthly {
        let year = point.date.year();
        by_year
            .entry(year)
            .and_modify(|row| {
                row.net_worth = point.net_worth;
                row.real_net_worth = point.real_net_worth;
                row.age = point.age;
                row.income += point.income;
                row.expenses += point.expenses;
                row.contribution += point.contribution;
                row.returns += point.returns;
            })
            .or_insert_with(|| LifeYearlyPoint {
                year,
                age: point.age,
                net_worth: point.net_worth,
                real_net_worth: point.real_net_worth,
                income: point.income,
                expenses: point.expenses,
                contribution: point.contribution,
                returns: point.returns,
            });
    }

    by_year.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(year: i32, month: u32, net_worth: f64, income: f64) -> LifeMonthlyPoint {
        LifeMonthlyPoint {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            age: year - 1990 - if month < 6 { 1 } else { 0 },
            net_worth,
            real_net_worth: net_worth / 2.0,
            income,
            expenses: 10.0,
            contribution: income - 10.0,
            returns: 0.5,
        }
    }

    #[test]
    fn test_empty() {
        assert!(aggregate_yearly(&[]).is_empty());
    }

    #[test]
    fn test_partial_first_year_and_stock_flow_split() {
        let monthly = vec![
            point(2024, 11, 100.0, 50.0),
            point(2024, 12, 110.0, 60.0),
            point(2025, 1, 120.0, 70.0),
            point(2025, 6, 90.0, 80.0),
            point(2025, 12, 95.0, 90.0),
        ];

        let yearly = aggregate_yearly(&monthly);
        assert_eq!(yearly.len(), 2);

        assert_eq!(yearly[0].year, 2024);
        assert_eq!(yearly[0].net_worth, 110.0);
        assert_eq!(yearly[0].real_net_worth, 55.0);
        assert_eq!(yearly[0].income, 110.0);
        assert_eq!(yearly[0].expenses, 20.0);
        assert_eq!(yearly[0].contribution, 90.0);
        assert_eq!(yearly[0].returns, 1.0);

        assert_eq!(yearly[1].year, 2025);
        assert_eq!(yearly[1].net_worth, 95.0);
        assert_eq!(yearly[1].age, 35);
        assert_eq!(yearly[1].income, 240.0);
        assert_eq!(yearly[1].returns, 1.5);
    }

    #[test]
    fn test_single_month_year_is_copied() {
        let monthly = vec![point(2030, 1, -5.0, 0.0)];
        let yearly = aggregate_yearly(&monthly);
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].net_worth, -5.0);
        assert_eq!(yearly[0].age, 39);
        assert_eq!(yearly[0].contribution, -10.0);
    }
}
