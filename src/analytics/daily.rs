use crate::models::{trade::Trade, trade_stats::DailyPl};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Per-day profit/loss totals in ascending date order.
///
/// Only trades with a realized result contribute; a day with nothing
/// realized does not appear.
pub fn daily_pl(trades: &[Trade]) -> Vec<DailyPl> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for trade in trades {
        if let Some(pl) = trade.profit_loss {
            *days.entry(trade.trade_day()).or_insert(0.0) += pl;
        }
    }

    days.into_iter()
        .map(|(day, total)| DailyPl {
            date: day.format("%Y-%m-%d").to_string(),
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_trade;
    use chrono::{TimeZone, Utc};

    #[test]
    fn buckets_by_day_in_order() {
        let mut late = test_trade("EURUSD", Some(5.0), None);
        late.trade_date = Utc.with_ymd_and_hms(2024, 3, 2, 23, 59, 0).unwrap();
        let mut early = test_trade("EURUSD", Some(-2.0), None);
        early.trade_date = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut same_day = test_trade("GBPUSD", Some(3.0), None);
        same_day.trade_date = Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap();
        let mut open = test_trade("GBPUSD", None, None);
        open.trade_date = Utc.with_ymd_and_hms(2024, 3, 5, 1, 0, 0).unwrap();

        let series = daily_pl(&[late, early, same_day, open]);

        assert_eq!(
            series,
            vec![
                DailyPl { date: "2024-03-01".to_string(), total: -2.0 },
                DailyPl { date: "2024-03-02".to_string(), total: 8.0 },
            ]
        );
    }
}
