#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use chrono::NaiveDate;

    use crate::models::{CostBasisState, Trade, TradeType};

    #[test]
    fn empty_state_has_zero_average() {
        let state = CostBasisState::default();

        assert_eq!(state.average_cost(), Decimal::ZERO);
        assert_eq!(state.unrealized_pnl(dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn partial_sells_shrink_cost_proportionally() {
        let mut state = CostBasisState::default();
        state.buy(dec!(4), dec!(25));
        state.sell(dec!(1));
        state.sell(dec!(1));

        assert_eq!(*state.quantity(), dec!(2));
        assert_eq!(*state.total_cost(), dec!(50));
        assert_eq!(state.average_cost(), dec!(25));
        assert_eq!(state.cost_basis(), dec!(50));
        assert_eq!(state.market_value(dec!(40)), dec!(80));
        assert_eq!(state.unrealized_pnl(dec!(40)), dec!(30));
    }

    #[test]
    fn sell_price_does_not_move_cost() {
        let mut cheap = CostBasisState::new(dec!(300), dec!(3));
        let mut dear = cheap;
        cheap.sell(dec!(1));
        dear.sell(dec!(1));

        assert_eq!(cheap, dear);
        assert_eq!(cheap.average_cost(), dec!(100));
    }

    #[test]
    fn buy_after_close_starts_fresh_average() {
        let mut state = CostBasisState::default();
        state.buy(dec!(1), dec!(10));
        state.sell(dec!(1));
        state.buy(dec!(2), dec!(40));

        assert_eq!(state.average_cost(), dec!(40));
    }

    #[test]
    fn checked_apply_matches_apply() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let trades = [
            Trade::new(date, String::from("BTC"), TradeType::Buy, dec!(0.5), dec!(30000)),
            Trade::new(date, String::from("BTC"), TradeType::Buy, dec!(0.25), dec!(42000)),
            Trade::new(date, String::from("BTC"), TradeType::Sell, dec!(0.3), dec!(50000)),
        ];

        let mut state = CostBasisState::default();
        let mut checked = CostBasisState::default();
        for trade in &trades {
            state.apply(trade);
            checked = checked.checked_apply(trade).unwrap();
        }

        assert_eq!(state, checked);
        assert_eq!(
            checked.checked_unrealized_pnl(dec!(36000)),
            Some(state.unrealized_pnl(dec!(36000)))
        );
    }

    #[test]
    fn checked_apply_reports_overflow() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let trade = Trade::new(
            date,
            String::from("BTC"),
            TradeType::Buy,
            Decimal::MAX,
            dec!(2),
        );

        assert_eq!(CostBasisState::default().checked_apply(&trade), None);
        assert_eq!(
            CostBasisState::new(Decimal::ZERO, Decimal::MAX).checked_unrealized_pnl(dec!(2)),
            None
        );
    }
}
