#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::{CommandFactory, Parser};
    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use crate::app::{Config, InvariantPolicy};

    fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["portfolio-dashboard"]).unwrap();

        assert_eq!(config.policy, InvariantPolicy::Tolerate);
        assert!(!config.plain);
        assert!(config.trades.is_none());
    }

    #[test]
    fn parses_policy_and_balance() {
        let config = Config::try_parse_from([
            "portfolio-dashboard",
            "--policy",
            "reject",
            "--starting-balance",
            "2500.50",
            "--plain",
        ])
        .unwrap();

        assert_eq!(config.policy, InvariantPolicy::Reject);
        assert_eq!(config.starting_balance, Some(dec!(2500.50)));
        assert!(config.plain);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Config::try_parse_from(["portfolio-dashboard", "--policy", "ignore"]).is_err());
    }

    #[test]
    fn csv_files_without_portfolio_file() {
        let trades = write_temp(
            "date,type,asset,quantity,price\n2025-03-01,buy,BTC,1,30000\n",
            ".csv",
        );
        let prices = write_temp("asset,price\nBTC,31000\n", ".csv");

        let config = Config::try_parse_from([
            "portfolio-dashboard",
            "--trades",
            trades.path().to_str().unwrap(),
            "--prices",
            prices.path().to_str().unwrap(),
            "--starting-balance",
            "5000",
        ])
        .unwrap();
        let data = config.load_data().unwrap();

        assert_eq!(data.trades().len(), 1);
        assert_eq!(data.current_prices()["BTC"], dec!(31000));
        assert_eq!(*data.starting_balance(), dec!(5000));
    }

    #[test]
    fn csv_prices_override_portfolio_file() {
        let portfolio = write_temp(
            r#"{"starting_balance": 100, "trades": [], "current_prices": {"BTC": 1}}"#,
            ".json",
        );
        let prices = write_temp("asset,price\nETH,3400\n", ".csv");

        let config = Config::try_parse_from([
            "portfolio-dashboard",
            "--portfolio",
            portfolio.path().to_str().unwrap(),
            "--prices",
            prices.path().to_str().unwrap(),
        ])
        .unwrap();
        let data = config.load_data().unwrap();

        assert_eq!(*data.starting_balance(), dec!(100));
        assert!(!data.current_prices().contains_key("BTC"));
        assert_eq!(data.current_prices()["ETH"], dec!(3400));
    }

    #[test]
    fn every_option_has_help() {
        let help = Config::command().render_long_help().to_string();

        assert!(help.contains("Starting balance shown on the dashboard"));
        assert!(help.contains("plain-text report"));
    }
}
