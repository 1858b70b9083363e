//! Load investment records from CSV or JSON exports

use super::{Investment, InvestmentType};
use crate::error::EngineError;
use chrono::NaiveDate;
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row matching the portfolio export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    investment_type: String,
    quantity: f64,
    purchase_price: f64,
    current_price: Option<f64>,
    purchase_date: String,
    maturity_date: Option<String>,
    interest_rate: Option<f64>,
    dividend_yield: Option<f64>,
    taxation: Option<f64>,
    #[serde(default)]
    currency: String,
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl CsvRow {
    fn to_investment(self) -> Result<Investment, EngineError> {
        let purchase_date = parse_date("purchase_date", &self.purchase_date)?;
        let maturity_date = match self.maturity_date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Some(parse_date("maturity_date", value)?),
            _ => None,
        };

        Ok(Investment {
            name: self.name,
            investment_type: InvestmentType::parse(self.investment_type.trim()),
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            current_price: self.current_price,
            purchase_date,
            maturity_date,
            interest_rate: self.interest_rate,
            dividend_yield: self.dividend_yield,
            taxation: self.taxation,
            currency: self.currency,
        })
    }
}

/// Load all investments from a CSV file
pub fn load_investments<P: AsRef<Path>>(path: P) -> Result<Vec<Investment>, EngineError> {
    let file = File::open(path)?;
    load_investments_from_reader(file)
}

/// Load investments from any CSV reader (e.g., string buffer, network stream)
pub fn load_investments_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Investment>, EngineError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut investments = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let investment = row.to_investment()?;
        investment.validate()?;
        investments.push(investment);
    }

    log::debug!("Loaded {} investments from CSV", investments.len());
    Ok(investments)
}

/// Load investments from a JSON file holding an array of records
pub fn load_investments_json<P: AsRef<Path>>(path: P) -> Result<Vec<Investment>, EngineError> {
    let file = File::open(path)?;
    load_investments_json_from_reader(BufReader::new(file))
}

/// Load investments from any reader producing a JSON array
pub fn load_investments_json_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Investment>, EngineError> {
    let investments: Vec<Investment> = serde_json::from_reader(reader)?;
    for investment in &investments {
        investment.validate()?;
    }

    log::debug!("Loaded {} investments from JSON", investments.len());
    Ok(investments)
}

/// Load investments from a file, choosing JSON for `.json` files and CSV otherwise
pub fn load_investments_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Investment>, EngineError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_investments_json(path)
    } else {
        load_investments(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
name,type,quantity,purchase_price,current_price,purchase_date,maturity_date,interest_rate,dividend_yield,taxation,currency
ACME,stock,10,100,150,2022-06-01,,,2,26,EUR
Treasury,bond,1,1000,,2023-01-15,2028-01-15,5,,,USD
Coin,crypto,0.5,20000,30000,2024-03-01,,,,,USD
";

    #[test]
    fn test_load_investments_csv() {
        let investments = load_investments_from_reader(CSV.as_bytes()).expect("Failed to load investments");
        assert_eq!(investments.len(), 3);

        let stock = &investments[0];
        assert_eq!(stock.investment_type, InvestmentType::Stock);
        assert_eq!(stock.current_price, Some(150.0));
        assert_eq!(stock.dividend_yield, Some(2.0));
        assert_eq!(stock.taxation, Some(26.0));
        assert_eq!(stock.maturity_date, None);

        let bond = &investments[1];
        assert_eq!(bond.current_price, None);
        assert_eq!(bond.interest_rate, Some(5.0));
        assert_eq!(bond.maturity_date, NaiveDate::from_ymd_opt(2028, 1, 15));

        assert_eq!(investments[2].investment_type, InvestmentType::Cryptocurrency);
    }

    #[test]
    fn test_bad_date_rejected() {
        let csv = "\
name,type,quantity,purchase_price,current_price,purchase_date,maturity_date,interest_rate,dividend_yield,taxation,currency
ACME,stock,10,100,150,01/06/2022,,,,,EUR
";
        let err = load_investments_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDate { field: "purchase_date", .. }));
    }

    #[test]
    fn test_load_investments_json() {
        let json = r#"[
            {"name": "Fund", "type": "mutualFund", "quantity": 3, "purchase_price": 50.0,
             "purchase_date": "2021-09-30", "taxation": 15},
            {"name": "Gold", "type": "commodity", "quantity": 2, "purchase_price": 1800.0,
             "current_price": 2300.0, "purchase_date": "2020-02-01", "currency": "USD"}
        ]"#;
        let investments = load_investments_json_from_reader(json.as_bytes()).unwrap();
        assert_eq!(investments.len(), 2);
        assert_eq!(investments[0].investment_type, InvestmentType::MutualFund);
        assert_eq!(investments[0].current_price, None);
        assert_eq!(investments[1].currency, "USD");
    }

    #[test]
    fn test_invalid_taxation_rejected() {
        let json = r#"[{"type": "stock", "quantity": 1, "purchase_price": 10,
                        "purchase_date": "2024-01-01", "taxation": 150}]"#;
        let err = load_investments_json_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInvestment { .. }));
    }
}
