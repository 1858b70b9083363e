//! Investment record structures matching the portfolio export format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::returns::apply_tax;

/// Length of the year used for every elapsed-time calculation
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Elapsed years between two dates (negative if `to` is before `from`)
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

/// Category of an investment. Governs which yield and return formulas apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentType {
    Stock,
    Etf,
    Bond,
    #[serde(alias = "crypto")]
    Cryptocurrency,
    MutualFund,
    RealEstate,
    Commodity,
    CheckingAccount,
    SavingsAccount,
    Certificate,
    /// Anything outside the known set gets the generic treatment
    #[serde(other)]
    Other,
}

impl InvestmentType {
    /// Parse a type string as stored by the app. Unknown strings map to `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "stock" => InvestmentType::Stock,
            "etf" => InvestmentType::Etf,
            "bond" => InvestmentType::Bond,
            "cryptocurrency" | "crypto" => InvestmentType::Cryptocurrency,
            "mutualFund" => InvestmentType::MutualFund,
            "realEstate" => InvestmentType::RealEstate,
            "commodity" => InvestmentType::Commodity,
            "checkingAccount" => InvestmentType::CheckingAccount,
            "savingsAccount" => InvestmentType::SavingsAccount,
            "certificate" => InvestmentType::Certificate,
            _ => InvestmentType::Other,
        }
    }

    /// Get the string representation used in breakdown keys
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Stock => "stock",
            InvestmentType::Etf => "etf",
            InvestmentType::Bond => "bond",
            InvestmentType::Cryptocurrency => "cryptocurrency",
            InvestmentType::MutualFund => "mutualFund",
            InvestmentType::RealEstate => "realEstate",
            InvestmentType::Commodity => "commodity",
            InvestmentType::CheckingAccount => "checkingAccount",
            InvestmentType::SavingsAccount => "savingsAccount",
            InvestmentType::Certificate => "certificate",
            InvestmentType::Other => "other",
        }
    }

    /// Equities pay dividends on current market value
    pub fn pays_dividends(&self) -> bool {
        matches!(self, InvestmentType::Stock | InvestmentType::Etf)
    }

    /// Cash-like deposit accounts
    pub fn is_cash_account(&self) -> bool {
        matches!(self, InvestmentType::CheckingAccount | InvestmentType::SavingsAccount)
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single holding as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Investment category
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    /// Units held
    pub quantity: f64,

    /// Per-unit cost at acquisition
    pub purchase_price: f64,

    /// Per-unit present value (falls back to purchase price)
    #[serde(default)]
    pub current_price: Option<f64>,

    /// Acquisition date
    pub purchase_date: NaiveDate,

    /// Maturity date (bonds only)
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,

    /// Annual coupon / interest rate in percent
    #[serde(default)]
    pub interest_rate: Option<f64>,

    /// Annual dividend yield in percent (stocks and ETFs)
    #[serde(default)]
    pub dividend_yield: Option<f64>,

    /// Tax rate in percent applied to positive gains and income
    #[serde(default)]
    pub taxation: Option<f64>,

    /// ISO currency code, carried through untouched
    #[serde(default)]
    pub currency: String,
}

impl Investment {
    /// Create a new investment with required fields
    pub fn new(
        name: impl Into<String>,
        investment_type: InvestmentType,
        quantity: f64,
        purchase_price: f64,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            investment_type,
            quantity,
            purchase_price,
            current_price: None,
            purchase_date,
            maturity_date: None,
            interest_rate: None,
            dividend_yield: None,
            taxation: None,
            currency: String::new(),
        }
    }

    pub fn with_current_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    pub fn with_maturity_date(mut self, date: NaiveDate) -> Self {
        self.maturity_date = Some(date);
        self
    }

    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    pub fn with_taxation(mut self, rate: f64) -> Self {
        self.taxation = Some(rate);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Check the record is usable. Only called at ingestion; the engine
    /// itself tolerates anything typed.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(EngineError::invalid(&self.name, format!("quantity {} must be >= 0", self.quantity)));
        }
        if !self.purchase_price.is_finite() || self.purchase_price < 0.0 {
            return Err(EngineError::invalid(
                &self.name,
                format!("purchase price {} must be >= 0", self.purchase_price),
            ));
        }
        if let Some(price) = self.current_price {
            if !price.is_finite() || price < 0.0 {
                return Err(EngineError::invalid(&self.name, format!("current price {} must be >= 0", price)));
            }
        }
        if let Some(rate) = self.taxation {
            if !(0.0..=100.0).contains(&rate) {
                return Err(EngineError::invalid(&self.name, format!("taxation {} outside [0, 100]", rate)));
            }
        }
        Ok(())
    }

    /// Resolve every optional field once. All formulas work on the result.
    pub fn resolved(&self) -> ResolvedInvestment {
        ResolvedInvestment {
            kind: self.investment_type,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            current_price: self.current_price.unwrap_or(self.purchase_price),
            purchase_date: self.purchase_date,
            maturity_date: self.maturity_date,
            // A stored zero rate behaves exactly like a missing one
            coupon_rate: self.interest_rate.filter(|rate| *rate > 0.0),
            dividend_yield: self.dividend_yield.filter(|y| *y > 0.0),
            tax_rate: self.taxation.unwrap_or(0.0),
        }
    }
}

/// An investment with every fallback applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInvestment {
    pub kind: InvestmentType,
    pub quantity: f64,
    pub purchase_price: f64,
    /// `current_price`, or `purchase_price` when none was quoted
    pub current_price: f64,
    pub purchase_date: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    /// Annual interest in percent, present only when > 0
    pub coupon_rate: Option<f64>,
    /// Annual dividend yield in percent, present only when > 0
    pub dividend_yield: Option<f64>,
    /// Tax rate in percent, 0 when not set
    pub tax_rate: f64,
}

impl ResolvedInvestment {
    /// Amount paid for the position
    pub fn invested_value(&self) -> f64 {
        self.quantity * self.purchase_price
    }

    /// Market value of the position
    pub fn current_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    /// Positions without a cost basis produce no metrics at all
    pub fn is_unfunded(&self) -> bool {
        self.quantity == 0.0 || self.purchase_price == 0.0 || self.invested_value() <= 0.0
    }

    /// Days since purchase (negative for future-dated purchases)
    pub fn days_held(&self, as_of: NaiveDate) -> i64 {
        (as_of - self.purchase_date).num_days()
    }

    /// Years since purchase, never negative
    pub fn years_held(&self, as_of: NaiveDate) -> f64 {
        years_between(self.purchase_date, as_of).max(0.0)
    }

    /// Bond without coupon that redeems at a known date
    pub fn is_zero_coupon_bond(&self) -> bool {
        self.kind == InvestmentType::Bond && self.coupon_rate.is_none() && self.maturity_date.is_some()
    }

    /// Days until a bond matures (negative once matured)
    pub fn days_to_maturity(&self, as_of: NaiveDate) -> Option<i64> {
        if self.kind != InvestmentType::Bond {
            return None;
        }
        self.maturity_date.map(|maturity| (maturity - as_of).num_days())
    }

    /// Years until a bond matures
    pub fn years_to_maturity(&self, as_of: NaiveDate) -> Option<f64> {
        if self.kind != InvestmentType::Bond {
            return None;
        }
        self.maturity_date.map(|maturity| years_between(as_of, maturity))
    }

    /// Full bond term from purchase to maturity
    pub fn bond_term_years(&self) -> Option<f64> {
        self.maturity_date.map(|maturity| years_between(self.purchase_date, maturity))
    }

    /// Deduct this investment's tax from a positive amount
    pub fn after_tax(&self, amount: f64) -> f64 {
        apply_tax(amount, self.tax_rate)
    }
}
