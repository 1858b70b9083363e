//! Investment records and their normalized view

mod data;
pub mod loader;

pub use data::{years_between, Investment, InvestmentType, ResolvedInvestment, DAYS_PER_YEAR};
pub use loader::{
    load_investments, load_investments_from_path, load_investments_from_reader, load_investments_json,
    load_investments_json_from_reader,
};
