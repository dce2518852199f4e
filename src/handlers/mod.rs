pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod income;
pub mod pages;
pub mod payables;
pub mod receivables;
