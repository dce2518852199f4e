pub mod expense;
pub mod income;
pub mod payable;
pub mod receivable;
pub mod user;

pub use expense::Expense;
pub use income::Income;
pub use payable::Payable;
pub use receivable::Receivable;
pub use user::User;
