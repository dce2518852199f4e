pub mod login;
pub mod logout;
pub mod register;
pub mod session;

pub use login::login;
pub use logout::logout;
pub use register::register;
pub use session::session;
