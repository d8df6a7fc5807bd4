pub mod browser;
pub mod fixture;
pub mod session;
pub mod store;
