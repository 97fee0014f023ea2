//! 유스케이스 계약 모듈

pub mod add_account;

pub use add_account::{AddAccount, AddAccountModel};
