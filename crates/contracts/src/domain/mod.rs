pub mod a001_user;
pub mod a002_company;
pub mod a003_purchase;
pub mod a004_shortage;
pub mod common;
