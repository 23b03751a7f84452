pub mod account;
pub mod audit;
pub mod contribution;
pub mod expense;
pub mod fund;
pub mod member;
