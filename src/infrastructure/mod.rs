pub mod logging;
pub mod sms;
pub mod storage;
