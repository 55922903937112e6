pub mod csrf;
pub mod flash;
