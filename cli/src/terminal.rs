pub mod listener;
pub mod logging;
pub mod print;
