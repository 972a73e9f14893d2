pub mod argsets;
pub mod battery;
pub mod command;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod output;
