pub mod defaults;
pub mod devices;
pub mod envvars;
