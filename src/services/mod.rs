// Module exports for services

pub mod dataset;
pub mod layout;
pub mod palette;
pub mod schedule;
pub mod time_grid;
