// Service module exports

pub mod countdown;
pub mod date_source;
pub mod settings;
