// Domain layer - Core catalog model and merge policies

pub mod catalog;
pub mod errors;
pub mod model;
pub mod rules;
