// src/handlers/mod.rs

pub mod country;
pub mod quiz;
pub mod scan;
