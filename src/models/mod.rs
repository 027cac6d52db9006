// src/models/mod.rs

pub mod question;
pub mod scan_result;
