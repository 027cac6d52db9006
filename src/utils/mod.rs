// src/utils/mod.rs

pub mod fallback;
