// src/ui/mod.rs
pub mod form;
pub mod result;
