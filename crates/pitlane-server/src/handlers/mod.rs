//! HTTP request handlers

pub mod health;
pub mod laptimes;
pub mod robots;
