pub mod health;
pub mod questions;
pub mod survey;
