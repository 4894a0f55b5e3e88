pub mod field;
pub mod health;
pub mod index;
pub mod rankings;
pub mod schedule;
