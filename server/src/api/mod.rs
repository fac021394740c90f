pub mod health;
pub mod info;
pub mod not_found;
