//! API handlers for Biblio HTTP endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;
pub mod pages;
