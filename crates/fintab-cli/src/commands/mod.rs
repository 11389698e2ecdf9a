pub mod catalog;
pub mod extract;
pub mod pages;
