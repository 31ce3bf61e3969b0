pub mod health;
pub mod invoices_web;
pub mod pages;
