pub mod app;
pub mod components;
pub mod config;
pub mod dialog;
pub mod gateway;
pub mod models;
pub mod pages;
