//! Mus.Link web client: artist subdomains, theme and language
//! preferences, page analytics, account settings and the FAQ.

pub mod analytics;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod faq;
pub mod i18n;
pub mod pages;
pub mod route;
pub mod services;
pub mod session;
pub mod settings;
pub mod storage;
pub mod subdomain;
pub mod theme;
pub mod toast;

pub use app::{App, AppProps};
