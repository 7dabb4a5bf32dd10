pub mod catalog;
pub mod chat;
pub mod cli;
pub mod compare;
pub mod config;
pub mod dealers;
pub mod finance;
pub mod output;
pub mod ranking;
pub mod reviews;
pub mod scoring;
pub mod store;
