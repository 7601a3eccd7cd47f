pub mod app;
pub mod config;
pub mod constants;
pub mod form;
pub mod labels;
pub mod notice;
pub mod translate_service;
