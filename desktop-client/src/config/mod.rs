mod client_config;

pub use client_config::{ClientConfig, get_config_store, get_theme_store};
