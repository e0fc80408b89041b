//! Uploads directory bootstrap plus the error view and theme served by the
//! lanister host.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod theme;

pub use bootstrap::{ensure_uploads_dir, ensure_uploads_dir_in_cwd, BootstrapError, BootstrapReport};
pub use components::{render_error, render_error_page, ErrorDisplay};
pub use theme::{Animation, ThemeConfig, ThemeError};
