pub mod activate;
pub mod config;
pub mod deactivate;
pub mod dir;
pub mod list;
pub mod new;
pub mod remove;
pub mod run;
