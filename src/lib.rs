pub mod cancel;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod server;
pub mod typewriter;
pub mod ui;
