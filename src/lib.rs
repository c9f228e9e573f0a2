pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod ui;
