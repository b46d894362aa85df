pub mod cell;
pub mod config;
pub mod dispatch;
pub mod run;
pub mod sources;
