pub mod application;
pub mod config;
pub mod context;
pub mod debug;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod run;
pub mod shaders;
pub mod triangle;
