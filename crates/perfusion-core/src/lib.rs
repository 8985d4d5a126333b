pub mod analysis;
pub mod config;
pub mod consts;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod io;
pub mod mask;
pub mod render;
pub mod stats;
