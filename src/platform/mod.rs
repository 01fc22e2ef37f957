//! Platform abstraction layer
//!
//! Surface implementations for the hosts the toy runs on:
//! - `canvas`: 2D canvas context in the browser (wasm)
//! - `headless`: no-op surface for native smoke runs and tests

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use headless::NullSurface;
