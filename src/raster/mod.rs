//! Curve preview rasterization.

/// Fixed-size RGB8 buffer.
pub mod pixels;
/// Curve sampling, auto-scaling and plotting.
pub mod rasterizer;
