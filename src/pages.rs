//! Page generation modules
//!
//! The tool emits a single page; its generator composes the shared
//! components into the final document.

pub mod issues;
