//! Filesystem node backend for the engine.
//!
//! Everything above this crate talks about files through [`FsNode`] handles
//! carrying normalized slash-separated paths, so path cleanup, directory
//! listing rules and the save-directory bootstrap live in one place.

pub mod glob;
pub mod node;
pub mod path;

pub use node::{ensure_directory, FsNode, ListMode, VfsError};
