//! Stream aliases shared by the archive and savefile layers.

use std::io::{Read, Seek};

/// A readable, seekable byte stream.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek + ?Sized> ReadSeek for T {}

pub type SeekableReadStream = Box<dyn ReadSeek>;
