pub mod rsc;

pub use rsc::{RscArchive, RscEntry};
