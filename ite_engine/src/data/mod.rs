//! Static game data compiled into the engine.
//!
//! Scripts address these tables by row position, so the row order is part of
//! the game's contract and must never change. The string sets are grouped by
//! language; lookups fall back to English for languages without a shipped
//! translation.

pub mod actors;
pub mod objects;
pub mod puzzle;
pub mod sfx;
pub mod strings;

pub use actors::{ActorTableData, ACTOR_COUNT, ACTOR_TABLE};
pub use objects::{ObjectTableData, OBJECT_COUNT, OBJECT_TABLE};
pub use puzzle::{puzzle_strings, PuzzleStrings, PIECE_ORIGINS, PUZZLE_PIECES};
pub use sfx::{FxTableData, SFX_COUNT, SFX_TABLE};
pub use strings::{interface_strings, interface_text, UiString, INTERFACE_STRING_COUNT};
