//! Sound effect table: resource number and playback volume per effect.
//!
//! Several effects appear twice with different volumes; the CD release
//! rebalanced them against the floppy mix, and both rows survive because
//! scripts index the table directly.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FxTableData {
    pub resource: u32,
    pub volume: u8,
}

const fn sfx(resource: u32, volume: u8) -> FxTableData {
    FxTableData { resource, volume }
}

pub const SFX_COUNT: usize = 63;

pub const SFX_TABLE: [FxTableData; SFX_COUNT] = [
    sfx(14, 127), // Door open
    sfx(15, 127), // Door close
    sfx(16, 63), // Rush water (floppy volume: 127)
    sfx(16, 26), // Rush water (floppy volume: 40)
    sfx(17, 64), // Cricket
    sfx(18, 84), // Porticullis (floppy volume: 127)
    sfx(19, 64), // Clock 1
    sfx(20, 64), // Clock 2
    sfx(21, 64), // Dam machine
    sfx(21, 40), // Dam machine
    sfx(22, 64), // Hum 1
    sfx(23, 64), // Hum 2
    sfx(24, 64), // Hum 3
    sfx(25, 64), // Hum 4
    sfx(26, 32), // Stream
    sfx(27, 42), // Surf (floppy volume: 127)
    sfx(27, 32), // Surf (floppy volume: 64)
    sfx(28, 64), // Fire loop (floppy volume: 96)
    sfx(29, 84), // Scraping (floppy volume: 127)
    sfx(30, 64), // Bee swarm (floppy volume: 96)
    sfx(30, 26), // Bee swarm (floppy volume: 40)
    sfx(31, 64), // Squeaky board
    sfx(32, 127), // Knock
    sfx(33, 32), // Coins (floppy volume: 48)
    sfx(34, 84), // Storm (floppy volume: 127)
    sfx(35, 84), // Door close 2 (floppy volume: 127)
    sfx(36, 84), // Arcweld (floppy volume: 127)
    sfx(37, 127), // Retract orb
    sfx(38, 127), // Dragon
    sfx(39, 127), // Snores
    sfx(40, 127), // Splash
    sfx(41, 127), // Lobby door
    sfx(42, 26), // Chirp loop (floppy volume: 40)
    sfx(43, 96), // Door creak
    sfx(44, 64), // Spoon dig
    sfx(45, 96), // Crow
    sfx(46, 42), // Cold wind (floppy volume: 64)
    sfx(47, 96), // Tool sound 1
    sfx(48, 127), // Tool sound 2
    sfx(49, 64), // Tool sound 3
    sfx(50, 96), // Metal door
    sfx(51, 32), // Water loop S
    sfx(52, 32), // Water loop L (floppy volume: 64)
    sfx(53, 127), // Door open 2
    sfx(54, 64), // Jail door
    sfx(55, 53), // Killing fire (floppy volume: 80)
    sfx(57, 64),
    sfx(58, 64),
    sfx(59, 64),
    sfx(60, 64),
    sfx(61, 64),
    sfx(62, 64),
    sfx(63, 64),
    sfx(64, 64),
    sfx(65, 64),
    sfx(66, 64),
    sfx(67, 64),
    sfx(68, 64),
    sfx(69, 64),
    sfx(70, 64),
    sfx(71, 64),
    sfx(72, 64),
    sfx(73, 64),
];
