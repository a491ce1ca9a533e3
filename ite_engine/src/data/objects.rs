//! Pick-uppable object table.
//!
//! Inventory items and where they start out in the world. As with the actor
//! table, scripts address objects by row position.

use serde::Serialize;

/// The object combines with another via the Use verb.
pub const USE_WITH: u16 = 0x01;
/// Drawn upright rather than flat on the ground.
pub const NOT_FLAT: u16 = 0x02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectTableData {
    pub name_index: u8,
    pub scene_index: i16,
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub sprite_list_resource: u32,
    pub script_entrypoint: u8,
    pub interact_bits: u16,
}

#[allow(clippy::too_many_arguments)]
const fn object(
    name_index: u8,
    scene_index: i16,
    x: i16,
    y: i16,
    z: i16,
    sprite_list_resource: u32,
    script_entrypoint: u8,
    interact_bits: u16,
) -> ObjectTableData {
    ObjectTableData {
        name_index,
        scene_index,
        x,
        y,
        z,
        sprite_list_resource,
        script_entrypoint,
        interact_bits,
    }
}

pub const OBJECT_COUNT: usize = 39;

pub const OBJECT_TABLE: [ObjectTableData; OBJECT_COUNT] = [
    object(8, 49, 1256, 760, 0, 9, 5, NOT_FLAT), // Magic Hat
    object(9, 52, 1080, 1864, 0, 68, 4, USE_WITH), // Berries
    object(10, 259, 744, 524, 0, 79, 42, USE_WITH), // Card Key
    object(11, 0, 480, 480, 0, 69, 6, 0), // Foot Print
    object(12, 0, 480, 480, 0, 13, 38, USE_WITH), // Power Cell
    object(13, 28, 640, 412, 40, 14, 15, USE_WITH), // Digital Clock
    object(14, 0, 480, 480, 0, 15, 41, USE_WITH), // Oil Lamp
    object(15, 24, 868, 456, 35, 46, 13, USE_WITH), // Magnetic Key
    object(16, 0, 480, 480, 0, 17, 7, USE_WITH), // Plaster
    object(17, 249, 320, 476, 45, 18, 44, 0), // Trophy
    object(18, 0, 480, 480, 0, 19, 20, 0), // Coins
    object(19, 19, 600, 480, 0, 20, 8, 0), // Lens Fragments
    object(20, 0, 1012, 568, 80, 44, 10, USE_WITH), // Key to jail cell
    object(21, 0, 480, 480, 0, 22, 9, 0), // Remade lens
    object(22, 0, 480, 480, 0, 23, 21, 0), // Tycho's Map
    object(23, 0, 480, 480, 0, 24, 23, 0), // Silver Medallion
    object(24, 0, 480, 480, 0, 25, 24, 0), // Mud in Fur
    object(25, 0, 480, 480, 0, 26, 25, 0), // Gold Ring
    object(27, 13, 1036, 572, 40, 47, 14, USE_WITH), // Screwdriver
    object(28, 0, 480, 480, 0, 29, 26, 0), // Apple Token
    object(29, 0, 480, 480, 0, 30, 22, USE_WITH), // Letter from Elara
    object(30, 0, 164, 440, 0, 31, 16, USE_WITH), // Spoon
    object(32, 0, 480, 480, 0, 33, 43, 0), // Catnip
    object(33, 31, 580, 392, 0, 45, 11, 0), // Twigs
    object(35, 0, 468, 480, 0, 36, 12, USE_WITH), // Empty Bowl (also bowl of honey)
    object(37, 0, 480, 480, 0, 38, 45, USE_WITH), // Needle and Thread
    object(38, 25, 332, 328, 0, 48, 19, 0), // Rock Crystal
    object(39, 0, 480, 480, 0, 40, 0, USE_WITH), // Salve
    object(40, 269, 644, 416, 0, 41, 39, NOT_FLAT), // Electrical Cable
    object(41, 12, 280, 516, 0, 43, 17, USE_WITH), // Piece of flint
    object(42, 5, 876, 332, 32, 65, 18, 0), // Rat Cloak
    object(43, 52, 556, 1612, 0, 49, 28, USE_WITH | NOT_FLAT), // Bucket
    object(48, 52, 732, 948, 0, 50, 27, USE_WITH), // Cup
    object(49, 52, 520, 1872, 0, 53, 29, 0), // Fertilizer
    object(50, 52, 1012, 1268, 0, 52, 30, 0), // Feeder
    object(51, 252, -20, -20, 0, 71, 32, USE_WITH | NOT_FLAT), // Bowl in jail cell
    object(53, 252, 1148, 388, 0, 70, 33, 0), // Loose stone block in jail cell
    object(26, 12, 496, 368, 0, 76, 31, 0), // Coil of Rope from Quarry
    object(54, 281, 620, 352, 0, 80, 46, 0), // Orb of Storms in Dam Lab
];
