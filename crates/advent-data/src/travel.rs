//! The travel table
//!
//! Each row is `room, condition * 1000 + destination, motions...`, kept in
//! the order the engine scans them. Destinations above 500 print message
//! `dest - 500`; 301..=303 are the plover squeeze, the emerald drop and
//! the troll bridge.

use advent_core::consts::MAX_ROOM;
use advent_core::data::TravelEntry;

pub type TravelRow = (u8, u32, &'static [u16]);

pub static TRAVEL: &[TravelRow] = &[
    // Above ground
    (1, 2, &[2, 44, 29]),
    (1, 3, &[3, 12, 19, 43]),
    (1, 4, &[5, 13, 14, 46, 30]),
    (1, 5, &[6, 45]),
    (1, 8, &[63]),
    (2, 1, &[2, 12, 7, 43, 45, 30]),
    (2, 5, &[6, 46, 44]),
    (3, 1, &[2, 11, 32, 44]),
    (3, 11, &[62]),
    (3, 33, &[65]),
    (3, 79, &[5, 14]),
    (4, 1, &[4, 12, 45]),
    (4, 5, &[6, 43, 44, 29]),
    (4, 7, &[5, 46, 30]),
    (4, 8, &[63]),
    (5, 4, &[9, 43, 30]),
    (5, 50005, &[6, 7, 45]),
    (5, 6, &[6]),
    (5, 5, &[44, 46]),
    (6, 1, &[2, 45]),
    (6, 4, &[9, 43, 46, 30]),
    (6, 5, &[6, 44]),
    (7, 1, &[12]),
    (7, 4, &[4, 45]),
    (7, 5, &[6, 43, 44]),
    (7, 8, &[5, 15, 16, 46, 63]),
    (7, 595, &[60, 14, 30]),
    (8, 5, &[6, 43, 44, 46]),
    (8, 1, &[12]),
    (8, 7, &[4, 13, 45]),
    (8, 303009, &[3, 19, 30]),
    (8, 593, &[3]),
    // Below the grate
    (9, 303008, &[11, 29]),
    (9, 593, &[11]),
    (9, 10, &[17, 18, 19, 44]),
    (9, 14, &[31]),
    (9, 11, &[51]),
    (10, 9, &[11, 20, 43, 64]),
    (10, 11, &[19, 22, 44, 51]),
    (10, 14, &[31]),
    (11, 303008, &[63]),
    (11, 9, &[64]),
    (11, 10, &[17, 18, 23, 24, 43]),
    (11, 12, &[25, 19, 29, 44]),
    (11, 3, &[62]),
    (11, 14, &[31]),
    (12, 303008, &[63]),
    (12, 9, &[64]),
    (12, 11, &[30, 43, 51]),
    (12, 13, &[19, 29, 44]),
    (12, 14, &[31]),
    (13, 303008, &[63]),
    (13, 9, &[64]),
    (13, 11, &[51]),
    (13, 12, &[25, 43]),
    (13, 14, &[23, 31, 44]),
    (14, 303008, &[63]),
    (14, 9, &[64]),
    (14, 11, &[51]),
    (14, 13, &[23, 43]),
    (14, 150020, &[30, 31, 34]),
    (14, 15, &[30]),
    (14, 16, &[33, 44]),
    // Hall of Mists and the Mountain King
    (15, 18, &[36, 46]),
    (15, 17, &[7, 38, 44]),
    (15, 19, &[10, 30, 45]),
    (15, 150022, &[29, 31, 34, 35, 23, 43]),
    (15, 14, &[29]),
    (15, 34, &[55]),
    (16, 14, &[1]),
    (17, 15, &[38, 43]),
    (17, 312596, &[39]),
    (17, 412021, &[7]),
    (17, 412597, &[41, 42, 44, 69]),
    (17, 27, &[41]),
    (18, 15, &[38, 11, 45]),
    (19, 15, &[10, 29, 43]),
    (19, 311028, &[45, 36]),
    (19, 311029, &[46, 37]),
    (19, 311030, &[44, 38]),
    (19, 32, &[45]),
    (19, 35074, &[49]),
    (19, 211032, &[49]),
    (19, 74, &[66]),
    (20, 0, &[1]),
    (21, 0, &[1]),
    (22, 15, &[1]),
    // Twopit room and the plant
    (23, 67, &[43, 42]),
    (23, 68, &[44, 61]),
    (23, 25, &[30, 31]),
    (23, 648, &[52]),
    (24, 67, &[29, 11]),
    (25, 23, &[29, 11]),
    (25, 724031, &[56]),
    (25, 26, &[56]),
    (26, 88, &[1]),
    (27, 312596, &[39]),
    (27, 412021, &[7]),
    (27, 412597, &[41, 42, 43, 69]),
    (27, 17, &[41]),
    (27, 40, &[45]),
    (27, 41, &[44]),
    (28, 19, &[38, 11, 46]),
    (28, 33, &[45, 55]),
    (28, 36, &[30, 52]),
    (29, 19, &[38, 11, 45]),
    (30, 19, &[38, 11, 43]),
    (30, 62, &[44, 29]),
    (31, 524089, &[1]),
    (31, 90, &[1]),
    (32, 19, &[1]),
    // Y2 and the dusty rooms
    (33, 3, &[65]),
    (33, 28, &[46]),
    (33, 34, &[43, 53, 54]),
    (33, 35, &[44]),
    (33, 100, &[71]),
    (34, 33, &[30, 55]),
    (34, 15, &[29]),
    (35, 33, &[43, 11]),
    (35, 20, &[39]),
    (36, 37, &[43, 17]),
    (36, 28, &[29, 52]),
    (36, 39, &[44]),
    (36, 65, &[70]),
    (37, 36, &[44, 17]),
    (37, 38, &[30, 31, 56]),
    (38, 37, &[56, 29]),
    (39, 36, &[43, 23]),
    (39, 64, &[30, 52, 58]),
    (39, 65, &[70]),
    (40, 41, &[1]),
    (41, 42, &[46, 29, 23, 56]),
    (41, 27, &[43]),
    (41, 59, &[45]),
    (41, 60, &[44, 17]),
    // Maze of twisty little passages, all alike
    (42, 41, &[29]),
    (42, 42, &[45]),
    (42, 43, &[43]),
    (42, 45, &[46]),
    (42, 80, &[44]),
    (43, 42, &[44]),
    (43, 44, &[46]),
    (43, 45, &[43]),
    (44, 43, &[43]),
    (44, 48, &[30]),
    (44, 50, &[46]),
    (44, 82, &[45]),
    (45, 42, &[45]),
    (45, 43, &[44]),
    (45, 46, &[43]),
    (45, 47, &[46]),
    (45, 87, &[29, 30]),
    (46, 45, &[44, 11]),
    (47, 45, &[43, 11]),
    (48, 44, &[29, 11]),
    (49, 50, &[43]),
    (49, 51, &[44]),
    (50, 44, &[43]),
    (50, 49, &[44]),
    (50, 51, &[30]),
    (50, 52, &[46]),
    (51, 49, &[44]),
    (51, 50, &[29]),
    (51, 52, &[43]),
    (51, 53, &[46]),
    (52, 50, &[44]),
    (52, 51, &[45]),
    (52, 52, &[46]),
    (52, 53, &[29]),
    (52, 55, &[43]),
    (52, 86, &[30]),
    (53, 51, &[44]),
    (53, 52, &[45]),
    (53, 54, &[46]),
    (54, 53, &[44, 11]),
    (55, 52, &[44]),
    (55, 55, &[45]),
    (55, 56, &[30]),
    (55, 57, &[43]),
    (56, 55, &[29, 11]),
    (57, 13, &[30, 56]),
    (57, 55, &[44]),
    (57, 58, &[46]),
    (57, 83, &[43]),
    (57, 84, &[45]),
    (58, 57, &[43, 11]),
    (59, 27, &[1]),
    // Long hall and Bedquilt
    (60, 41, &[43, 29, 17]),
    (60, 61, &[44]),
    (60, 62, &[45, 30, 52]),
    (61, 60, &[43]),
    (61, 62, &[45]),
    (61, 100107, &[46]),
    (62, 60, &[44]),
    (62, 63, &[45]),
    (62, 30, &[43]),
    (62, 61, &[46]),
    (63, 62, &[46, 11]),
    (64, 39, &[29, 56, 59]),
    (64, 65, &[44, 70]),
    (64, 103, &[45, 74]),
    (64, 106, &[43]),
    (65, 64, &[43]),
    (65, 66, &[44]),
    (65, 80556, &[46]),
    (65, 68, &[61]),
    (65, 80556, &[29]),
    (65, 50070, &[29]),
    (65, 39, &[29]),
    (65, 50556, &[45]),
    (65, 75072, &[45]),
    (65, 71, &[45]),
    (65, 80556, &[30]),
    (65, 106, &[30]),
    (66, 65, &[47]),
    (66, 67, &[44]),
    (66, 80556, &[46]),
    (66, 77, &[25]),
    (66, 96, &[43]),
    (66, 50556, &[50]),
    (66, 97, &[72]),
    (67, 66, &[43]),
    (67, 23, &[44, 42]),
    (67, 24, &[30, 31]),
    (68, 23, &[46]),
    (68, 69, &[29, 56]),
    (68, 65, &[70]),
    // Secret canyons
    (69, 68, &[30, 61]),
    (69, 331120, &[46]),
    (69, 119, &[46]),
    (69, 109, &[45]),
    (70, 71, &[45]),
    (70, 65, &[30, 23]),
    (70, 111, &[46]),
    (71, 65, &[48]),
    (71, 70, &[46]),
    (71, 110, &[45]),
    (72, 65, &[70]),
    (72, 118, &[49]),
    (72, 73, &[45]),
    (72, 97, &[48, 72]),
    (73, 72, &[46, 17, 11]),
    (74, 19, &[43]),
    (74, 331120, &[44]),
    (74, 121, &[44]),
    (74, 75, &[30]),
    (75, 76, &[46]),
    (75, 77, &[45]),
    (76, 75, &[45]),
    (77, 75, &[43]),
    (77, 78, &[44]),
    (77, 66, &[45, 17]),
    (78, 77, &[46]),
    (79, 3, &[1]),
    (80, 42, &[45]),
    (80, 80, &[44]),
    (80, 80, &[46]),
    (80, 81, &[43]),
    (81, 80, &[44, 11]),
    (82, 44, &[46, 11]),
    (83, 57, &[46]),
    (83, 84, &[43]),
    (83, 85, &[44]),
    (84, 57, &[45]),
    (84, 83, &[44]),
    (84, 114, &[50]),
    (85, 83, &[43, 11]),
    (86, 52, &[29, 11]),
    (87, 45, &[29, 30]),
    // Giant room and beyond
    (88, 25, &[30, 56]),
    (88, 20, &[39]),
    (88, 92, &[44, 27]),
    (89, 25, &[1]),
    (90, 23, &[1]),
    (91, 95, &[45, 73, 23]),
    (91, 72, &[30, 56]),
    (92, 88, &[46]),
    (92, 93, &[43]),
    (92, 94, &[45]),
    (93, 92, &[46, 27, 11]),
    (94, 92, &[46, 27, 23]),
    (94, 309095, &[45, 3, 73]),
    (94, 611, &[45]),
    (95, 94, &[46, 11]),
    (95, 92, &[27]),
    (95, 91, &[44]),
    (96, 66, &[44, 11]),
    (97, 66, &[48]),
    (97, 72, &[44, 17]),
    (97, 98, &[29, 45, 73]),
    (98, 97, &[46, 72]),
    (98, 99, &[44]),
    (99, 98, &[50, 73]),
    (99, 301, &[43, 23]),
    (100, 301, &[44, 23, 11]),
    (100, 159302, &[71]),
    (100, 33, &[71]),
    (100, 101, &[47, 22]),
    (101, 100, &[46, 71, 11]),
    (102, 103, &[30, 74, 11]),
    (103, 102, &[29]),
    (103, 104, &[30]),
    (103, 114618, &[46]),
    (103, 115619, &[46]),
    (103, 64, &[46]),
    (104, 103, &[29, 74]),
    (104, 105, &[30]),
    (105, 104, &[29, 11]),
    (105, 103, &[74]),
    (106, 64, &[29]),
    (106, 65, &[44]),
    (106, 108, &[43]),
    // Maze of twisty little passages, all different
    (107, 131, &[46]),
    (107, 132, &[49]),
    (107, 133, &[47]),
    (107, 134, &[48]),
    (107, 135, &[29]),
    (107, 136, &[50]),
    (107, 137, &[43]),
    (107, 138, &[44]),
    (107, 139, &[30]),
    (107, 61, &[45]),
    (108, 95556, &[43, 45, 46, 47, 48, 49, 50, 29, 30]),
    (108, 106, &[43]),
    (108, 626, &[44]),
    (109, 69, &[46]),
    (109, 113, &[45, 75]),
    (110, 71, &[44]),
    (110, 20, &[39]),
    (111, 70, &[45]),
    (111, 40050, &[30, 39, 56]),
    (111, 50053, &[30]),
    (111, 45, &[30]),
    (112, 131, &[49]),
    (112, 132, &[45]),
    (112, 133, &[43]),
    (112, 134, &[46]),
    (112, 135, &[48]),
    (112, 136, &[47]),
    (112, 137, &[44]),
    (112, 138, &[30]),
    (112, 139, &[50]),
    (112, 140, &[29]),
    (113, 109, &[46, 11]),
    (114, 84, &[48]),
    // The repository
    (115, 116, &[49]),
    (116, 115, &[47]),
    (116, 593, &[30]),
    // Over the chasm
    (117, 118, &[49]),
    (117, 233660, &[41, 42, 69, 47]),
    (117, 332661, &[41, 42, 69, 47]),
    (117, 303, &[41, 42, 69, 47]),
    (117, 332021, &[39]),
    (117, 596, &[39]),
    (118, 72, &[30]),
    (118, 117, &[29]),
    (119, 69, &[45, 11]),
    (119, 653, &[43, 7]),
    (120, 69, &[45]),
    (120, 74, &[43]),
    (121, 74, &[43, 11]),
    (121, 653, &[45, 7]),
    (122, 123, &[47]),
    (122, 233660, &[41, 42, 69, 49]),
    (122, 303, &[41, 42, 69, 49]),
    (122, 596, &[39]),
    (122, 124, &[77]),
    (122, 126, &[28]),
    (122, 129, &[40]),
    (123, 122, &[44]),
    (123, 124, &[43, 77]),
    (123, 126, &[28]),
    (123, 129, &[40]),
    (124, 123, &[44]),
    (124, 125, &[47, 36]),
    (124, 128, &[48, 37, 30]),
    (124, 126, &[28]),
    (124, 129, &[40]),
    (125, 124, &[46, 77]),
    (125, 126, &[45, 28]),
    (125, 127, &[43, 17]),
    (126, 125, &[46, 29, 11]),
    (126, 124, &[77]),
    (126, 610, &[30]),
    (127, 125, &[44, 11, 17]),
    (127, 124, &[77]),
    (127, 126, &[28]),
    (128, 124, &[45, 29, 77]),
    (128, 129, &[46, 30, 40]),
    (128, 126, &[28]),
    (129, 128, &[44, 29]),
    (129, 124, &[77]),
    (129, 130, &[43, 19, 40, 3]),
    (129, 126, &[28]),
    (130, 129, &[44, 11]),
    (130, 124, &[77]),
    (130, 126, &[28]),
    (131, 107, &[44]),
    (131, 132, &[48]),
    (131, 133, &[50]),
    (131, 134, &[43]),
    (131, 135, &[29]),
    (131, 136, &[47]),
    (131, 137, &[46]),
    (131, 138, &[45]),
    (131, 139, &[49]),
    (131, 112, &[30]),
    (132, 107, &[48]),
    (132, 133, &[50]),
    (132, 134, &[43]),
    (132, 135, &[29]),
    (132, 136, &[47]),
    (132, 137, &[46]),
    (132, 138, &[45]),
    (132, 139, &[49]),
    (132, 131, &[30]),
    (132, 112, &[44]),
    (133, 107, &[50]),
    (133, 134, &[43]),
    (133, 135, &[29]),
    (133, 136, &[47]),
    (133, 137, &[46]),
    (133, 138, &[45]),
    (133, 139, &[49]),
    (133, 131, &[30]),
    (133, 132, &[44]),
    (133, 112, &[48]),
    (134, 107, &[43]),
    (134, 135, &[29]),
    (134, 136, &[47]),
    (134, 137, &[46]),
    (134, 138, &[45]),
    (134, 139, &[49]),
    (134, 131, &[30]),
    (134, 132, &[44]),
    (134, 133, &[48]),
    (134, 112, &[50]),
    (135, 107, &[29]),
    (135, 136, &[47]),
    (135, 137, &[46]),
    (135, 138, &[45]),
    (135, 139, &[49]),
    (135, 131, &[30]),
    (135, 132, &[44]),
    (135, 133, &[48]),
    (135, 134, &[50]),
    (135, 112, &[43]),
    (136, 107, &[47]),
    (136, 137, &[46]),
    (136, 138, &[45]),
    (136, 139, &[49]),
    (136, 131, &[30]),
    (136, 132, &[44]),
    (136, 133, &[48]),
    (136, 134, &[50]),
    (136, 135, &[43]),
    (136, 112, &[29]),
    (137, 107, &[46]),
    (137, 138, &[45]),
    (137, 139, &[49]),
    (137, 131, &[30]),
    (137, 132, &[44]),
    (137, 133, &[48]),
    (137, 134, &[50]),
    (137, 135, &[43]),
    (137, 136, &[29]),
    (137, 112, &[47]),
    (138, 107, &[45]),
    (138, 139, &[49]),
    (138, 131, &[30]),
    (138, 132, &[44]),
    (138, 133, &[48]),
    (138, 134, &[50]),
    (138, 135, &[43]),
    (138, 136, &[29]),
    (138, 137, &[47]),
    (138, 112, &[46]),
    (139, 107, &[49]),
    (139, 131, &[30]),
    (139, 132, &[44]),
    (139, 133, &[48]),
    (139, 134, &[50]),
    (139, 135, &[43]),
    (139, 136, &[29]),
    (139, 137, &[47]),
    (139, 138, &[46]),
    (139, 112, &[45]),
    (140, 112, &[45, 11]),
];

/// Expand the packed rows into per-room entry lists, indexed by room
pub fn expand(rows: &[TravelRow]) -> Vec<Vec<TravelEntry>> {
    let mut rooms = vec![Vec::new(); usize::from(MAX_ROOM) + 1];
    for &(room, packed, verbs) in rows {
        if let Some(entries) = rooms.get_mut(usize::from(room)) {
            entries.extend(TravelEntry::expand_row(packed, verbs));
        }
    }
    rooms
}
