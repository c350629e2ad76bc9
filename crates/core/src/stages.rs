//! Built-in stage table.
//!
//! Boards are listed spawn row first, floor last. Each board is 10 x 20.

use crate::stage::StageTemplate;

const E: &str = "..........";

pub(crate) const BUILTIN_STAGES: [StageTemplate; 4] = [
    StageTemplate {
        name: "Foothold",
        board: &[
            E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E,
            ".......#..",
            ".#...#.#..",
            "##########",
            "##########",
        ],
        pieces: "OISZZT",
    },
    StageTemplate {
        name: "Staircase",
        board: &[
            E, E, E, E, E, E, E, E, E, E, E, E,
            ".........#",
            "....##..##",
            "#########.",
            "######.##.",
            "#####..###",
            ".###.#.###",
            "######.###",
            "#.#.#.###.",
        ],
        pieces: "IOLZIOTZZSZTT",
    },
    StageTemplate {
        name: "Staircase II",
        board: &[
            E, E, E, E, E, E, E, E, E, E, E, E,
            ".........#",
            "....##..##",
            "#########.",
            "######.##.",
            "#####..###",
            ".###.#.###",
            "######.###",
            "#.#.#.###.",
        ],
        pieces: "IOJSIOTSSZSTT",
    },
    StageTemplate {
        name: "Wells",
        board: &[
            E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E,
            "...#......",
            "...#.#..#.",
            "##.#.##.##",
            "##.#.#...#",
        ],
        pieces: "ZOIT",
    },
];
