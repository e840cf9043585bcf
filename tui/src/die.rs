//! Fixed-size die face art.
//!
//! Each face renders as a 7x11 cell block so the board never reflows when the
//! face changes mid-animation.

use tumble_engine::UiOptions;
use tumble_types::Face;

pub const DIE_HEIGHT: u16 = 7;
pub const DIE_WIDTH: u16 = 11;

const ROWS: usize = DIE_HEIGHT as usize;

const FACES: [[&str; ROWS]; 6] = [
    [
        "╭─────────╮",
        "│         │",
        "│         │",
        "│    ●    │",
        "│         │",
        "│         │",
        "╰─────────╯",
    ],
    [
        "╭─────────╮",
        "│ ●       │",
        "│         │",
        "│         │",
        "│         │",
        "│       ● │",
        "╰─────────╯",
    ],
    [
        "╭─────────╮",
        "│ ●       │",
        "│         │",
        "│    ●    │",
        "│         │",
        "│       ● │",
        "╰─────────╯",
    ],
    [
        "╭─────────╮",
        "│ ●     ● │",
        "│         │",
        "│         │",
        "│         │",
        "│ ●     ● │",
        "╰─────────╯",
    ],
    [
        "╭─────────╮",
        "│ ●     ● │",
        "│         │",
        "│    ●    │",
        "│         │",
        "│ ●     ● │",
        "╰─────────╯",
    ],
    [
        "╭─────────╮",
        "│ ●     ● │",
        "│         │",
        "│ ●     ● │",
        "│         │",
        "│ ●     ● │",
        "╰─────────╯",
    ],
];

const FACES_ASCII: [[&str; ROWS]; 6] = [
    [
        "+---------+",
        "|         |",
        "|         |",
        "|    o    |",
        "|         |",
        "|         |",
        "+---------+",
    ],
    [
        "+---------+",
        "| o       |",
        "|         |",
        "|         |",
        "|         |",
        "|       o |",
        "+---------+",
    ],
    [
        "+---------+",
        "| o       |",
        "|         |",
        "|    o    |",
        "|         |",
        "|       o |",
        "+---------+",
    ],
    [
        "+---------+",
        "| o     o |",
        "|         |",
        "|         |",
        "|         |",
        "| o     o |",
        "+---------+",
    ],
    [
        "+---------+",
        "| o     o |",
        "|         |",
        "|    o    |",
        "|         |",
        "| o     o |",
        "+---------+",
    ],
    [
        "+---------+",
        "| o     o |",
        "|         |",
        "| o     o |",
        "|         |",
        "| o     o |",
        "+---------+",
    ],
];

/// Placeholder shown under reduced motion while a roll is in flight: the face
/// underneath must stay concealed, but the block still has to read as "busy".
const UNKNOWN: [&str; ROWS] = [
    "╭─────────╮",
    "│         │",
    "│         │",
    "│    ?    │",
    "│         │",
    "│         │",
    "╰─────────╯",
];

const UNKNOWN_ASCII: [&str; ROWS] = [
    "+---------+",
    "|         |",
    "|         |",
    "|    ?    |",
    "|         |",
    "|         |",
    "+---------+",
];

#[must_use]
pub fn face_art(face: Face, ascii_only: bool) -> &'static [&'static str; ROWS] {
    let index = (face.get() - 1) as usize;
    if ascii_only {
        &FACES_ASCII[index]
    } else {
        &FACES[index]
    }
}

/// Art for a die in motion.
///
/// Cycles through the faces with the frame counter; the stride keeps
/// consecutive frames from counting up in order. Under reduced motion the
/// static placeholder is shown instead.
#[must_use]
pub fn in_motion_art(tick: u64, options: UiOptions) -> &'static [&'static str; ROWS] {
    if options.reduced_motion {
        if options.ascii_only {
            return &UNKNOWN_ASCII;
        }
        return &UNKNOWN;
    }
    face_art(scramble_face(tick), options.ascii_only)
}

fn scramble_face(tick: u64) -> Face {
    Face::ALL[(tick.wrapping_mul(5) % 6) as usize]
}
