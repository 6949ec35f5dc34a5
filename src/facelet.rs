//! Facelet <-> cubie codec (C2): a 54-character sticker string, ordered
//! U9 R9 F9 D9 L9 B9, each face row-major from its canonical orientation.
use crate::cubie::{CubieCube, N_CORNERS, N_EDGES};
use crate::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidLength),
        }
    }
}

/// Facelet indices of the U,R,F,D,L,B centers.
pub const CENTER_FACELET: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// Facelet indices of each corner's three stickers, in home order
/// URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB.
pub const CORNER_FACELET: [[usize; 3]; N_CORNERS] = [
    [8, 9, 20],   // URF: U9 R1 F3
    [6, 18, 38],  // UFL: U7 F1 L3
    [0, 36, 47],  // ULB: U1 L1 B3
    [2, 45, 11],  // UBR: U3 B1 R3
    [29, 26, 15], // DFR: D3 F9 R7
    [27, 44, 24], // DLF: D1 L9 F7
    [33, 53, 42], // DBL: D7 B9 L7
    [35, 17, 51], // DRB: D9 R9 B7
];

/// Facelet indices of each edge's two stickers, in home order
/// UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR.
pub const EDGE_FACELET: [[usize; 2]; N_EDGES] = [
    [5, 10],  // UR: U6 R2
    [7, 19],  // UF: U8 F2
    [3, 37],  // UL: U4 L2
    [1, 46],  // UB: U2 B2
    [32, 16], // DR: D6 R8
    [28, 25], // DF: D2 F8
    [30, 43], // DL: D4 L8
    [34, 52], // DB: D8 B8
    [23, 12], // FR: F6 R4
    [21, 39], // FL: F4 L6
    [48, 41], // BL: B6 L4
    [50, 14], // BR: B4 R6
];

pub const CORNER_COLOR: [[Color; 3]; N_CORNERS] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

pub const EDGE_COLOR: [[Color; 2]; N_EDGES] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

#[derive(Debug, PartialEq, Eq)]
pub struct FaceCube {
    pub f: [Color; 54],
}

#[rustfmt::skip]
pub const SOLVED_FACE_CUBE: FaceCube = FaceCube {
    f: [
        Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U,
        Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R,
        Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F,
        Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D,
        Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L,
        Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B,
    ],
};

impl Default for FaceCube {
    fn default() -> Self {
        SOLVED_FACE_CUBE
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() != 54 {
            return Err(Error::InvalidLength);
        }
        let mut face = FaceCube::default();
        for (i, c) in s.chars().enumerate() {
            face.f[i] = Color::try_from(c)?;
        }
        for (i, &center) in CENTER_FACELET.iter().enumerate() {
            let expected = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B][i];
            if face.f[center] != expected {
                return Err(Error::InvalidLength);
            }
        }
        let mut counts = [0u32; 6];
        for &c in face.f.iter() {
            counts[c as usize] += 1;
        }
        if counts.iter().any(|&n| n != 9) {
            return Err(Error::InvalidColorCount);
        }
        Ok(face)
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.f.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;
    fn try_from(face: &FaceCube) -> Result<Self, Self::Error> {
        let mut state = CubieCube::default();

        for i in 0..N_CORNERS {
            let mut ori = 0usize;
            for index in 0..3 {
                ori = index;
                let color = face.f[CORNER_FACELET[i][ori]];
                if color == Color::U || color == Color::D {
                    break;
                }
            }
            let col1 = face.f[CORNER_FACELET[i][(ori + 1) % 3]];
            let col2 = face.f[CORNER_FACELET[i][(ori + 2) % 3]];
            let mut found = false;
            for j in 0..N_CORNERS {
                if col1 == CORNER_COLOR[j][1] && col2 == CORNER_COLOR[j][2] {
                    state.cp[i] = j as u8;
                    state.co[i] = ori as u8 % 3;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InvalidColorCount);
            }
        }

        for i in 0..N_EDGES {
            let a = face.f[EDGE_FACELET[i][0]];
            let b = face.f[EDGE_FACELET[i][1]];
            let mut found = false;
            for j in 0..N_EDGES {
                if a == EDGE_COLOR[j][0] && b == EDGE_COLOR[j][1] {
                    state.ep[i] = j as u8;
                    state.eo[i] = 0;
                    found = true;
                    break;
                }
                if a == EDGE_COLOR[j][1] && b == EDGE_COLOR[j][0] {
                    state.ep[i] = j as u8;
                    state.eo[i] = 1;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InvalidColorCount);
            }
        }

        Ok(state)
    }
}

impl TryFrom<&CubieCube> for FaceCube {
    type Error = Error;
    fn try_from(cc: &CubieCube) -> Result<Self, Self::Error> {
        let mut face = FaceCube::default();
        for (i, &center) in CENTER_FACELET.iter().enumerate() {
            face.f[center] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B][i];
        }
        for i in 0..N_CORNERS {
            let corner = cc.cp[i] as usize;
            for (j, &facelet) in CORNER_FACELET[i].iter().enumerate() {
                face.f[facelet] = CORNER_COLOR[corner][(j + 3 - cc.co[i] as usize) % 3];
            }
        }
        for i in 0..N_EDGES {
            let edge = cc.ep[i] as usize;
            for (j, &facelet) in EDGE_FACELET[i].iter().enumerate() {
                face.f[facelet] = EDGE_COLOR[edge][(j + cc.eo[i] as usize) % 2];
            }
        }
        Ok(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;

    const SOLVED: &str =
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn solved_string_round_trips() {
        let face = FaceCube::try_from(SOLVED).unwrap();
        assert_eq!(face, SOLVED_FACE_CUBE);
        let cubie = CubieCube::try_from(&face).unwrap();
        assert_eq!(cubie, SOLVED_CUBIE_CUBE);
        let back = FaceCube::try_from(&cubie).unwrap();
        assert_eq!(back, SOLVED_FACE_CUBE);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            FaceCube::try_from("UUU"),
            Err(Error::InvalidLength)
        ));
    }

    #[test]
    fn bad_color_count_is_rejected() {
        let mut s = SOLVED.to_string();
        s.replace_range(0..1, "R");
        assert!(matches!(
            FaceCube::try_from(s.as_str()),
            Err(Error::InvalidColorCount)
        ));
    }

    #[test]
    fn applying_a_move_then_converting_back_round_trips() {
        use crate::cubie::U_MOVE;
        let cc = SOLVED_CUBIE_CUBE.compose(&U_MOVE);
        let face = FaceCube::try_from(&cc).unwrap();
        let back = CubieCube::try_from(&face).unwrap();
        assert_eq!(back, cc);
    }
}
