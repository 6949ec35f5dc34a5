//! Face turns and the move tables built over the classic coordinates (C4).
use std::{fmt, str::FromStr};

use self::Move::*;
use crate::constants::*;
use crate::cubie::{CubieCube, BASIC_MOVE_CUBES, SOLVED_CUBIE_CUBE};
use crate::error::Error;
use crate::{decode_table, write_table};

/// Layer turns: Up, Right, Front, Down, Left, Back.
///
/// Suffix `2` is a half turn, `3` is counter-clockwise (a quarter turn the
/// other way, i.e. the inverse of the plain turn).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

/// All 18 moves, in coordinate-index order (move `m as usize` is table
/// column `m`).
pub const ALL_MOVES: [Move; N_MOVE] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U), "U'" => Ok(U3), "U2" => Ok(U2),
            "R" => Ok(R), "R'" => Ok(R3), "R2" => Ok(R2),
            "F" => Ok(F), "F'" => Ok(F3), "F2" => Ok(F2),
            "D" => Ok(D), "D'" => Ok(D3), "D2" => Ok(D2),
            "L" => Ok(L), "L'" => Ok(L3), "L2" => Ok(L2),
            "B" => Ok(B), "B'" => Ok(B3), "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

#[rustfmt::skip]
impl Move {
    /// Index of the face (U,R,F,D,L,B) this move turns.
    pub fn axis(self) -> usize {
        self as usize / 3
    }

    /// Quarter turns clockwise: 1, 2, or 3.
    pub fn power(self) -> usize {
        self as usize % 3 + 1
    }

    pub fn is_inverse(&self, other: Move) -> bool {
        matches!(
            (&self, other),
            (U | U2 | U3, D | D2 | D3)
            | (R | R2 | R3, L | L2 | L3)
            | (F | F2 | F3, B | B2 | B3),
        )
    }

    pub fn is_same_layer(&self, other: Move) -> bool {
        self.axis() == other.axis()
    }

    pub fn get_inverse(self) -> Self {
        match self {
            U => U3, U3 => U,
            D => D3, D3 => D,
            R => R3, R3 => R,
            L => L3, L3 => L,
            F => F3, F3 => F,
            B => B3, B3 => B,
            _ => self,
        }
    }

    /// The cubie corresponding to this move, composed from the basic
    /// quarter-turn cubies in `cubie.rs`.
    pub fn cubie(self) -> CubieCube {
        let base = BASIC_MOVE_CUBES[self.axis()];
        let mut result = SOLVED_CUBIE_CUBE;
        for _ in 0..self.power() {
            result = result.compose(&base);
        }
        result
    }
}

/// One N x 18 array per coordinate: `table[N_MOVE * coord + move as usize]`
/// is the coordinate after applying `move` to a cube at coordinate `coord`.
pub struct MoveTables {
    pub twist: Vec<u16>,
    pub flip: Vec<u16>,
    pub fr_to_br: Vec<u16>,
    pub urf_to_dlf: Vec<u16>,
    pub ur_to_ul: Vec<u16>,
    pub ub_to_df: Vec<u16>,
    pub ur_to_df: Vec<u16>,
}

impl MoveTables {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            twist: move_twist()?,
            flip: move_flip()?,
            fr_to_br: move_fr_to_br()?,
            urf_to_dlf: move_urf_to_dlf()?,
            ur_to_ul: move_ur_to_ul()?,
            ub_to_df: move_ub_to_df()?,
            ur_to_df: move_ur_to_df()?,
        })
    }
}

/// Build (or load from `tables/<name>`) the `n`-entry, 18-column move table
/// for coordinate `get`/`set`.
fn build_table(
    name: &str,
    n: usize,
    set: impl Fn(&mut CubieCube, u16),
    get: impl Fn(&CubieCube) -> u16,
) -> Result<Vec<u16>, Error> {
    let path = format!("tables/{name}");
    if let Ok(bytes) = std::fs::read(&path) {
        let table: Vec<u16> = decode_table(&bytes)?;
        if table.len() == n * N_MOVE {
            return Ok(table);
        }
    }
    println!("Creating {name} table...");
    let mut table = vec![0u16; n * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..n {
        if i % (n / 10).max(1) == 0 {
            print!(".");
        }
        set(&mut a, i as u16);
        for m in ALL_MOVES {
            table[N_MOVE * i + m as usize] = get(&a.apply_move(m));
        }
    }
    println!();
    write_table(&path, &table)?;
    Ok(table)
}

/// Move table for `twist` (C(corner orientations), 0 in phase 2).
pub fn move_twist() -> Result<Vec<u16>, Error> {
    build_table(
        "move_twist",
        N_TWIST,
        CubieCube::set_twist,
        CubieCube::get_twist,
    )
}

/// Move table for `flip` (corner orientations, 0 in phase 2).
pub fn move_flip() -> Result<Vec<u16>, Error> {
    build_table(
        "move_flip",
        N_FLIP,
        CubieCube::set_flip,
        CubieCube::get_flip,
    )
}

/// Move table for `FRtoBR` (the 4 UD-slice edges, ordered). `slice` is
/// derived from this table (`FRtoBR / 24`) rather than tabulated separately.
pub fn move_fr_to_br() -> Result<Vec<u16>, Error> {
    build_table(
        "move_fr_to_br",
        N_FRTOBR,
        CubieCube::set_fr_to_br,
        CubieCube::get_fr_to_br,
    )
}

/// Move table for `URFtoDLF`, used in phase 1 only (phase 2 restricts to
/// the 10 moves that keep this coordinate within its phase-2 meaning).
pub fn move_urf_to_dlf() -> Result<Vec<u16>, Error> {
    build_table(
        "move_urf_to_dlf",
        N_URFTODLF,
        CubieCube::set_urf_to_dlf,
        CubieCube::get_urf_to_dlf,
    )
}

/// Move table for `URtoUL`, used to compute `URtoDF` at the phase-1/2 boundary.
pub fn move_ur_to_ul() -> Result<Vec<u16>, Error> {
    build_table(
        "move_ur_to_ul",
        N_URTOUL,
        CubieCube::set_ur_to_ul,
        CubieCube::get_ur_to_ul,
    )
}

/// Move table for `UBtoDF`, used to compute `URtoDF` at the phase-1/2 boundary.
pub fn move_ub_to_df() -> Result<Vec<u16>, Error> {
    build_table(
        "move_ub_to_df",
        N_UBTODF,
        CubieCube::set_ub_to_df,
        CubieCube::get_ub_to_df,
    )
}

/// Move table for `URtoDF`, phase 2 only.
pub fn move_ur_to_df() -> Result<Vec<u16>, Error> {
    build_table(
        "move_ur_to_df",
        N_URTODF,
        CubieCube::set_ur_to_df,
        CubieCube::get_ur_to_df,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_parses_and_displays() {
        for &m in ALL_MOVES.iter() {
            assert_eq!(Move::from_str(&m.to_string()).unwrap(), m);
        }
    }

    #[test]
    fn inverse_is_involutive() {
        for &m in ALL_MOVES.iter() {
            assert_eq!(m.get_inverse().get_inverse(), m);
        }
    }

    #[test]
    fn u_is_its_own_quarter_cubie() {
        assert_eq!(U.cubie(), crate::cubie::U_MOVE);
    }

    #[test]
    fn u2_is_u_applied_twice() {
        let twice = crate::cubie::U_MOVE.compose(&crate::cubie::U_MOVE);
        assert_eq!(U2.cubie(), twice);
    }

    #[test]
    fn same_axis_moves_share_layer() {
        assert!(U.is_same_layer(U2));
        assert!(!U.is_same_layer(D));
    }

    #[test]
    fn opposite_axes_are_inverse_pairs() {
        assert!(U.is_inverse(D));
        assert!(R.is_inverse(L2));
        assert!(!U.is_inverse(R));
    }
}
