//! Cubie-level representation of a cube: two permutations and two
//! orientation vectors (C1).
//!
//! Corner slots, in home order: URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB.
//! Edge slots, in home order: UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR.
use crate::error::Error;
use crate::moves::Move;

pub const N_CORNERS: usize = 8;
pub const N_EDGES: usize = 12;

pub const URF: u8 = 0;
pub const UFL: u8 = 1;
pub const ULB: u8 = 2;
pub const UBR: u8 = 3;
pub const DFR: u8 = 4;
pub const DLF: u8 = 5;
pub const DBL: u8 = 6;
pub const DRB: u8 = 7;

pub const UR: u8 = 0;
pub const UF: u8 = 1;
pub const UL: u8 = 2;
pub const UB: u8 = 3;
pub const DR: u8 = 4;
pub const DF: u8 = 5;
pub const DL: u8 = 6;
pub const DB: u8 = 7;
pub const FR: u8 = 8;
pub const FL: u8 = 9;
pub const BL: u8 = 10;
pub const BR: u8 = 11;

/// A legal (or, before `verify`, possibly illegal) cube state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [u8; N_CORNERS],
    pub co: [u8; N_CORNERS],
    pub ep: [u8; N_EDGES],
    pub eo: [u8; N_EDGES],
}

pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0; N_CORNERS],
    ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0; N_EDGES],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

/// The cubie representation of a 90 degree clockwise turn of each face,
/// indexed U, R, F, D, L, B.
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Basic 90 degree clockwise move cubies, indexed by axis 0..6 (U,R,F,D,L,B).
pub const BASIC_MOVE_CUBES: [CubieCube; 6] =
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE];

impl CubieCube {
    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &CubieCube) -> CubieCube {
        let mut cp = [0u8; N_CORNERS];
        let mut co = [0u8; N_CORNERS];
        for i in 0..N_CORNERS {
            cp[i] = self.cp[other.cp[i] as usize];
            co[i] = (self.co[other.cp[i] as usize] + other.co[i]) % 3;
        }
        let mut ep = [0u8; N_EDGES];
        let mut eo = [0u8; N_EDGES];
        for i in 0..N_EDGES {
            ep[i] = self.ep[other.ep[i] as usize];
            eo[i] = (self.eo[other.ep[i] as usize] + other.eo[i]) % 2;
        }
        CubieCube { cp, co, ep, eo }
    }

    /// Only the corners of `self ∘ other`; used by move-table construction.
    pub fn corner_multiply(&mut self, other: CubieCube) {
        let mut cp = [0u8; N_CORNERS];
        let mut co = [0u8; N_CORNERS];
        for i in 0..N_CORNERS {
            cp[i] = self.cp[other.cp[i] as usize];
            co[i] = (self.co[other.cp[i] as usize] + other.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// Only the edges of `self ∘ other`; used by move-table construction.
    pub fn edge_multiply(&mut self, other: CubieCube) {
        let mut ep = [0u8; N_EDGES];
        let mut eo = [0u8; N_EDGES];
        for i in 0..N_EDGES {
            ep[i] = self.ep[other.ep[i] as usize];
            eo[i] = (self.eo[other.ep[i] as usize] + other.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    pub fn multiply(&mut self, other: CubieCube) {
        self.corner_multiply(other);
        self.edge_multiply(other);
    }

    pub fn invert(&self) -> CubieCube {
        let mut cp = [0u8; N_CORNERS];
        for i in 0..N_CORNERS {
            cp[self.cp[i] as usize] = i as u8;
        }
        let mut co = [0u8; N_CORNERS];
        for i in 0..N_CORNERS {
            co[i] = (3 - self.co[cp[i] as usize]) % 3;
        }
        let mut ep = [0u8; N_EDGES];
        for i in 0..N_EDGES {
            ep[self.ep[i] as usize] = i as u8;
        }
        let mut eo = [0u8; N_EDGES];
        for i in 0..N_EDGES {
            eo[i] = (2 - self.eo[ep[i] as usize]) % 2;
        }
        CubieCube { cp, co, ep, eo }
    }

    /// Apply a single face turn, returning the new state.
    pub fn apply_move(&self, m: Move) -> CubieCube {
        self.compose(&m.cubie())
    }

    pub fn apply_moves(&self, moves: &[Move]) -> CubieCube {
        let mut state = *self;
        for &m in moves {
            state = state.apply_move(m);
        }
        state
    }

    fn permutation_parity(perm: &[u8]) -> u8 {
        let mut seen = vec![false; perm.len()];
        let mut parity = 0u8;
        for i in 0..perm.len() {
            if seen[i] {
                continue;
            }
            let mut len = 0;
            let mut j = i;
            while !seen[j] {
                seen[j] = true;
                j = perm[j] as usize;
                len += 1;
            }
            if len % 2 == 0 {
                parity ^= 1;
            }
        }
        parity
    }

    pub fn corner_parity(&self) -> u8 {
        Self::permutation_parity(&self.cp)
    }

    pub fn edge_parity(&self) -> u8 {
        Self::permutation_parity(&self.ep)
    }

    /// Checks the five invariants of §3.1, in the order of the external
    /// error taxonomy (codes 2..6).
    pub fn verify(&self) -> Result<(), Error> {
        let mut edge_seen = [false; N_EDGES];
        for &e in self.ep.iter() {
            let e = e as usize;
            if e >= N_EDGES || edge_seen[e] {
                return Err(Error::InvalidEdgeCount);
            }
            edge_seen[e] = true;
        }
        let eo_sum: u32 = self.eo.iter().map(|&x| x as u32).sum();
        if eo_sum % 2 != 0 {
            return Err(Error::InvalidEdgeFlip);
        }
        let mut corner_seen = [false; N_CORNERS];
        for &c in self.cp.iter() {
            let c = c as usize;
            if c >= N_CORNERS || corner_seen[c] {
                return Err(Error::InvalidCornerCount);
            }
            corner_seen[c] = true;
        }
        let co_sum: u32 = self.co.iter().map(|&x| x as u32).sum();
        if co_sum % 3 != 0 {
            return Err(Error::InvalidCornerTwist);
        }
        if self.corner_parity() != self.edge_parity() {
            return Err(Error::InvalidParity);
        }
        Ok(())
    }

    /// Scrambles the cube in place to a uniformly random legal state;
    /// only used by tests and by the CLI's solve-a-random-scramble path.
    pub fn randomize(&mut self) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;
        let mut rng = thread_rng();
        loop {
            self.cp = {
                let mut v: Vec<u8> = (0..N_CORNERS as u8).collect();
                v.shuffle(&mut rng);
                v.try_into().unwrap()
            };
            self.ep = {
                let mut v: Vec<u8> = (0..N_EDGES as u8).collect();
                v.shuffle(&mut rng);
                v.try_into().unwrap()
            };
            if self.corner_parity() == self.edge_parity() {
                break;
            }
        }
        let mut co_sum = 0u32;
        for i in 0..N_CORNERS - 1 {
            self.co[i] = (rand::random::<u32>() % 3) as u8;
            co_sum += self.co[i] as u32;
        }
        self.co[N_CORNERS - 1] = ((3 - co_sum % 3) % 3) as u8;
        let mut eo_sum = 0u32;
        for i in 0..N_EDGES - 1 {
            self.eo[i] = (rand::random::<u32>() % 2) as u8;
            eo_sum += self.eo[i] as u32;
        }
        self.eo[N_EDGES - 1] = ((2 - eo_sum % 2) % 2) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn solved_verifies() {
        assert!(SOLVED_CUBIE_CUBE.verify().is_ok());
    }

    #[test]
    fn compose_with_identity_is_identity() {
        let id = SOLVED_CUBIE_CUBE;
        assert_eq!(U_MOVE.compose(&id), U_MOVE);
        assert_eq!(id.compose(&U_MOVE), U_MOVE);
    }

    #[test]
    fn four_quarter_turns_restore_solved() {
        let mut state = SOLVED_CUBIE_CUBE;
        for _ in 0..4 {
            state = state.apply_move(Move::U);
        }
        assert_eq!(state, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn invert_is_group_inverse() {
        let r = R_MOVE;
        let inv = r.invert();
        assert_eq!(r.compose(&inv), SOLVED_CUBIE_CUBE);
        assert_eq!(inv.compose(&r), SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn basic_moves_verify() {
        for m in BASIC_MOVE_CUBES {
            assert!(m.verify().is_ok());
        }
    }

    #[test]
    fn broken_edge_count_detected() {
        let mut bad = SOLVED_CUBIE_CUBE;
        bad.ep[0] = bad.ep[1];
        assert!(matches!(bad.verify(), Err(Error::InvalidEdgeCount)));
    }

    #[test]
    fn broken_corner_twist_detected() {
        let mut bad = SOLVED_CUBIE_CUBE;
        bad.co[0] = 1;
        assert!(matches!(bad.verify(), Err(Error::InvalidCornerTwist)));
    }

    #[test]
    fn broken_parity_detected() {
        let mut bad = SOLVED_CUBIE_CUBE;
        bad.cp.swap(0, 1);
        assert!(matches!(bad.verify(), Err(Error::InvalidParity)));
    }
}
