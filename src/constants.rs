//! Sizes of the classic (non-symmetry-reduced) Kociemba coordinate system.

/// Corner orientations (3^7), co[7] determined by the others.
pub const N_TWIST: usize = 2187;
/// Edge orientations (2^11), eo[11] determined by the others.
pub const N_FLIP: usize = 2048;
/// Positions (not order) of the 4 UD-slice edges among 12 slots: C(12,4).
pub const N_SLICE1: usize = 495;
/// Order of the 4 UD-slice edges once they occupy the UD slice: 4!.
pub const N_SLICE2: usize = 24;
/// Sign of the corner (= edge) permutation.
pub const N_PARITY: usize = 2;
/// Ordered placement of 6 specific corners among 8: C(8,6)*6!.
pub const N_URFTODLF: usize = 20160;
/// Ordered placement of the 4 UD-slice edges among 12 slots: C(12,4)*4!.
pub const N_FRTOBR: usize = 11880;
/// Ordered placement of {UR, UF, UL} among 12 slots: C(12,3)*3!.
pub const N_URTOUL: usize = 1320;
/// Ordered placement of {UB, DR, DF} among 12 slots: C(12,3)*3!.
pub const N_UBTODF: usize = 1320;
/// Ordered placement of 6 U/D edges among 8, phase-2 only: C(8,6)*6!.
pub const N_URTODF: usize = 20160;
/// Eighteen face turns: 6 axes * 3 powers.
pub const N_MOVE: usize = 18;

/// Phase-2-legal move indices: {U, U2, U', R2, F2, D, D2, D', L2, B2}.
pub const PHASE2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];

/// `true` at index `m` iff move `m` is legal within subgroup H.
pub const IS_PHASE2_MOVE: [bool; N_MOVE] = {
    let mut table = [false; N_MOVE];
    let mut i = 0;
    while i < PHASE2_MOVES.len() {
        table[PHASE2_MOVES[i]] = true;
        i += 1;
    }
    table
};
