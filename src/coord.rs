//! Coordinate encoder (C3): bijections between cubie state and the nine
//! classic Kociemba coordinates. Each has a `get` (cubie -> index) and a
//! `set` (index -> cubie, remaining degrees of freedom canonical), used by
//! move-table construction in `moves.rs`.
use crate::cubie::{CubieCube, BL, BR, DB, DF, DL, DR, FL, FR, N_CORNERS, N_EDGES, UB, UF, UL, UR};

/// Binomial coefficient C(n, k).
pub fn c_nk(n: u32, k: u32) -> u32 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result as u32
}

fn factorial(n: u32) -> u32 {
    (1..=n).product()
}

fn rank_combination(slots: &[usize]) -> u32 {
    slots
        .iter()
        .enumerate()
        .map(|(i, &s)| c_nk(s as u32, (i + 1) as u32))
        .sum()
}

fn unrank_combination(mut a: u32, k: usize, n: usize) -> Vec<usize> {
    let mut slots = vec![0usize; k];
    let mut upper = n;
    for i in (1..=k).rev() {
        let mut best = i - 1;
        let mut jj = i - 1;
        while jj < upper {
            if c_nk(jj as u32, i as u32) <= a {
                best = jj;
                jj += 1;
            } else {
                break;
            }
        }
        slots[i - 1] = best;
        a -= c_nk(best as u32, i as u32);
        upper = best;
    }
    slots
}

/// Combinadic rank where the `k`-subset occupying the *top* `k` of `n`
/// slots ranks 0, rather than the bottom `k` -- used for the UD-slice
/// edges (FR,FL,BL,BR), which solve into the high end of the 12-slot
/// edge array. Ranks by the complement `n-1-slot`, scanned from the far
/// end, matching `adungaos-rcuber`'s `get_slice`/`set_slice`.
fn rank_combination_hi(slots: &[usize], n: usize) -> u32 {
    slots
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &s)| c_nk((n - 1 - s) as u32, (i + 1) as u32))
        .sum()
}

fn unrank_combination_hi(a: u32, k: usize, n: usize) -> Vec<usize> {
    let mut slots: Vec<usize> = unrank_combination(a, k, n)
        .iter()
        .map(|&c| n - 1 - c)
        .collect();
    slots.reverse();
    slots
}

/// Lehmer-code rank of a permutation of `0..k`.
fn rank_permutation(rel: &[u8]) -> u32 {
    let k = rel.len();
    let mut used = vec![false; k];
    let mut rank = 0u32;
    for i in 0..k {
        let mut smaller = 0u32;
        for v in 0..rel[i] {
            if !used[v as usize] {
                smaller += 1;
            }
        }
        rank += smaller * factorial((k - 1 - i) as u32);
        used[rel[i] as usize] = true;
    }
    rank
}

/// Lehmer-code unrank: the permutation of `0..k` with rank `b`.
fn unrank_permutation(mut b: u32, k: usize) -> Vec<u8> {
    let mut items: Vec<u8> = (0..k as u8).collect();
    let mut perm = vec![0u8; k];
    for i in 0..k {
        let f = factorial((k - 1 - i) as u32);
        let idx = (b / f) as usize;
        b %= f;
        perm[i] = items.remove(idx);
    }
    perm
}

/// Rank of the ordered placement of the `k` identities `[piece_lo, piece_lo+k)`
/// within `perm`, among all of `perm`'s slots.
fn get_rank(perm: &[u8], piece_lo: u8, k: usize) -> u32 {
    let mut slots = Vec::with_capacity(k);
    let mut rel = Vec::with_capacity(k);
    for (j, &v) in perm.iter().enumerate() {
        if v >= piece_lo && (v as usize) < piece_lo as usize + k {
            slots.push(j);
            rel.push(v - piece_lo);
        }
    }
    rank_combination(&slots) * factorial(k as u32) + rank_permutation(&rel)
}

/// Inverse of `get_rank`: a full `n`-slot array with the `k` tracked
/// identities placed per `idx`, and every identity outside
/// `[piece_lo, piece_lo+k)` filled ascending-by-value into the remaining
/// slots ascending-by-position -- the canonical filler spec.md §4.3 allows.
fn set_from_rank(idx: u32, n: usize, piece_lo: u8, k: usize) -> Vec<u8> {
    let fact = factorial(k as u32);
    let a = idx / fact;
    let b = idx % fact;
    let slots = unrank_combination(a, k, n);
    let rel = unrank_permutation(b, k);
    let mut arr: Vec<Option<u8>> = vec![None; n];
    for i in 0..k {
        arr[slots[i]] = Some(piece_lo + rel[i]);
    }
    let mut fillers = (0..n as u8).filter(|&x| x < piece_lo || x >= piece_lo + k as u8);
    arr.into_iter()
        .map(|slot| slot.unwrap_or_else(|| fillers.next().unwrap()))
        .collect()
}

/// `FRtoBR`-flavored `get_rank`: combination half uses the complement
/// convention (`rank_combination_hi`), permutation half unchanged.
fn get_rank_hi(perm: &[u8], piece_lo: u8, k: usize) -> u32 {
    let mut slots = Vec::with_capacity(k);
    let mut rel = Vec::with_capacity(k);
    for (j, &v) in perm.iter().enumerate() {
        if v >= piece_lo && (v as usize) < piece_lo as usize + k {
            slots.push(j);
            rel.push(v - piece_lo);
        }
    }
    rank_combination_hi(&slots, perm.len()) * factorial(k as u32) + rank_permutation(&rel)
}

fn set_from_rank_hi(idx: u32, n: usize, piece_lo: u8, k: usize) -> Vec<u8> {
    let fact = factorial(k as u32);
    let a = idx / fact;
    let b = idx % fact;
    let slots = unrank_combination_hi(a, k, n);
    let rel = unrank_permutation(b, k);
    let mut arr: Vec<Option<u8>> = vec![None; n];
    for i in 0..k {
        arr[slots[i]] = Some(piece_lo + rel[i]);
    }
    let mut fillers = (0..n as u8).filter(|&x| x < piece_lo || x >= piece_lo + k as u8);
    arr.into_iter()
        .map(|slot| slot.unwrap_or_else(|| fillers.next().unwrap()))
        .collect()
}

impl CubieCube {
    /// `twist`: base-3 number of `co[0..7]` (co[7] determined by the rest).
    pub fn get_twist(&self) -> u16 {
        let mut twist = 0u16;
        for i in 0..N_CORNERS - 1 {
            twist = twist * 3 + self.co[i] as u16;
        }
        twist
    }

    pub fn set_twist(&mut self, mut twist: u16) {
        let mut parity = 0u32;
        for i in (0..N_CORNERS - 1).rev() {
            self.co[i] = (twist % 3) as u8;
            parity += self.co[i] as u32;
            twist /= 3;
        }
        self.co[N_CORNERS - 1] = ((3 - parity % 3) % 3) as u8;
    }

    /// `flip`: base-2 number of `eo[0..10]` (eo[11] determined by the rest).
    pub fn get_flip(&self) -> u16 {
        let mut flip = 0u16;
        for i in 0..N_EDGES - 1 {
            flip = flip * 2 + self.eo[i] as u16;
        }
        flip
    }

    pub fn set_flip(&mut self, mut flip: u16) {
        let mut parity = 0u32;
        for i in (0..N_EDGES - 1).rev() {
            self.eo[i] = (flip % 2) as u8;
            parity += self.eo[i] as u32;
            flip /= 2;
        }
        self.eo[N_EDGES - 1] = ((2 - parity % 2) % 2) as u8;
    }

    /// `slice`: combinatorial rank (C(12,4)) of the positions of the 4
    /// UD-slice edges, treating them as indistinguishable. The solved
    /// cube has them in the top 4 slots, so this ranks by complement
    /// (see `rank_combination_hi`), not the raw ascending slot index.
    pub fn get_slice(&self) -> u16 {
        let slots: Vec<usize> = self
            .ep
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v >= FR)
            .map(|(j, _)| j)
            .collect();
        rank_combination_hi(&slots, N_EDGES) as u16
    }

    /// `FRtoBR`: ordered placement of {FR, FL, BL, BR} among 12 slots.
    pub fn get_fr_to_br(&self) -> u16 {
        get_rank_hi(&self.ep, FR, 4) as u16
    }

    pub fn set_fr_to_br(&mut self, idx: u16) {
        let ep = set_from_rank_hi(idx as u32, N_EDGES, FR, 4);
        self.ep.copy_from_slice(&ep);
        self.eo = [0; N_EDGES];
    }

    /// `URFtoDLF`: ordered placement of {URF,UFL,ULB,UBR,DFR,DLF} among 8 corner slots.
    pub fn get_urf_to_dlf(&self) -> u16 {
        get_rank(&self.cp, 0, 6) as u16
    }

    pub fn set_urf_to_dlf(&mut self, idx: u16) {
        let cp = set_from_rank(idx as u32, N_CORNERS, 0, 6);
        self.cp.copy_from_slice(&cp);
        self.co = [0; N_CORNERS];
    }

    /// `URtoUL`: ordered placement of {UR,UF,UL} among 12 edge slots.
    pub fn get_ur_to_ul(&self) -> u16 {
        get_rank(&self.ep, UR, 3) as u16
    }

    pub fn set_ur_to_ul(&mut self, idx: u16) {
        let ep = set_from_rank(idx as u32, N_EDGES, UR, 3);
        self.ep.copy_from_slice(&ep);
        self.eo = [0; N_EDGES];
    }

    /// `UBtoDF`: ordered placement of {UB,DR,DF} among 12 edge slots.
    pub fn get_ub_to_df(&self) -> u16 {
        get_rank(&self.ep, UB, 3) as u16
    }

    pub fn set_ub_to_df(&mut self, idx: u16) {
        let ep = set_from_rank(idx as u32, N_EDGES, UB, 3);
        self.ep.copy_from_slice(&ep);
        self.eo = [0; N_EDGES];
    }

    /// `URtoDF`: ordered placement of {UR,UF,UL,UB,DR,DF} among the 8 U/D
    /// edge slots; phase-2 only (the 4 slice edges occupy slots 8..12).
    pub fn get_ur_to_df(&self) -> u16 {
        get_rank(&self.ep[0..8], UR, 6) as u16
    }

    pub fn set_ur_to_df(&mut self, idx: u16) {
        let head = set_from_rank(idx as u32, 8, UR, 6);
        self.ep[0..8].copy_from_slice(&head);
        self.ep[8..12].copy_from_slice(&[FR, FL, BL, BR]);
        self.eo = [0; N_EDGES];
    }

    /// Corner permutation parity (== edge permutation parity for legal cubes).
    pub fn parity(&self) -> u8 {
        self.corner_parity()
    }
}

/// Combine `URtoUL` and `UBtoDF` (both < 336, i.e. all six edges land among
/// the 8 U/D slots) into `URtoDF`, used at the phase-1/phase-2 boundary.
pub fn merge_ur_to_ul_and_ub_to_df(ur_to_ul: u16, ub_to_df: u16) -> u16 {
    let decoded1 = set_from_rank(ur_to_ul as u32, N_EDGES, UR, 3);
    let decoded2 = set_from_rank(ub_to_df as u32, N_EDGES, UB, 3);
    let mut head = [0u8; 8];
    let mut filled = [false; 8];
    for slot in 0..8 {
        if decoded1[slot] < 3 {
            head[slot] = decoded1[slot];
            filled[slot] = true;
        }
    }
    for slot in 0..8 {
        if (UB..=DF).contains(&decoded2[slot]) {
            head[slot] = decoded2[slot];
            filled[slot] = true;
        }
    }
    let mut fillers = [DL, DB].into_iter();
    for slot in 0..8 {
        if !filled[slot] {
            head[slot] = fillers.next().unwrap();
        }
    }
    get_rank(&head, UR, 6) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::{CubieCube, R_MOVE, SOLVED_CUBIE_CUBE};

    #[test]
    fn solved_coordinates_are_zero() {
        let c = SOLVED_CUBIE_CUBE;
        assert_eq!(c.get_twist(), 0);
        assert_eq!(c.get_flip(), 0);
        assert_eq!(c.get_slice(), 0);
        assert_eq!(c.get_fr_to_br(), 0);
        assert_eq!(c.get_urf_to_dlf(), 0);
        assert_eq!(c.get_ur_to_ul(), 0);
        assert_eq!(c.get_ur_to_df(), 0);
        assert_eq!(c.parity(), 0);
    }

    #[test]
    fn ub_to_df_of_solved_is_114() {
        assert_eq!(SOLVED_CUBIE_CUBE.get_ub_to_df(), 114);
    }

    #[test]
    fn twist_round_trips() {
        for i in [0u16, 1, 5, 2186] {
            let mut c = CubieCube::default();
            c.set_twist(i);
            assert_eq!(c.get_twist(), i);
        }
    }

    #[test]
    fn flip_round_trips() {
        for i in [0u16, 1, 2047] {
            let mut c = CubieCube::default();
            c.set_flip(i);
            assert_eq!(c.get_flip(), i);
        }
    }

    #[test]
    fn fr_to_br_round_trips() {
        for i in [0u16, 1, 100, 11879] {
            let mut c = CubieCube::default();
            c.set_fr_to_br(i);
            assert_eq!(c.get_fr_to_br(), i);
        }
    }

    #[test]
    fn urf_to_dlf_round_trips() {
        for i in [0u16, 1, 100, 20159] {
            let mut c = CubieCube::default();
            c.set_urf_to_dlf(i);
            assert_eq!(c.get_urf_to_dlf(), i);
        }
    }

    #[test]
    fn slice_is_fr_to_br_div_24() {
        let mut c = CubieCube::default();
        c.set_fr_to_br(500);
        assert_eq!(c.get_slice(), c.get_fr_to_br() / 24);
    }

    #[test]
    fn r_move_changes_twist() {
        let c = SOLVED_CUBIE_CUBE.compose(&R_MOVE);
        assert_ne!(c.get_twist(), 0);
    }

    #[test]
    fn merge_recovers_ur_to_df_after_phase1() {
        let c = SOLVED_CUBIE_CUBE;
        let merged = merge_ur_to_ul_and_ub_to_df(c.get_ur_to_ul(), c.get_ub_to_df());
        assert_eq!(merged, c.get_ur_to_df());
    }
}
