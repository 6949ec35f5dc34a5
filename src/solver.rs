//! Two-phase IDA* search (C6/C7): phase 1 brings the cube into the
//! subgroup H = <U,D,L2,R2,F2,B2>, phase 2 solves within H.
use std::time::{Duration, Instant};

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{Move, MoveTables, ALL_MOVES};
use crate::pruning::{PruningTables, PARITY_MOVE};

pub struct SolverTables {
    pub mv: MoveTables,
    pub pr: PruningTables,
}

impl SolverTables {
    pub fn new() -> Result<Self, Error> {
        let mv = MoveTables::new()?;
        let pr = PruningTables::new(&mv)?;
        Ok(Self { mv, pr })
    }
}

/// Forbid same-axis-consecutive moves, and an opposite-axis move that
/// follows a lower-indexed axis of the same pair (U before D, not D before
/// U; R before L; F before B) -- this is the only redundancy IDA* prunes
/// structurally, everything else is left to the heuristic.
fn forbidden(prev: Option<Move>, m: Move) -> bool {
    match prev {
        None => false,
        Some(p) => {
            if p.axis() == m.axis() {
                return true;
            }
            p.axis() % 3 == m.axis() % 3 && p.axis() > m.axis()
        }
    }
}

#[derive(Clone, Copy)]
struct Phase1State {
    fr_to_br: u16,
    twist: u16,
    flip: u16,
    urf_to_dlf: u16,
    ur_to_ul: u16,
    ub_to_df: u16,
    parity: u8,
}

impl Phase1State {
    fn from_cube(cc: &CubieCube) -> Self {
        Self {
            fr_to_br: cc.get_fr_to_br(),
            twist: cc.get_twist(),
            flip: cc.get_flip(),
            urf_to_dlf: cc.get_urf_to_dlf(),
            ur_to_ul: cc.get_ur_to_ul(),
            ub_to_df: cc.get_ub_to_df(),
            parity: cc.parity(),
        }
    }

    fn apply(&self, mv: &MoveTables, m: Move) -> Self {
        let i = m as usize;
        Self {
            fr_to_br: mv.fr_to_br[N_MOVE * self.fr_to_br as usize + i],
            twist: mv.twist[N_MOVE * self.twist as usize + i],
            flip: mv.flip[N_MOVE * self.flip as usize + i],
            urf_to_dlf: mv.urf_to_dlf[N_MOVE * self.urf_to_dlf as usize + i],
            ur_to_ul: mv.ur_to_ul[N_MOVE * self.ur_to_ul as usize + i],
            ub_to_df: mv.ub_to_df[N_MOVE * self.ub_to_df as usize + i],
            parity: PARITY_MOVE[self.parity as usize][i],
        }
    }

    fn is_in_h(&self) -> bool {
        self.twist == 0 && self.flip == 0 && self.fr_to_br < 24
    }
}

#[derive(Clone, Copy)]
struct Phase2State {
    slice2: u16,
    urf_to_dlf: u16,
    ur_to_df: u16,
    parity: u8,
}

impl Phase2State {
    fn apply(&self, mv: &MoveTables, m: Move) -> Self {
        let i = m as usize;
        Self {
            slice2: mv.fr_to_br[N_MOVE * self.slice2 as usize + i] % 24,
            urf_to_dlf: mv.urf_to_dlf[N_MOVE * self.urf_to_dlf as usize + i],
            ur_to_df: mv.ur_to_df[N_MOVE * self.ur_to_df as usize + i],
            parity: PARITY_MOVE[self.parity as usize][i],
        }
    }

    fn is_solved(&self) -> bool {
        self.slice2 == 0 && self.urf_to_dlf == 0 && self.ur_to_df == 0 && self.parity == 0
    }
}

fn search_phase2(
    tables: &SolverTables,
    state: Phase2State,
    sofar: &mut Vec<Move>,
    togo: u16,
    deadline: Instant,
) -> Result<Option<()>, Error> {
    if Instant::now() > deadline {
        return Err(Error::TimeOut);
    }
    if togo == 0 {
        return Ok(state.is_solved().then_some(()));
    }
    for &mi in PHASE2_MOVES.iter() {
        let m = ALL_MOVES[mi];
        if forbidden(sofar.last().copied(), m) {
            continue;
        }
        let next = state.apply(&tables.mv, m);
        let estimate = tables
            .pr
            .phase2_estimate(next.slice2, next.urf_to_dlf, next.ur_to_df, next.parity);
        if estimate as u16 >= togo {
            continue;
        }
        sofar.push(m);
        if search_phase2(tables, next, sofar, togo - 1, deadline)?.is_some() {
            return Ok(Some(()));
        }
        sofar.pop();
    }
    Ok(None)
}

fn search_phase1(
    tables: &SolverTables,
    state: Phase1State,
    sofar: &mut Vec<Move>,
    togo1: u16,
    max_total: usize,
    deadline: Instant,
) -> Result<Option<Vec<Move>>, Error> {
    if Instant::now() > deadline {
        return Err(Error::TimeOut);
    }
    if togo1 == 0 {
        if !state.is_in_h() {
            return Ok(None);
        }
        let phase2_start = Phase2State {
            slice2: state.fr_to_br,
            urf_to_dlf: state.urf_to_dlf,
            ur_to_df: crate::coord::merge_ur_to_ul_and_ub_to_df(state.ur_to_ul, state.ub_to_df),
            parity: state.parity,
        };
        let dist2 = tables.pr.phase2_estimate(
            phase2_start.slice2,
            phase2_start.urf_to_dlf,
            phase2_start.ur_to_df,
            phase2_start.parity,
        ) as u16;
        let remaining = max_total.saturating_sub(sofar.len());
        let mut phase2_moves = Vec::new();
        for togo2 in dist2..=remaining as u16 {
            phase2_moves.clear();
            if search_phase2(tables, phase2_start, &mut phase2_moves, togo2, deadline)?.is_some() {
                let mut solution = sofar.clone();
                solution.extend(phase2_moves);
                return Ok(Some(solution));
            }
        }
        return Ok(None);
    }
    for m in ALL_MOVES {
        if forbidden(sofar.last().copied(), m) {
            continue;
        }
        let next = state.apply(&tables.mv, m);
        let slice = next.fr_to_br / 24;
        let estimate = tables.pr.phase1_estimate(slice, next.twist, next.flip);
        if estimate as u16 >= togo1 {
            continue;
        }
        sofar.push(m);
        if let Some(solution) = search_phase1(tables, next, sofar, togo1 - 1, max_total, deadline)? {
            return Ok(Some(solution));
        }
        sofar.pop();
    }
    Ok(None)
}

/// Find a solution of at most `max_depth` moves, or time out after
/// `timeout`. Returns the first solution found by iterative deepening,
/// which is not guaranteed to be shortest but is admissibly bounded by
/// the pruning tables at every step.
pub fn search(
    tables: &SolverTables,
    cc: &CubieCube,
    max_depth: usize,
    timeout: Duration,
) -> Result<Vec<Move>, Error> {
    cc.verify()?;
    let deadline = Instant::now() + timeout;
    let state = Phase1State::from_cube(cc);
    let dist1 = tables
        .pr
        .phase1_estimate(state.fr_to_br / 24, state.twist, state.flip) as usize;
    for togo1 in dist1..=max_depth {
        let mut sofar = Vec::new();
        if let Some(solution) =
            search_phase1(tables, state, &mut sofar, togo1 as u16, max_depth, deadline)?
        {
            return Ok(solution);
        }
    }
    Err(Error::DepthExceeded)
}

/// Solve a cube given as a 54-character facelet string.
pub fn solve(facelets: &str, max_depth: usize, timeout: Duration) -> Result<String, Error> {
    let face = FaceCube::try_from(facelets)?;
    let cc = CubieCube::try_from(&face)?;
    let tables = SolverTables::new()?;
    let moves = search(&tables, &cc, max_depth, timeout)?;
    crate::scramble::scramble_to_str(&moves)
}

/// Move-count statistics of a solution, per the outer-turn and
/// quarter-turn metrics.
#[derive(Debug, PartialEq, Eq)]
pub struct SolutionStats {
    pub move_count: usize,
    pub face_turn_metric: usize,
    pub quarter_turn_metric: usize,
}

/// Analyze a solution's length under both common cube metrics.
pub fn analyze(moves: &[Move]) -> SolutionStats {
    let quarter_turn_metric = moves
        .iter()
        .map(|m| if m.power() == 2 { 2 } else { 1 })
        .sum();
    SolutionStats {
        move_count: moves.len(),
        face_turn_metric: moves.len(),
        quarter_turn_metric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;

    #[test]
    fn solved_cube_needs_no_moves() {
        let tables = SolverTables::new().unwrap();
        let solution = search(&tables, &SOLVED_CUBIE_CUBE, 20, Duration::from_secs(60)).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn single_move_scramble_solves_in_one_move() {
        let tables = SolverTables::new().unwrap();
        let scrambled = SOLVED_CUBIE_CUBE.apply_move(Move::R);
        let solution = search(&tables, &scrambled, 20, Duration::from_secs(60)).unwrap();
        assert_eq!(solution, vec![Move::R3]);
    }

    #[test]
    fn analyze_counts_half_turns_twice_in_qtm() {
        let stats = analyze(&[Move::R, Move::U2, Move::F3]);
        assert_eq!(stats.move_count, 3);
        assert_eq!(stats.face_turn_metric, 3);
        assert_eq!(stats.quarter_turn_metric, 4);
    }
}
