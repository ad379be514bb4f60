#![cfg(test)]
use hanoi_common::puzzle::{DiskCount, Move, Peg, PegSet};
use hanoi_core::solver::{self, Moves};
use hanoi_core::towers::{self, Towers};

fn solve(n: u32, pegs: (u32, u32, u32)) -> Moves {
    let pegs = PegSet::try_from(pegs).expect("distinct pegs");
    solver::solve(DiskCount::from(n), pegs)
}

#[test]
fn move_count_is_two_to_the_n_minus_one() {
    for n in 0..=16u32 {
        let count = solve(n, (1, 2, 3)).count() as u64;
        assert_eq!(count, (1u64 << n) - 1, "wrong move count for {n} disks");
    }
}

#[test]
fn three_disk_reference_sequence() {
    let expected: Vec<Move> = [(1, 3), (1, 2), (3, 2), (1, 3), (2, 1), (2, 3), (1, 3)]
        .into_iter()
        .map(|(from, to)| Move::new(Peg(from), Peg(to)))
        .collect();

    let moves: Vec<Move> = solve(3, (1, 2, 3)).collect();
    assert_eq!(moves, expected);
}

/// Replays every generated sequence move by move, so a rule violation is
/// reported at the exact move that caused it.
#[test]
fn replay_never_breaks_the_size_rule() {
    for n in 0..=10u32 {
        let pegs = PegSet::default();
        let disks = DiskCount::from(n);
        let mut towers = Towers::new(disks, pegs);

        for mv in solver::solve(disks, pegs) {
            towers
                .apply(mv)
                .unwrap_or_else(|e| panic!("{n} disks: {e}"));
        }

        assert!(towers.is_solved(), "{n} disks: not solved");
        let expected: Vec<u32> = (1..=n).rev().collect();
        assert_eq!(towers.stack(pegs.to()), expected.as_slice());
    }
}

#[test]
fn replay_accepts_every_peg_ordering() {
    let orderings = [
        (1, 2, 3),
        (1, 3, 2),
        (2, 1, 3),
        (2, 3, 1),
        (3, 1, 2),
        (3, 2, 1),
    ];
    for labels in orderings {
        let pegs = PegSet::try_from(labels).unwrap();
        let disks = DiskCount::from(6);
        let applied = towers::replay(disks, pegs, solver::solve(disks, pegs))
            .unwrap_or_else(|e| panic!("{labels:?}: {e}"));
        assert_eq!(applied, 63);
    }
}

#[test]
fn relabeling_pegs_relabels_moves() {
    let relabel = |p: Peg| match p.0 {
        1 => Peg(10),
        2 => Peg(20),
        3 => Peg(30),
        other => panic!("unexpected peg {other}"),
    };

    let original: Vec<Move> = solve(7, (1, 2, 3)).collect();
    let relabeled: Vec<Move> = solve(7, (10, 20, 30)).collect();

    assert_eq!(original.len(), relabeled.len());
    for (a, b) in original.iter().zip(&relabeled) {
        assert_eq!(Move::new(relabel(a.from), relabel(a.to)), *b);
    }
}

#[test]
fn swapping_roles_mirrors_the_sequence() {
    // Exchanging source and destination while reversing the sequence and
    // every move gives back the original solution.
    let forward: Vec<Move> = solve(5, (1, 2, 3)).collect();
    let backward: Vec<Move> = solve(5, (3, 2, 1)).collect();

    let mirrored: Vec<Move> = backward
        .iter()
        .rev()
        .map(|m| Move::new(m.to, m.from))
        .collect();
    assert_eq!(forward, mirrored);
}

#[test]
fn largest_disk_moves_once_in_the_middle() {
    let n = 6;
    let moves: Vec<Move> = solve(n, (1, 2, 3)).collect();
    let middle = moves.len() / 2;

    assert_eq!(moves[middle], Move::new(Peg(1), Peg(3)));
    // Right before it moves, every smaller disk sits on the auxiliary peg.
    let first_half = &moves[..middle];
    let pegs = PegSet::default();
    let mut towers = Towers::new(DiskCount::from(n), pegs);
    for mv in first_half {
        towers.apply(*mv).unwrap();
    }
    assert_eq!(towers.stack(Peg(1)), &[n]);
    assert_eq!(towers.stack(Peg(2)).len() as u32, n - 1);
    assert!(towers.stack(Peg(3)).is_empty());
}
