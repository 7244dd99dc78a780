//! Integration tests for standings: ordering, win/loss accounting, deletion.

use swiss_tournament_web::{
    compute_standings, MemoryRepository, PlayerId, Repository, TournamentError,
};

fn repo_with_players(names: &[&str]) -> (MemoryRepository, Vec<PlayerId>) {
    let mut repo = MemoryRepository::new();
    let ids = names
        .iter()
        .map(|n| repo.add_player(n).unwrap())
        .collect();
    (repo, ids)
}

#[test]
fn empty_player_set_yields_empty_standings() {
    let repo = MemoryRepository::new();
    assert_eq!(compute_standings(&repo).unwrap(), vec![]);
}

#[test]
fn players_without_matches_appear_with_zeros() {
    let (repo, _) = repo_with_players(&["Ada", "Bea"]);
    let standings = compute_standings(&repo).unwrap();
    assert_eq!(standings.len(), 2);
    for r in &standings {
        assert_eq!(r.wins, 0);
        assert_eq!(r.matches, 0);
    }
}

#[test]
fn standings_sorted_descending_by_wins() {
    // Register in reverse of the expected ranking to rule out insertion-order luck.
    let (mut repo, ids) = repo_with_players(&["Cora", "Bea", "Ada"]);
    let (cora, bea, ada) = (ids[0], ids[1], ids[2]);
    repo.add_match(ada, cora).unwrap();
    repo.add_match(ada, bea).unwrap();
    repo.add_match(bea, cora).unwrap();

    let standings = compute_standings(&repo).unwrap();
    let names: Vec<&str> = standings.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Ada", "Bea", "Cora"]);
    assert_eq!(standings[0].wins, 2);
    assert_eq!(standings[1].wins, 1);
    assert_eq!(standings[2].wins, 0);
}

#[test]
fn equal_wins_keep_registration_order() {
    let (mut repo, ids) = repo_with_players(&["Ada", "Bea", "Cora", "Dan"]);
    // Ada and Bea each beat a distinct opponent: two players tied on 1 win.
    repo.add_match(ids[0], ids[2]).unwrap();
    repo.add_match(ids[1], ids[3]).unwrap();

    let standings = compute_standings(&repo).unwrap();
    let names: Vec<&str> = standings.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Ada", "Bea", "Cora", "Dan"]);
}

#[test]
fn win_loss_accounting_over_repeated_matches() {
    let (mut repo, ids) = repo_with_players(&["Winnie", "Lou"]);
    for _ in 0..3 {
        repo.add_match(ids[0], ids[1]).unwrap();
    }

    let standings = compute_standings(&repo).unwrap();
    let winnie = standings.iter().find(|r| r.name == "Winnie").unwrap();
    let lou = standings.iter().find(|r| r.name == "Lou").unwrap();
    assert_eq!((winnie.wins, winnie.matches), (3, 3));
    assert_eq!((lou.wins, lou.matches), (0, 3));
}

#[test]
fn repeated_reads_are_identical() {
    let (mut repo, ids) = repo_with_players(&["Ada", "Bea", "Cora"]);
    repo.add_match(ids[1], ids[0]).unwrap();

    let first = compute_standings(&repo).unwrap();
    let second = compute_standings(&repo).unwrap();
    assert_eq!(first, second);
}

#[test]
fn clear_matches_resets_all_records() {
    let (mut repo, ids) = repo_with_players(&["Ada", "Bea"]);
    repo.add_match(ids[0], ids[1]).unwrap();
    repo.clear_matches().unwrap();

    for r in compute_standings(&repo).unwrap() {
        assert_eq!(r.wins, 0);
        assert_eq!(r.matches, 0);
    }
    assert_eq!(repo.count_players().unwrap(), 2);
}

#[test]
fn clear_players_empties_the_count() {
    let (mut repo, _) = repo_with_players(&["Ada", "Bea", "Cora"]);
    assert_eq!(repo.count_players().unwrap(), 3);
    repo.clear_players().unwrap();
    assert_eq!(repo.count_players().unwrap(), 0);
}

#[test]
fn match_with_unknown_player_is_rejected() {
    let (mut repo, ids) = repo_with_players(&["Ada"]);
    assert_eq!(
        repo.add_match(ids[0], 999),
        Err(TournamentError::PlayerNotFound(999))
    );
    assert_eq!(
        repo.add_match(999, ids[0]),
        Err(TournamentError::PlayerNotFound(999))
    );
}
