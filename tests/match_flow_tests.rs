//! End-to-end match flow: scripted rounds, seeded full matches, and the
//! round-to-round handoff invariants.

use dice_arena::{
    FixedRolls, Leaderboard, Match, MatchConfig, MatchError, PlayerId,
};

/// Two players, one die, first win ends the match. "Me" is the second slot.
fn duel_config() -> MatchConfig {
    MatchConfig::new(2, 1).with_max_wins(1)
}

#[test]
fn test_scripted_duel_round() {
    let roller = FixedRolls::new([5, 2]);
    let mut game = Match::with_roller(duel_config(), roller).unwrap();

    let a = PlayerId::new(0);
    let b = PlayerId::new(1);
    assert_eq!(game.roster()[a].name(), "Player1");
    assert_eq!(game.roster()[b].name(), "Me");

    assert_eq!(game.take_turn().unwrap(), a);
    assert_eq!(game.take_turn().unwrap(), b);

    let round = game.current_round();
    assert!(!round.has_pending_players());
    assert_eq!(round.leaderboard(game.roster()), vec![a, b]);
    assert_eq!(round.last_roll_of(game.roster(), a).unwrap(), &[5]);
    assert_eq!(round.round_score_of(game.roster(), a).unwrap(), 5);
    assert_eq!(round.round_score_of(game.roster(), b).unwrap(), 2);
    assert_eq!(round.winner(), Some(a));
    // Loser goes first next time.
    assert_eq!(round.next_turn_order().unwrap(), &[b, a]);

    assert_eq!(game.roster()[a].total_wins(), 1);
    assert_eq!(game.roster()[b].total_wins(), 0);
    assert!(game.is_over());
}

#[test]
fn test_turn_after_drained_queue_fails_and_changes_nothing() {
    let roller = FixedRolls::new([5, 2]);
    let mut game = Match::with_roller(duel_config(), roller).unwrap();

    game.take_turn().unwrap();
    game.take_turn().unwrap();
    let wins_before: Vec<_> = game.roster().iter().map(|(_, p)| p.total_wins()).collect();

    assert_eq!(game.take_turn().unwrap_err(), MatchError::NoPlayersLeft);

    let wins_after: Vec<_> = game.roster().iter().map(|(_, p)| p.total_wins()).collect();
    assert_eq!(wins_before, wins_after);
}

#[test]
fn test_zero_player_match_rejected() {
    let err = Match::new(MatchConfig::new(0, 5).with_max_wins(7), 1).unwrap_err();
    assert!(matches!(err, MatchError::InvalidConfiguration { .. }));
}

#[test]
fn test_all_tied_round_goes_to_first_created() {
    let config = MatchConfig::new(3, 2).with_max_wins(7);
    let roller = FixedRolls::new([3, 3, 3, 3, 3, 3]);
    let mut game = Match::with_roller(config, roller).unwrap();

    while game.current_round().has_pending_players() {
        game.take_turn().unwrap();
    }

    let round = game.current_round();
    assert_eq!(round.winner(), Some(PlayerId::new(0)));
    // With every score tied the ranking is creation order, so the next
    // round runs in exact reverse.
    assert_eq!(
        round.next_turn_order().unwrap(),
        &[PlayerId::new(2), PlayerId::new(1), PlayerId::new(0)]
    );
}

#[test]
fn test_full_default_match_runs_to_threshold() {
    let mut game = Match::new(MatchConfig::default(), 42).unwrap();
    let roster_size = game.roster().player_count();
    let max_wins = game.config().max_wins;
    let mut rounds_played = 0u32;

    while !game.is_over() {
        let mut wins_before: Vec<_> =
            game.roster().iter().map(|(_, p)| p.total_wins()).collect();

        let mut turns = 0;
        while game.current_round().has_pending_players() {
            game.take_turn().unwrap();
            turns += 1;
        }
        assert_eq!(turns, roster_size);
        rounds_played += 1;

        // Exactly one player gained exactly one win.
        let winner = game.current_round().winner().unwrap();
        wins_before[winner.index()] += 1;
        let wins_after: Vec<_> = game.roster().iter().map(|(_, p)| p.total_wins()).collect();
        assert_eq!(wins_before, wins_after);

        // The handoff order is a permutation of the roster.
        let mut next = game.current_round().next_turn_order().unwrap().to_vec();
        next.sort_by_key(|p| p.index());
        let creation: Vec<_> = game.roster().player_ids().collect();
        assert_eq!(next, creation);

        game.start_next_round();
        assert!(rounds_played < 10_000, "match failed to terminate");
    }

    let leader = game.leaderboard()[0];
    assert_eq!(game.roster()[leader].total_wins(), max_wins);
    // Nobody overshoots: the match stops at the threshold.
    assert!(game
        .roster()
        .iter()
        .all(|(_, p)| p.total_wins() <= max_wins));
    assert!(rounds_played >= max_wins);
}

#[test]
fn test_same_seed_replays_identically() {
    let run = |seed: u64| {
        let mut game = Match::new(MatchConfig::default(), seed).unwrap();
        let mut winners = Vec::new();
        while !game.is_over() {
            while game.current_round().has_pending_players() {
                game.take_turn().unwrap();
            }
            winners.push(game.current_round().winner().unwrap());
            game.start_next_round();
        }
        (winners, game.roster().clone())
    };

    let (winners1, roster1) = run(42);
    let (winners2, roster2) = run(42);
    assert_eq!(winners1, winners2);
    assert_eq!(roster1, roster2);
}

#[test]
fn test_leaderboard_starts_in_creation_order_with_zero_wins() {
    let game = Match::new(MatchConfig::new(5, 3), 7).unwrap();

    let creation: Vec<_> = game.roster().player_ids().collect();
    assert_eq!(game.leaderboard(), creation);
    for (_, player) in game.roster().iter() {
        assert_eq!(player.total_wins(), 0);
    }
    assert!(!game.is_over());
}
