use gridmind::{
    AlphaBetaAgent, ExpectimaxAgent, GameState, MinimaxAgent, ReflexAgent,
    maze::Direction,
    pursuit::{PursuitState, score_evaluation},
};

fn state(map: &str) -> PursuitState {
    map.parse().expect("test board must parse")
}

#[test]
fn minimax_avoids_the_pellet_next_to_the_chaser() {
    // Both neighbors hold a pellet, but eating the western one leaves the
    // player adjacent to the chaser, which then moves in for the kill.
    let game = state(
        "\
#######
#C.P..#
#######",
    );

    let minimax = MinimaxAgent::new(2, score_evaluation);
    assert_eq!(minimax.choose_action(&game).unwrap(), Direction::East);

    let alpha_beta = AlphaBetaAgent::new(2, score_evaluation);
    assert_eq!(alpha_beta.choose_action(&game).unwrap(), Direction::East);
}

#[test]
fn alpha_beta_matches_minimax_on_game_positions() {
    let maps = [
        "######\n#C.P.#\n######",
        "#######\n#P....#\n#.##C.#\n#...#.#\n#######",
        "#####\n#P..#\n#.C.#\n#...#\n#####",
    ];

    for map in maps {
        let game = state(map);
        for depth in 1..=3 {
            let plain = MinimaxAgent::new(depth, score_evaluation)
                .choose_action(&game)
                .unwrap();
            let pruned = AlphaBetaAgent::new(depth, score_evaluation)
                .choose_action(&game)
                .unwrap();
            assert_eq!(plain, pruned, "divergence at depth {depth} on:\n{map}");
        }
    }
}

#[test]
fn a_lone_player_clears_the_board() {
    let mut game = state(
        "\
#####
#P..#
#####",
    );
    let agent = AlphaBetaAgent::new(2, score_evaluation);

    let mut turns = 0;
    while !game.is_over() {
        assert!(turns < 20, "the agent must finish quickly");
        let action = agent.choose_action(&game).unwrap();
        game = game.successor(0, &action);
        turns += 1;
    }

    assert!(game.is_win());
    assert_eq!(turns, 2, "two pellets, two moves east");
    // Two pellets, the win bonus, minus two time penalties.
    assert_eq!(game.score(), 20.0 + 500.0 - 2.0);
}

#[test]
fn expectimax_still_grabs_a_guaranteed_win() {
    // One pellet to the east and no chaser in reach: every adversary model
    // agrees on the winning move.
    let game = state(
        "\
######
#P. C#
######",
    );
    let expectimax = ExpectimaxAgent::new(2, score_evaluation);
    assert_eq!(expectimax.choose_action(&game).unwrap(), Direction::East);
}

#[test]
fn reflex_agent_takes_the_obvious_pellet() {
    let mut reflex = ReflexAgent::with_seed(score_evaluation, 1);
    let game = state(
        "\
####
#P.#
####",
    );

    assert_eq!(reflex.choose_action(&game).unwrap(), Direction::East);
}

#[test]
fn seeded_reflex_tie_breaks_are_reproducible() {
    // Pellets north and south score identically; the choice is random but
    // must repeat under the same seed.
    let map = "\
###
#.#
#P#
#.#
###";
    let game = state(map);

    let mut first = ReflexAgent::with_seed(score_evaluation, 42);
    let mut second = ReflexAgent::with_seed(score_evaluation, 42);

    for _ in 0..10 {
        assert_eq!(
            first.choose_action(&game).unwrap(),
            second.choose_action(&game).unwrap()
        );
    }
}

#[test]
fn reseeding_restores_the_choice_sequence() {
    let map = "\
###
#.#
#P#
#.#
###";
    let game = state(map);

    let mut agent = ReflexAgent::with_seed(score_evaluation, 7);
    let initial: Vec<Direction> = (0..5).map(|_| agent.choose_action(&game).unwrap()).collect();

    agent.reseed(Some(7));
    let replayed: Vec<Direction> = (0..5).map(|_| agent.choose_action(&game).unwrap()).collect();

    assert_eq!(initial, replayed);
}
