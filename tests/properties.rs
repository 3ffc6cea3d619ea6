//! Property tests over random legal playouts.

use proptest::prelude::*;

use uttt_zero::core::{BoardTensor, GameRng, Player, FREE_PLAY};
use uttt_zero::games::ultimate::{encode, Board, SubBoard};
use uttt_zero::games::UltimateTicTacToe;
use uttt_zero::rules::Game;

/// Engine states along a random game, capped at `plies` moves.
fn board_playout(n: usize, seed: u64, plies: usize) -> Vec<Board> {
    let mut rng = GameRng::new(seed);
    let mut board = Board::new(n);
    let mut player = Player::One;
    let mut seen = vec![board.clone()];

    for _ in 0..plies {
        if board.result().is_some() {
            break;
        }
        let moves = board.legal_moves();
        let Some(&sq) = rng.choose(&moves) else {
            break;
        };
        board.execute_move(sq, player);
        player = player.opponent();
        seen.push(board.clone());
    }
    seen
}

/// Adapter states along a random game, including pass moves.
fn tensor_playout(game: &UltimateTicTacToe, seed: u64, plies: usize) -> Vec<(BoardTensor, Player)> {
    let mut rng = GameRng::new(seed);
    let mut board = game.init_board();
    let mut player = Player::One;
    let mut seen = vec![(board.clone(), player)];

    for _ in 0..plies {
        if game.is_terminal(&board, player) {
            break;
        }
        let legal = game.legal_actions(&board, player);
        let Some(&action) = rng.choose(&legal) else {
            break;
        };
        (board, player) = game.next_state(&board, player, action);
        seen.push((board.clone(), player));
    }
    seen
}

fn uniform_policy(game: &UltimateTicTacToe) -> Vec<f32> {
    vec![1.0 / game.action_size() as f32; game.action_size()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn legal_moves_are_board_moves_or_exactly_pass(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 0usize..120,
    ) {
        let game = UltimateTicTacToe::new(n);
        let pass = game.pass_action();
        for (board, player) in tensor_playout(&game, seed, plies) {
            let valid = game.valid_moves(&board, player);
            prop_assert_eq!(valid.len(), game.action_size());
            let board_moves = valid[..pass].iter().filter(|&&ok| ok).count();
            prop_assert!((board_moves > 0) != valid[pass]);
        }
    }

    #[test]
    fn every_legal_move_lands_on_an_empty_cell(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 0usize..80,
    ) {
        let boards = board_playout(n, seed, plies);
        let board = boards.last().unwrap();
        for sq in board.legal_squares() {
            prop_assert!(board.cell(sq).is_empty());
            let mut next = board.clone();
            next.execute_move(sq, Player::Two);
            prop_assert_eq!(next.move_count(), board.move_count() + 1);
        }
    }

    #[test]
    fn decode_inverts_encode(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 0usize..120,
    ) {
        for board in board_playout(n, seed, plies) {
            let tensor = encode(&board);
            let decoded = Board::try_from(&tensor).unwrap();

            for sb in SubBoard::all(n) {
                prop_assert_eq!(decoded.score(sb), board.score(sb));
                for sq in sb.squares(n) {
                    prop_assert_eq!(decoded.cell(sq), board.cell(sq));
                }
            }
            prop_assert_eq!(decoded.legal_squares(), board.legal_squares());
            prop_assert_eq!(encode(&decoded), tensor);
        }
    }

    #[test]
    fn score_query_is_idempotent(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 0usize..120,
    ) {
        for board in board_playout(n, seed, plies) {
            for sb in SubBoard::all(n) {
                let first = board.compute_score(sb);
                prop_assert_eq!(board.compute_score(sb), first);
                prop_assert_eq!(board.score(sb), first);
            }
        }
    }

    #[test]
    fn outcome_is_invariant_under_symmetries(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 0usize..120,
    ) {
        let game = UltimateTicTacToe::new(n);
        let policy = uniform_policy(&game);
        for (board, player) in tensor_playout(&game, seed, plies) {
            let expected = game.game_ended(&board, player);
            let images = game.symmetries(&board, &policy);
            prop_assert_eq!(images.len(), 8);
            for (image, pi) in images {
                prop_assert_eq!(game.game_ended(&image, player), expected);
                prop_assert_eq!(pi[game.pass_action()], policy[game.pass_action()]);
            }
        }
    }

    #[test]
    fn canonical_form_is_an_involution(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 0usize..120,
    ) {
        let game = UltimateTicTacToe::new(n);
        for (board, _) in tensor_playout(&game, seed, plies) {
            for player in Player::ALL {
                let once = game.canonical_form(&board, player);
                prop_assert_eq!(&game.canonical_form(&once, player), &board);

                for (a, b) in board.as_slice().iter().zip(once.as_slice()) {
                    if *a == FREE_PLAY {
                        prop_assert_eq!(*b, FREE_PLAY);
                    }
                }
            }
        }
    }

    #[test]
    fn keys_follow_tensor_equality(
        n in 2usize..=3,
        seed in any::<u64>(),
        plies in 1usize..60,
    ) {
        let game = UltimateTicTacToe::new(n);
        let states = tensor_playout(&game, seed, plies);
        for window in states.windows(2) {
            let (a, b) = (&window[0].0, &window[1].0);
            prop_assert_eq!(game.string_representation(a), game.string_representation(&a.clone()));
            prop_assert_eq!(a == b, game.string_representation(a) == game.string_representation(b));
        }
    }
}

#[test]
fn clones_do_not_alias() {
    let original = Board::new(3);
    let mut copy = original.clone();
    let sq = copy.legal_moves()[0];
    copy.execute_move(sq, Player::One);

    assert!(original.cell(sq).is_empty());
    assert_eq!(original.move_count(), 0);
    assert_eq!(copy.move_count(), 1);
}
