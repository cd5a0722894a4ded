pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod store;
pub mod time;

pub use error::NinesError;
pub use game::{Game, HoleCount, PlayerCount};
pub use player::Player;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game::{Game, HoleCount, PlayerCount};

    /// Names `"P1"`, `"P2"`, ... for `n` seats.
    pub fn make_names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{}", i + 1)).collect()
    }

    /// A fresh game with named players, no handicaps, and default pars.
    pub fn new_game(player_count: PlayerCount, hole_count: HoleCount) -> Game {
        Game::new(
            player_count,
            hole_count,
            &make_names(player_count.get()),
            &[],
            &[],
        )
    }

    /// A fresh game where every player carries `handicap`.
    pub fn new_game_with_handicap(
        player_count: PlayerCount,
        hole_count: HoleCount,
        handicap: f64,
    ) -> Game {
        Game::new(
            player_count,
            hole_count,
            &make_names(player_count.get()),
            &vec![Some(handicap); player_count.get()],
            &[],
        )
    }

    /// Assert every player's total equals the sum of their points history.
    pub fn assert_totals_consistent(game: &Game) {
        for player in &game.players {
            let sum: u32 = player.points.iter().map(|&p| u32::from(p)).sum();
            assert_eq!(
                player.total_points, sum,
                "{} total must equal the sum of their points",
                player.name
            );
        }
    }
}
