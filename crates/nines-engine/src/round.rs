//! Match progression: creating a game, recording holes, and correcting
//! holes already played.
//!
//! Every operation takes a `&Game` and returns a new `Game`. Callers persist
//! the returned value and derive the next transition from it.

use nines_core::NinesError;
use nines_core::game::{Game, HoleCount, PlayerCount};

use crate::scoring::calculate_points;

/// Start a new game. Blank names become `"Player N"`, missing pars are 4.
pub fn create_game(
    player_count: PlayerCount,
    hole_count: HoleCount,
    player_names: &[String],
    handicaps: &[Option<f64>],
    pars: &[u8],
) -> Game {
    let game = Game::new(player_count, hole_count, player_names, handicaps, pars);
    tracing::debug!(
        game_id = %game.id,
        players = player_count.get(),
        holes = hole_count.get(),
        "Created game"
    );
    game
}

fn check_len(game: &Game, scores: &[u32]) -> Result<(), NinesError> {
    let expected = game.player_count.get();
    if scores.len() != expected {
        return Err(NinesError::InvalidInput {
            expected,
            actual: scores.len(),
        });
    }
    Ok(())
}

/// Record the current hole for every player and advance.
///
/// A completed game is returned unchanged. Otherwise `scores` must hold one
/// entry per player. On the last hole `is_complete` is set and
/// `current_hole` stays at the hole count.
pub fn add_hole_scores(game: &Game, scores: &[u32]) -> Result<Game, NinesError> {
    if game.is_complete {
        tracing::debug!(game_id = %game.id, "Ignoring scores for completed game");
        return Ok(game.clone());
    }
    check_len(game, scores)?;
    let points = calculate_points(scores, game.player_count)?;

    let mut next = game.clone();
    for ((player, &score), &award) in next.players.iter_mut().zip(scores).zip(&points) {
        player.scores.push(score);
        player.points.push(award);
        player.recompute_total();
    }

    let hole_count = game.hole_count.get();
    let advanced = game.current_hole.saturating_add(1);
    next.is_complete = advanced > hole_count;
    next.current_hole = advanced.min(hole_count);

    tracing::debug!(
        game_id = %game.id,
        hole = game.current_hole,
        ?points,
        complete = next.is_complete,
        "Recorded hole"
    );
    Ok(next)
}

/// Replace the scores of an already-played hole and recompute its points.
///
/// Only holes `1..current_hole` of an incomplete game can be edited; other
/// hole numbers return the game unchanged. `current_hole` and `is_complete`
/// are never touched. Totals are resummed from the full points history.
pub fn edit_hole_scores(
    game: &Game,
    hole_number: u8,
    new_scores: &[u32],
) -> Result<Game, NinesError> {
    if game.is_complete || hole_number < 1 || hole_number >= game.current_hole {
        tracing::debug!(
            game_id = %game.id,
            hole = hole_number,
            current_hole = game.current_hole,
            complete = game.is_complete,
            "Ignoring edit outside the editable window"
        );
        return Ok(game.clone());
    }
    check_len(game, new_scores)?;
    let points = calculate_points(new_scores, game.player_count)?;
    let index = usize::from(hole_number - 1);

    let mut next = game.clone();
    for ((player, &score), &award) in next.players.iter_mut().zip(new_scores).zip(&points) {
        if let Some(slot) = player.scores.get_mut(index) {
            *slot = score;
        }
        if let Some(slot) = player.points.get_mut(index) {
            *slot = award;
        }
        player.recompute_total();
    }

    tracing::debug!(game_id = %game.id, hole = hole_number, ?points, "Edited hole");
    Ok(next)
}

/// Set the par of one hole. Hole numbers outside the round are ignored.
pub fn set_par(game: &Game, hole_number: u8, par: u8) -> Game {
    let mut next = game.clone();
    let Some(slot) = usize::from(hole_number)
        .checked_sub(1)
        .and_then(|i| next.pars.get_mut(i))
    else {
        tracing::debug!(game_id = %game.id, hole = hole_number, "Ignoring par for unknown hole");
        return next;
    };
    *slot = par;
    tracing::debug!(game_id = %game.id, hole = hole_number, par, "Updated par");
    next
}
