use nines_core::game::Game;
use nines_core::player::Player;

/// The player with the strictly highest total.
///
/// Ties go to the earlier seat, so with no points yet this is the first
/// player. `None` only for an empty roster.
pub fn leader(players: &[Player]) -> Option<&Player> {
    let (first, rest) = players.split_first()?;
    Some(rest.iter().fold(first, |best, player| {
        if player.total_points > best.total_points {
            player
        } else {
            best
        }
    }))
}

/// Players ordered by total, highest first. Equal totals keep seat order.
pub fn sorted_players(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    sorted
}

fn place_marker(place: usize) -> String {
    match place {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}.", n + 1),
    }
}

/// Shareable text of the final standings.
pub fn results_summary(game: &Game) -> String {
    let standings = sorted_players(&game.players);
    let mut out = String::from("🏆 Nines Golf Results 🏆\n");
    if let Some(winner) = standings.first() {
        out.push_str(&format!(
            "\nWinner: {} - {} points\n",
            winner.name, winner.total_points
        ));
    }
    out.push_str("\nFinal Standings:");
    for (place, player) in standings.iter().enumerate() {
        out.push_str(&format!(
            "\n{} {}: {} pts",
            place_marker(place),
            player.name,
            player.total_points
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nines_core::game::{HoleCount, PlayerCount};
    use nines_core::test_helpers::new_game;

    fn with_totals(totals: &[u32]) -> Vec<Player> {
        totals
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let mut p = Player::new(i + 1, &format!("P{}", i + 1), None);
                p.total_points = t;
                p
            })
            .collect()
    }

    #[test]
    fn no_points_means_first_seat_leads() {
        let players = with_totals(&[0, 0, 0]);
        assert_eq!(leader(&players).unwrap().id, "player-1");
    }

    #[test]
    fn strictly_highest_leads() {
        let players = with_totals(&[5, 9, 4]);
        assert_eq!(leader(&players).unwrap().id, "player-2");
    }

    #[test]
    fn tied_lead_goes_to_earlier_seat() {
        let players = with_totals(&[3, 7, 7, 1]);
        assert_eq!(leader(&players).unwrap().id, "player-2");
    }

    #[test]
    fn empty_roster_has_no_leader() {
        assert!(leader(&[]).is_none());
    }

    #[test]
    fn sorted_is_stable_descending() {
        let players = with_totals(&[4, 9, 4, 9]);
        let ids: Vec<&str> = sorted_players(&players)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["player-2", "player-4", "player-1", "player-3"]);
    }

    #[test]
    fn summary_lists_every_player() {
        let mut game = new_game(PlayerCount::Four, HoleCount::Nine);
        for (player, total) in game.players.iter_mut().zip([10, 30, 20, 21]) {
            player.total_points = total;
        }
        let text = results_summary(&game);
        assert_eq!(
            text,
            "🏆 Nines Golf Results 🏆\n\
             \n\
             Winner: P2 - 30 points\n\
             \n\
             Final Standings:\n\
             🥇 P2: 30 pts\n\
             🥈 P4: 21 pts\n\
             🥉 P3: 20 pts\n\
             4. P1: 10 pts"
        );
    }
}
