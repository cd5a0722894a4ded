pub mod handicap;
pub mod round;
pub mod scoring;
pub mod standings;
pub mod ties;

pub use handicap::{net_score, total_net_score};
pub use round::{add_hole_scores, create_game, edit_hole_scores, set_par};
pub use scoring::{TiePattern, calculate_points, tie_pattern};
pub use standings::{leader, results_summary, sorted_players};
pub use ties::{TieType, tie_info};
