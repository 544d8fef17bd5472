use super::Player;
use crate::level::Level;

pub fn format_ranking_header(level: Level) -> String {
    format!(
        "Player ranking for difficulty {} ({}):",
        level.as_u8(),
        level
    )
}

pub fn format_ranking_line(player: &Player) -> String {
    format!(
        "Player: {} - Score: {} - Rank: {}",
        player.name, player.score, player.rank
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ranking_line() {
        let player = Player {
            name: "Bob".to_string(),
            score: 4,
            rank: 2,
        };
        assert_eq!(
            format_ranking_line(&player),
            "Player: Bob - Score: 4 - Rank: 2"
        );
    }

    #[test]
    fn test_format_ranking_header() {
        assert_eq!(
            format_ranking_header(Level::Medium),
            "Player ranking for difficulty 2 (Medium):"
        );
    }
}
