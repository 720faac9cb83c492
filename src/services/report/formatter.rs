// レポート整形 - 選手コレクションを順位付きテキストに変換

use crate::core::{Player, PlayerCollection};
use std::fmt::Write;

/// 選手コレクションをレポートテキストに整形する
///
/// 表示名の昇順（同名は発見順）に並べ、1行1選手で
/// `"<順位>. <名前>; <年齢>; <所属チーム（カンマ区切り）>"` を出力する。
pub fn format_report(players: &PlayerCollection) -> String {
    let mut sorted: Vec<&Player> = players.iter().collect();
    // 安定ソート
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    for (idx, player) in sorted.iter().enumerate() {
        // Stringへの書き込みは失敗しない
        let _ = writeln!(
            out,
            "{}. {}; {}; {}",
            idx + 1,
            player.name,
            player.age,
            player.teams.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedPlayer;

    #[test]
    fn test_empty_collection_yields_empty_report() {
        assert_eq!(format_report(&PlayerCollection::new()), "");
    }

    #[test]
    fn test_report_sorted_by_name() {
        let mut players = PlayerCollection::new();
        players.record(&FeedPlayer::new("3", "Thomas", "Muller", "34"), "Germany");
        players.record(&FeedPlayer::new("1", "Bukayo", "Saka", "22"), "Arsenal");
        players.record(&FeedPlayer::new("1", "Bukayo", "Saka", "22"), "England");
        players.record(&FeedPlayer::new("2", "Harry", "Kane", "30"), "England");
        players.record(&FeedPlayer::new("2", "Harry", "Kane", "30"), "FC Bayern Munich");

        let report = format_report(&players);

        assert_eq!(
            report,
            "1. Bukayo Saka; 22; Arsenal, England\n\
             2. Harry Kane; 30; England, FC Bayern Munich\n\
             3. Thomas Muller; 34; Germany\n"
        );
    }

    #[test]
    fn test_name_ties_keep_discovery_order() {
        let mut players = PlayerCollection::new();
        players.record(&FeedPlayer::new("b", "Ali", "Ko", "25"), "Spain");
        players.record(&FeedPlayer::new("a", "Ali", "Ko", "31"), "France");

        let report = format_report(&players);

        assert_eq!(report, "1. Ali Ko; 25; Spain\n2. Ali Ko; 31; France\n");
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let mut players = PlayerCollection::new();
        players.record(&FeedPlayer::new("1", "de", "Gea", "33"), "Spain");
        players.record(&FeedPlayer::new("2", "Zinedine", "Z", "50"), "France");

        let lines: Vec<String> = format_report(&players).lines().map(String::from).collect();

        assert_eq!(lines[0], "1. Zinedine Z; 50; France");
        assert_eq!(lines[1], "2. de Gea; 33; Spain");
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut players = PlayerCollection::new();
        for i in 0..20 {
            players.record(&FeedPlayer::new(i.to_string(), "P", i.to_string(), "20"), "A");
        }

        assert_eq!(format_report(&players), format_report(&players));
    }
}
