use serde::{Deserialize, Serialize};

use crate::models::game::GameRecord;

/// Number of games listed in the top-by-hours ranking.
pub const TOP_BY_HOURS_LIMIT: usize = 5;

/// Average shown for an empty library.
pub const EMPTY_AVERAGE: &str = "0.00";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalityCount {
    #[serde(rename = "p")]
    pub personality: String,
    pub count: usize,
}

/// Aggregate metrics over the current library snapshot.
///
/// Serializes to the document offered by the JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    pub total: usize,
    #[serde(rename = "horas")]
    pub hours: f64,
    /// Average score with two decimals
    #[serde(rename = "avg")]
    pub average_score: String,
    pub completed: usize,
    #[serde(rename = "perPers")]
    pub per_personality: Vec<PersonalityCount>,
    #[serde(rename = "topByHours")]
    pub top_by_hours: Vec<GameRecord>,
}

impl StatsSummary {
    /// Computes the summary; personality counts follow the order of `personalities`.
    pub fn compute(games: &[GameRecord], personalities: &[String]) -> Self {
        let total = games.len();
        let hours = games.iter().map(|g| g.hours).sum();
        let completed = games.iter().filter(|g| g.completed).count();

        let per_personality = personalities
            .iter()
            .map(|p| PersonalityCount {
                personality: p.clone(),
                count: games.iter().filter(|g| &g.personality == p).count(),
            })
            .collect();

        Self {
            total,
            hours,
            average_score: average_score(games),
            completed,
            per_personality,
            top_by_hours: top_by_hours(games, TOP_BY_HOURS_LIMIT),
        }
    }

    /// Pretty-printed export document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn average_score(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return EMPTY_AVERAGE.to_string();
    }
    let sum: f64 = games.iter().map(|g| g.score).sum();
    fixed_two(sum / games.len() as f64)
}

/// Two-decimal rendering where values exactly halfway between hundredths
/// round away from zero, as browsers do for `toFixed(2)`.
fn fixed_two(value: f64) -> String {
    // only odd multiples of 1/8 sit exactly on a half hundredth
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Up to `limit` games with the most hours, descending; ties keep collection order.
pub fn top_by_hours(games: &[GameRecord], limit: usize) -> Vec<GameRecord> {
    let mut ranked: Vec<&GameRecord> = games.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    ranked.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Catalog;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn game(id: &str, hours: f64, score: f64, personality: &str, completed: bool) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            title: format!("Game {}", id),
            genre: String::new(),
            personality: personality.to_string(),
            cover: String::new(),
            url: format!("https://example.com/{}", id),
            hours,
            score,
            completed,
        }
    }

    fn personalities() -> Vec<String> {
        Catalog::builtin().unwrap().personalities
    }

    #[test]
    fn test_empty_library() {
        let stats = StatsSummary::compute(&[], &personalities());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.hours, 0.0);
        assert_eq!(stats.average_score, "0.00");
        assert_eq!(stats.completed, 0);
        assert!(stats.top_by_hours.is_empty());
        assert_eq!(stats.per_personality.len(), 9);
        assert!(stats.per_personality.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_totals_and_average() {
        let games = vec![
            game("1", 2.0, 7.0, "Social", true),
            game("2", 3.5, 8.0, "Social", false),
            game("3", 0.0, 10.0, "Hardcore", true),
        ];
        let stats = StatsSummary::compute(&games, &personalities());

        assert_eq!(stats.total, 3);
        assert_eq!(stats.hours, 5.5);
        assert_eq!(stats.average_score, "8.33");
        assert_eq!(stats.completed, 2);
    }

    #[test]
    fn test_average_two_decimals() {
        let games = vec![game("1", 0.0, 1.0, "", false), game("2", 0.0, 2.0, "", false)];
        assert_eq!(average_score(&games), "1.50");

        let games = vec![game("1", 0.0, 9.0, "", false)];
        assert_eq!(average_score(&games), "9.00");
    }

    #[test]
    fn test_average_exact_half_rounds_up() {
        let eight = |first: f64| {
            let mut games = vec![game("1", 0.0, first, "", false)];
            games.extend((2..=8).map(|i| game(&i.to_string(), 0.0, 0.0, "", false)));
            games
        };
        assert_eq!(average_score(&eight(1.0)), "0.13");
        assert_eq!(average_score(&eight(3.0)), "0.38");
        assert_eq!(average_score(&eight(5.0)), "0.63");
        assert_eq!(average_score(&eight(7.0)), "0.88");
        assert_eq!(average_score(&eight(8.0)), "1.00");
    }

    #[test]
    fn test_fixed_two_leaves_inexact_values_alone() {
        assert_eq!(fixed_two(1.005), "1.00");
        assert_eq!(fixed_two(8.0 / 3.0), "2.67");
        assert_eq!(fixed_two(-0.125), "-0.13");
    }

    #[test]
    fn test_per_personality_follows_catalog_order() {
        let games = vec![
            game("1", 0.0, 0.0, "Social", false),
            game("2", 0.0, 0.0, "Estratega", false),
            game("3", 0.0, 0.0, "Social", false),
            game("4", 0.0, 0.0, "", false),
        ];
        let stats = StatsSummary::compute(&games, &personalities());

        let names: Vec<&str> = stats
            .per_personality
            .iter()
            .map(|c| c.personality.as_str())
            .collect();
        assert_eq!(names, personalities().iter().map(String::as_str).collect::<Vec<_>>());

        let count_of = |tag: &str| {
            stats
                .per_personality
                .iter()
                .find(|c| c.personality == tag)
                .map(|c| c.count)
                .unwrap()
        };
        assert_eq!(count_of("Estratega"), 1);
        assert_eq!(count_of("Social"), 2);
        assert_eq!(count_of("Narrativo"), 0);
    }

    #[test]
    fn test_top_by_hours_limit_and_order() {
        let games: Vec<GameRecord> = (1..=8)
            .map(|i| game(&i.to_string(), i as f64, 0.0, "", false))
            .collect();
        let top = top_by_hours(&games, TOP_BY_HOURS_LIMIT);

        assert_eq!(top.len(), 5);
        let ids: Vec<&str> = top.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["8", "7", "6", "5", "4"]);
        assert!(top.windows(2).all(|w| w[0].hours >= w[1].hours));
    }

    #[test]
    fn test_top_by_hours_ties_keep_collection_order() {
        let games = vec![
            game("a", 1.0, 0.0, "", false),
            game("b", 5.0, 0.0, "", false),
            game("c", 1.0, 0.0, "", false),
            game("d", 5.0, 0.0, "", false),
            game("e", 1.0, 0.0, "", false),
            game("f", 1.0, 0.0, "", false),
        ];
        let ids: Vec<String> = top_by_hours(&games, TOP_BY_HOURS_LIMIT)
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_top_by_hours_short_library() {
        let games = vec![game("1", 1.0, 0.0, "", false)];
        assert_eq!(top_by_hours(&games, TOP_BY_HOURS_LIMIT).len(), 1);
    }

    #[test]
    fn test_export_document_keys() {
        let games = vec![game("1", 4.0, 6.0, "Relajado", true)];
        let stats = StatsSummary::compute(&games, &personalities());
        let value: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["horas"], 4.0);
        assert_eq!(value["avg"], "6.00");
        assert_eq!(value["completed"], 1);
        assert_eq!(value["perPers"][6]["p"], "Relajado");
        assert_eq!(value["perPers"][6]["count"], 1);
        assert_eq!(value["topByHours"][0]["_id"], "1");
    }
}
