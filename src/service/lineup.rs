//! Starting XI and captain selection.
//!
//! For each candidate formation, in order, the lineup takes the best
//! goalkeeper and the top defenders, midfielders and forwards by score.
//! Groups are filled greedily and independently; this is not a joint
//! optimization over all eleven slots.
//!
//! Tie-breaks are deterministic:
//!
//! - within a group, higher score first, then lower player id
//! - between formations with equal totals, the first listed wins
//! - between captain candidates with equal scores, the lower player id wins
//!
//! When no formation can be filled the lineup falls back to the top eleven
//! players by score and reports [`FormationUsed::Unknown`].

use tracing::{debug, warn};

use crate::domain::{
    by_score_desc, Formation, FormationUsed, OptimizationConfig, Player, PlayerId, Position,
    Squad, StartingXi, STARTING_XI_SIZE,
};

/// Chooses a starting lineup and captain from a squad.
#[derive(Debug, Clone)]
pub struct StartingXiSelector {
    formations: Vec<Formation>,
}

impl StartingXiSelector {
    /// Create a selector trying `formations` in order.
    pub fn new(formations: Vec<Formation>) -> Self {
        Self { formations }
    }

    /// Create a selector for the formations in `config`.
    pub fn from_config(config: &OptimizationConfig) -> Self {
        Self::new(config.formations.clone())
    }

    /// Choose a lineup from a validated squad.
    #[must_use]
    pub fn select_from_squad(&self, squad: &Squad) -> StartingXi {
        self.select(squad.players())
    }

    /// Choose a lineup from any set of players.
    ///
    /// Accepts sets that are not legal squads (e.g. after injured players
    /// were removed upstream); such sets may only support the fallback.
    #[must_use]
    pub fn select(&self, players: &[Player]) -> StartingXi {
        let ranked = RankedGroups::new(players);

        let mut best: Option<(Formation, Vec<Player>, f64)> = None;
        for &formation in &self.formations {
            let Some(lineup) = ranked.lineup(formation) else {
                debug!(%formation, "Formation cannot be filled");
                continue;
            };
            let total: f64 = lineup.iter().map(|p| p.expected_points).sum();
            debug!(%formation, total, "Candidate lineup");

            if best.as_ref().map_or(true, |(_, _, best_total)| total > *best_total) {
                best = Some((formation, lineup, total));
            }
        }

        let (players, formation) = match best {
            Some((formation, lineup, _)) => (lineup, FormationUsed::Formation(formation)),
            None => {
                warn!(
                    players = players.len(),
                    "No formation fits; falling back to top players by score"
                );
                let mut all = players.to_vec();
                all.sort_by(by_score_desc);
                all.truncate(STARTING_XI_SIZE);
                (all, FormationUsed::Unknown)
            }
        };

        let captain = pick_captain(&players);
        StartingXi::new(players, formation, captain)
    }
}

/// Player with the highest score; ties go to the lowest id.
#[must_use]
pub fn pick_captain(players: &[Player]) -> Option<PlayerId> {
    players
        .iter()
        .min_by(|a, b| by_score_desc(a, b))
        .map(|p| p.id)
}

/// Players split by position, each group ranked best first.
struct RankedGroups {
    goalkeepers: Vec<Player>,
    defenders: Vec<Player>,
    midfielders: Vec<Player>,
    forwards: Vec<Player>,
}

impl RankedGroups {
    fn new(players: &[Player]) -> Self {
        let group = |position: Position| {
            let mut group: Vec<Player> = players
                .iter()
                .filter(|p| p.position == position)
                .cloned()
                .collect();
            group.sort_by(by_score_desc);
            group
        };
        Self {
            goalkeepers: group(Position::Goalkeeper),
            defenders: group(Position::Defender),
            midfielders: group(Position::Midfielder),
            forwards: group(Position::Forward),
        }
    }

    /// Lineup for `formation`, or `None` if some group is too small.
    fn lineup(&self, formation: Formation) -> Option<Vec<Player>> {
        let slots = [
            (&self.goalkeepers, 1),
            (&self.defenders, usize::from(formation.defenders())),
            (&self.midfielders, usize::from(formation.midfielders())),
            (&self.forwards, usize::from(formation.forwards())),
        ];

        let mut lineup = Vec::with_capacity(STARTING_XI_SIZE);
        for (group, needed) in slots {
            if group.len() < needed {
                return None;
            }
            lineup.extend(group.iter().take(needed).cloned());
        }
        (lineup.len() == STARTING_XI_SIZE).then_some(lineup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{minimal_pool, player};
    use rust_decimal_macros::dec;

    fn f(d: u8, m: u8, w: u8) -> Formation {
        Formation::new(d, m, w).unwrap()
    }

    #[test]
    fn picks_highest_scoring_formation() {
        // Forwards outscore defenders, so 3-4-3 beats 4-4-2.
        let xi = StartingXiSelector::new(vec![f(4, 4, 2), f(3, 4, 3)]).select(&minimal_pool());

        assert_eq!(xi.formation(), FormationUsed::Formation(f(3, 4, 3)));
        assert_eq!(xi.len(), 11);
        assert_eq!(xi.count(Position::Goalkeeper), 1);
        assert_eq!(xi.count(Position::Defender), 3);
        assert_eq!(xi.count(Position::Forward), 3);
    }

    #[test]
    fn equal_totals_keep_first_listed_formation() {
        let mut players = minimal_pool();
        for p in &mut players {
            p.expected_points = 1.0;
        }

        let xi = StartingXiSelector::new(vec![f(4, 4, 2), f(3, 5, 2), f(3, 4, 3)]).select(&players);

        assert_eq!(xi.formation(), FormationUsed::Formation(f(4, 4, 2)));
    }

    #[test]
    fn captain_ties_go_to_lowest_id() {
        let players = vec![
            player(9, Position::Forward, 1, dec!(5), 7.0),
            player(4, Position::Forward, 1, dec!(5), 7.0),
            player(2, Position::Defender, 1, dec!(5), 3.0),
        ];
        assert_eq!(pick_captain(&players), Some(PlayerId::new(4)));
        assert_eq!(pick_captain(&[]), None);
    }

    #[test]
    fn fallback_takes_top_eleven() {
        let players: Vec<Player> = (1..=13)
            .map(|id| player(id, Position::Midfielder, 1, dec!(5), f64::from(id)))
            .collect();

        let xi = StartingXiSelector::new(Formation::DEFAULTS.to_vec()).select(&players);

        assert!(xi.formation().is_unknown());
        assert_eq!(xi.len(), 11);
        assert!(!xi.players().iter().any(|p| p.id.get() <= 2));
        assert_eq!(xi.captain().unwrap().id, PlayerId::new(13));
    }

    #[test]
    fn empty_input_yields_empty_lineup_without_captain() {
        let xi = StartingXiSelector::new(Formation::DEFAULTS.to_vec()).select(&[]);
        assert!(xi.is_empty());
        assert!(xi.captain().is_none());
        assert!(xi.formation().is_unknown());
    }
}
