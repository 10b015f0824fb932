//! Likelihood x impact heat-map matrix.

use serde::{Deserialize, Serialize};

use crate::classify::heat_cell_level;
use crate::model::{EntityId, RiskLevel, RiskScore};

/// Number of buckets per axis.
pub const GRID_SIZE: usize = 5;

/// One cell of the 5x5 matrix.
///
/// Cells are recomputed wholesale each time the heat map is requested
/// and never individually mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMapCell {
    /// Likelihood bucket, 1-5
    pub likelihood_bucket: u8,
    /// Impact bucket, 1-5
    pub impact_bucket: u8,
    /// Number of entities in this cell
    pub count: usize,
    /// Ids of the entities in this cell, in input order
    pub member_ids: Vec<EntityId>,
    /// Level from the cell ladder over `likelihood_bucket * impact_bucket`
    pub level: RiskLevel,
}

/// The full 5x5 matrix.
///
/// Partition invariant: every input entity lands in exactly one cell,
/// so [`HeatMap::total`] always equals the population size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct HeatMap {
    /// Cells in row-major order, likelihood bucket 1-5 outer,
    /// impact bucket 1-5 inner
    pub cells: Vec<HeatMapCell>,
    /// Population size the matrix was built from
    pub population: usize,
}

impl HeatMap {
    /// Sum of all cell counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cells.iter().map(|c| c.count).sum()
    }

    /// Look up the cell for a bucket pair (1-5 each).
    #[must_use]
    pub fn cell(&self, likelihood_bucket: u8, impact_bucket: u8) -> Option<&HeatMapCell> {
        self.cells.iter().find(|c| {
            c.likelihood_bucket == likelihood_bucket && c.impact_bucket == impact_bucket
        })
    }
}

/// Map a factor in `[0, 1]` to its 1-5 bucket: `clamp(ceil(v * 5), 1, 5)`.
///
/// Exact zero falls into bucket 1; values above 1 cannot occur for
/// validated factors but clamp down to 5 rather than indexing out of
/// the grid.
#[must_use]
pub fn bucket_of(value: f64) -> u8 {
    ((value * GRID_SIZE as f64).ceil() as i64).clamp(1, GRID_SIZE as i64) as u8
}

/// Build the 5x5 heat map for a population of risk scores.
///
/// An empty population produces a matrix of 25 empty cells with a
/// population of zero.
pub fn build_heat_map(scores: &[RiskScore]) -> HeatMap {
    let mut cells: Vec<HeatMapCell> = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for l in 1..=GRID_SIZE as u8 {
        for i in 1..=GRID_SIZE as u8 {
            cells.push(HeatMapCell {
                likelihood_bucket: l,
                impact_bucket: i,
                count: 0,
                member_ids: Vec::new(),
                level: heat_cell_level(u32::from(l) * u32::from(i)),
            });
        }
    }

    for score in scores {
        let l = bucket_of(score.likelihood);
        let i = bucket_of(score.impact);
        let index = (l as usize - 1) * GRID_SIZE + (i as usize - 1);
        let cell = &mut cells[index];
        cell.count += 1;
        cell.member_ids.push(score.id.clone());
    }

    HeatMap {
        cells,
        population: scores.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FactorVector;
    use crate::scoring::calculate_risk_score;

    fn score(id: &str, likelihood: f64, impact: f64) -> RiskScore {
        calculate_risk_score(id, &FactorVector::new(likelihood, impact, 0.0)).unwrap()
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bucket_of(0.0), 1);
        assert_eq!(bucket_of(0.2), 1);
        assert_eq!(bucket_of(0.200_001), 2);
        assert_eq!(bucket_of(0.4), 2);
        assert_eq!(bucket_of(0.6), 3);
        assert_eq!(bucket_of(0.8), 4);
        assert_eq!(bucket_of(0.800_001), 5);
        assert_eq!(bucket_of(1.0), 5);
    }

    #[test]
    fn empty_population_yields_empty_matrix() {
        let map = build_heat_map(&[]);
        assert_eq!(map.cells.len(), 25);
        assert_eq!(map.total(), 0);
        assert_eq!(map.population, 0);
    }

    #[test]
    fn partition_property() {
        let scores: Vec<RiskScore> = (0..37)
            .map(|n| {
                let v = f64::from(n) / 37.0;
                score(&format!("e{n}"), v, 1.0 - v)
            })
            .collect();
        let map = build_heat_map(&scores);
        assert_eq!(map.total(), scores.len());
    }

    #[test]
    fn members_land_in_expected_cell() {
        let scores = vec![score("hot", 0.95, 0.95), score("cold", 0.05, 0.05)];
        let map = build_heat_map(&scores);

        let hot = map.cell(5, 5).unwrap();
        assert_eq!(hot.count, 1);
        assert_eq!(hot.member_ids, vec!["hot".to_string()]);
        assert_eq!(hot.level, RiskLevel::Critical);

        let cold = map.cell(1, 1).unwrap();
        assert_eq!(cold.count, 1);
        assert_eq!(cold.level, RiskLevel::Low);
    }

    #[test]
    fn cell_levels_follow_bucket_product_ladder() {
        let map = build_heat_map(&[]);
        // 4*5 = 20 -> Critical, 3*4 = 12 -> High, 2*3 = 6 -> Medium, 1*5 = 5 -> Low
        assert_eq!(map.cell(4, 5).unwrap().level, RiskLevel::Critical);
        assert_eq!(map.cell(3, 4).unwrap().level, RiskLevel::High);
        assert_eq!(map.cell(2, 3).unwrap().level, RiskLevel::Medium);
        assert_eq!(map.cell(1, 5).unwrap().level, RiskLevel::Low);
    }
}
