//! Crowding distance assignment for diversity preservation.
//!
//! Measures how isolated each individual is among the members of its own
//! front. Higher distance means a sparser neighborhood; boundary members
//! of any objective get [`CrowdingDistance::Infinite`].

use super::individual::CrowdingDistance;
use super::population::Population;
use super::ranking::Front;
use crate::error::Result;

/// Assigns crowding distances to the members of one front.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort front members by objective value (stable, so ties keep front order)
/// 2. Assign infinity to the lowest and highest member
/// 3. Interior members add `(next - prev) / (max - min)`
///
/// When `max == min` the raw neighbor gap is added instead (divisor 1).
/// Fronts with at most two members are all boundary members.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
pub fn assign_crowding_distance(population: &mut Population, front: &Front) -> Result<()> {
    let n = front.len();
    if n == 0 {
        return Ok(());
    }

    if n <= 2 {
        for &i in front.members() {
            population[i].crowding_distance = Some(CrowdingDistance::Infinite);
        }
        return Ok(());
    }

    for &i in front.members() {
        population[i].crowding_distance = Some(CrowdingDistance::ZERO);
    }

    let m = population[front.members()[0]].objectives.len();
    let mut order = front.members().to_vec();

    for obj_idx in 0..m {
        let (min_val, max_val) = front.extreme_values(population, obj_idx)?;
        let range = max_val - min_val;
        let divisor = if range == 0.0 {
            tracing::trace!(obj_idx, "zero objective spread in front, using unit divisor");
            1.0
        } else {
            range
        };

        order.copy_from_slice(front.members());
        order.sort_by(|&a, &b| {
            population[a].objectives[obj_idx].total_cmp(&population[b].objectives[obj_idx])
        });

        population[order[0]].crowding_distance = Some(CrowdingDistance::Infinite);
        population[order[n - 1]].crowding_distance = Some(CrowdingDistance::Infinite);

        for k in 1..(n - 1) {
            let prev = population[order[k - 1]].objectives[obj_idx];
            let next = population[order[k + 1]].objectives[obj_idx];
            let member = &mut population[order[k]];
            let current = member.crowding_distance.unwrap_or(CrowdingDistance::ZERO);
            member.crowding_distance = Some(current.accumulate((next - prev) / divisor));
        }
    }

    Ok(())
}

/// Runs [`assign_crowding_distance`] on every front.
pub fn assign_crowding_distances(population: &mut Population, fronts: &[Front]) -> Result<()> {
    for front in fronts {
        assign_crowding_distance(population, front)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
