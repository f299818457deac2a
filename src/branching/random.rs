use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use super::Brancher;
use super::Decision;
use super::SelectionContext;

/// Branches on a uniformly chosen unfixed variable and candidate value.
/// Enumeration visits the same solution set as [`super::InOrderBrancher`] in
/// a different order, which makes this useful for shaking out
/// order-dependence bugs in propagators.
#[derive(Debug, Clone)]
pub struct RandomBrancher {
    rng: SmallRng,
}

impl RandomBrancher {
    pub fn new(seed: u64) -> RandomBrancher {
        RandomBrancher {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Brancher for RandomBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        let unfixed_ints: Vec<_> = context
            .int_variables()
            .filter(|&var| !context.is_fixed(var))
            .collect();
        let unfixed_sets: Vec<_> = context
            .set_variables()
            .filter(|&var| !context.is_set_fixed(var))
            .collect();
        let total = unfixed_ints.len() + unfixed_sets.len();
        if total == 0 {
            return None;
        }
        let pick = self.rng.gen_range(0..total);
        if pick < unfixed_ints.len() {
            let var = unfixed_ints[pick];
            let values = context.domain_values(var);
            let value = values[self.rng.gen_range(0..values.len())];
            Some(Decision::Int { var, value })
        } else {
            let var = unfixed_sets[pick - unfixed_ints.len()];
            let values = context.undecided_set_values(var);
            let value = values[self.rng.gen_range(0..values.len())];
            Some(Decision::SetElement { var, value })
        }
    }
}
