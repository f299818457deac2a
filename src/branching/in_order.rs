use super::Brancher;
use super::Decision;
use super::SelectionContext;

/// Branches on the first unfixed variable in creation order: integers before
/// sets, smallest candidate value first. Deterministic, which makes it the
/// default for enumeration and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InOrderBrancher;

impl Brancher for InOrderBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        for var in context.int_variables() {
            if !context.is_fixed(var) {
                return Some(Decision::Int {
                    var,
                    value: context.lower_bound(var),
                });
            }
        }
        for var in context.set_variables() {
            if !context.is_set_fixed(var) {
                let value = context.undecided_set_values(var)[0];
                return Some(Decision::SetElement { var, value });
            }
        }
        None
    }
}
