use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::IntVar;

/// The relation between two strings as far as the current domains decide it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LexOrder {
    Less,
    Equal,
    Greater,
    Undecided,
}

/// Channeling between a block of equal-length strings and their ranks under
/// lexicographic order: `ints[i] < ints[j] ⟺ strings[i] <ₗₑₓ strings[j]`
/// and `ints[i] = ints[j] ⟺ strings[i] = strings[j]`.
///
/// Pairwise reasoning only: a decided string comparison separates the ranks,
/// a decided rank comparison is enforced at the first position the strings
/// can still differ. Bound-consistent on the ranks.
#[derive(Debug)]
pub(crate) struct LexChainChannelPropagator {
    strings: Box<[Box<[IntVar]>]>,
    ints: Box<[IntVar]>,
}

impl LexChainChannelPropagator {
    /// The strings must all have the same length; the builder checks this.
    pub(crate) fn new(strings: Box<[Box<[IntVar]>]>, ints: Box<[IntVar]>) -> Self {
        LexChainChannelPropagator { strings, ints }
    }

    /// Compare two strings as far as the domains allow: walk the common
    /// fixed-equal prefix and judge the first position that can differ by
    /// its bounds.
    fn compare(&self, context: &PropagationContextMut<'_>, i: usize, j: usize) -> (LexOrder, usize) {
        let x = &self.strings[i];
        let y = &self.strings[j];
        for position in 0..x.len() {
            let a = x[position];
            let b = y[position];
            let fixed_equal = match (context.fixed_value(a), context.fixed_value(b)) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            };
            if fixed_equal {
                continue;
            }
            if context.upper_bound(a) < context.lower_bound(b) {
                return (LexOrder::Less, position);
            }
            if context.lower_bound(a) > context.upper_bound(b) {
                return (LexOrder::Greater, position);
            }
            return (LexOrder::Undecided, position);
        }
        (LexOrder::Equal, x.len())
    }
}

impl Propagator for LexChainChannelPropagator {
    fn name(&self) -> &str {
        "LexChainChannel"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for string in self.strings.iter() {
            for &var in string.iter() {
                context.register_int(var, DomainEvents::ANY_INT);
            }
        }
        for &var in self.ints.iter() {
            context.register_int(var, DomainEvents::BOUNDS);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let count = self.strings.len();
        for &rank in self.ints.iter() {
            context.set_lower_bound(rank, 0)?;
            context.set_upper_bound(rank, count as i32 - 1)?;
        }

        for i in 0..count {
            for j in (i + 1)..count {
                let (order, position) = self.compare(context, i, j);
                let (rank_i, rank_j) = (self.ints[i], self.ints[j]);
                match order {
                    LexOrder::Less => {
                        context.set_upper_bound(rank_i, context.upper_bound(rank_j) - 1)?;
                        context.set_lower_bound(rank_j, context.lower_bound(rank_i) + 1)?;
                    }
                    LexOrder::Greater => {
                        context.set_upper_bound(rank_j, context.upper_bound(rank_i) - 1)?;
                        context.set_lower_bound(rank_i, context.lower_bound(rank_j) + 1)?;
                    }
                    LexOrder::Equal => {
                        context.set_lower_bound(rank_i, context.lower_bound(rank_j))?;
                        context.set_upper_bound(rank_i, context.upper_bound(rank_j))?;
                        context.set_lower_bound(rank_j, context.lower_bound(rank_i))?;
                        context.set_upper_bound(rank_j, context.upper_bound(rank_i))?;
                    }
                    LexOrder::Undecided => {
                        // A decided rank order transfers to the strings at
                        // the first free position.
                        let a = self.strings[i][position];
                        let b = self.strings[j][position];
                        if context.upper_bound(rank_i) < context.lower_bound(rank_j) {
                            context.set_upper_bound(a, context.upper_bound(b))?;
                            context.set_lower_bound(b, context.lower_bound(a))?;
                        } else if context.upper_bound(rank_j) < context.lower_bound(rank_i) {
                            context.set_upper_bound(b, context.upper_bound(a))?;
                            context.set_lower_bound(a, context.lower_bound(b))?;
                        }
                        let ranks_equal = match (
                            context.fixed_value(rank_i),
                            context.fixed_value(rank_j),
                        ) {
                            (Some(left), Some(right)) => left == right,
                            _ => false,
                        };
                        if ranks_equal {
                            for position in 0..self.strings[i].len() {
                                let a = self.strings[i][position];
                                let b = self.strings[j][position];
                                let other = context.domain(b).clone();
                                context.intersect(a, &other)?;
                                let other = context.domain(a).clone();
                                context.intersect(b, &other)?;
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
