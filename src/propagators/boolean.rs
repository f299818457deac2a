use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::variables::BoolVar;

/// Conjunction over a block of booleans: every operand is true.
#[derive(Debug)]
pub(crate) struct AndPropagator {
    bools: Box<[BoolVar]>,
}

impl AndPropagator {
    pub(crate) fn new(bools: Box<[BoolVar]>) -> Self {
        AndPropagator { bools }
    }
}

impl Propagator for AndPropagator {
    fn name(&self) -> &str {
        "And"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.bools.iter() {
            context.register_bool(var, DomainEvents::ASSIGN);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        for &var in self.bools.iter() {
            context.fix_bool(var, true)?;
        }
        Ok(())
    }
}

/// Disjunction over a block of booleans: at least one operand is true.
#[derive(Debug)]
pub(crate) struct OrPropagator {
    bools: Box<[BoolVar]>,
}

impl OrPropagator {
    pub(crate) fn new(bools: Box<[BoolVar]>) -> Self {
        OrPropagator { bools }
    }
}

impl Propagator for OrPropagator {
    fn name(&self) -> &str {
        "Or"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.bools.iter() {
            context.register_bool(var, DomainEvents::ASSIGN);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        if self.bools.iter().any(|&var| context.is_true(var)) {
            return Ok(());
        }
        let undecided: Vec<BoolVar> = self
            .bools
            .iter()
            .copied()
            .filter(|&var| !context.is_false(var))
            .collect();
        match undecided.as_slice() {
            [] => Err(Contradiction::Conflict),
            [last] => {
                context.fix_bool(*last, true)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Exactly one operand is true.
#[derive(Debug)]
pub(crate) struct ExactlyOnePropagator {
    bools: Box<[BoolVar]>,
}

impl ExactlyOnePropagator {
    pub(crate) fn new(bools: Box<[BoolVar]>) -> Self {
        ExactlyOnePropagator { bools }
    }
}

impl Propagator for ExactlyOnePropagator {
    fn name(&self) -> &str {
        "ExactlyOne"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.bools.iter() {
            context.register_bool(var, DomainEvents::ASSIGN);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let trues = self.bools.iter().filter(|&&var| context.is_true(var)).count();
        if trues > 1 {
            return Err(Contradiction::Conflict);
        }
        let undecided: Vec<BoolVar> = self
            .bools
            .iter()
            .copied()
            .filter(|&var| !context.is_true(var) && !context.is_false(var))
            .collect();
        if trues == 1 {
            for var in undecided {
                context.fix_bool(var, false)?;
            }
        } else {
            match undecided.as_slice() {
                [] => return Err(Contradiction::Conflict),
                [last] => context.fix_bool(*last, true)?,
                _ => {}
            }
        }
        Ok(())
    }
}

/// At most one operand is true.
#[derive(Debug)]
pub(crate) struct AtMostOnePropagator {
    bools: Box<[BoolVar]>,
}

impl AtMostOnePropagator {
    pub(crate) fn new(bools: Box<[BoolVar]>) -> Self {
        AtMostOnePropagator { bools }
    }
}

impl Propagator for AtMostOnePropagator {
    fn name(&self) -> &str {
        "AtMostOne"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> PropagationStatus {
        for &var in self.bools.iter() {
            context.register_bool(var, DomainEvents::ASSIGN);
        }
        Ok(())
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatus {
        let trues = self.bools.iter().filter(|&&var| context.is_true(var)).count();
        if trues > 1 {
            return Err(Contradiction::Conflict);
        }
        if trues == 1 {
            for &var in self.bools.iter() {
                if !context.is_true(var) {
                    context.fix_bool(var, false)?;
                }
            }
        }
        Ok(())
    }
}
