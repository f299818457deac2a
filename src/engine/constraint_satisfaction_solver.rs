//! The fixpoint loop and the depth-first enumeration driver.
//!
//! Solving is single-threaded, cooperative and run-to-completion: a
//! propagator executes synchronously when popped from the queue, and the only
//! suspension point is between propagator invocations. The queue deduplicates
//! via per-propagator enqueued flags, and a propagator is not woken by its
//! own narrowings.

use std::collections::VecDeque;

use log::debug;

use crate::api::ConstraintOperationError;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::domains::Domain;
use crate::domains::EmptyDomain;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::Assignments;
use crate::engine::cp::Event;
use crate::engine::cp::WatchListCP;
use crate::engine::VariableNames;
use crate::variables::IntVar;
use crate::variables::SetVar;

#[derive(Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    assignments: Assignments,
    watch_list: WatchListCP,
    propagators: Vec<Box<dyn Propagator>>,
    queue: VecDeque<PropagatorId>,
    enqueued: Vec<bool>,
    variable_names: VariableNames,
    root_inconsistent: bool,
}

impl std::fmt::Debug for ConstraintSatisfactionSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSatisfactionSolver")
            .field("num_propagators", &self.propagators.len())
            .finish_non_exhaustive()
    }
}

impl ConstraintSatisfactionSolver {
    pub(crate) fn new_int_variable(&mut self, domain: Domain, name: Option<String>) -> IntVar {
        self.watch_list.grow_int();
        let var = self.assignments.new_int_variable(domain);
        if let Some(name) = name {
            self.variable_names.add_int(var, name);
        }
        var
    }

    pub(crate) fn new_set_variable(
        &mut self,
        values: &[i32],
        card: Domain,
        name: Option<String>,
    ) -> SetVar {
        self.watch_list.grow_set();
        let var = self.assignments.new_set_variable(values, card);
        if let Some(name) = name {
            self.variable_names.add_set(var, name);
        }
        var
    }

    /// Registers the propagator, initialises it at the root and propagates
    /// to fixpoint. A contradiction at this point means the model is
    /// unsatisfiable before any search takes place.
    pub(crate) fn add_propagator(
        &mut self,
        propagator: Box<dyn Propagator>,
    ) -> Result<(), ConstraintOperationError> {
        if self.root_inconsistent {
            return Err(ConstraintOperationError::RootLevelConflict);
        }
        let id = PropagatorId(self.propagators.len() as u32);
        self.propagators.push(propagator);
        self.enqueued.push(false);

        let status = {
            let mut context = PropagatorInitialisationContext::new(
                &self.assignments,
                &mut self.watch_list,
                id,
            );
            self.propagators[id.index()].initialise_at_root(&mut context)
        };
        if status.is_err() {
            self.root_inconsistent = true;
            return Err(ConstraintOperationError::RootLevelConflict);
        }

        self.enqueue(id);
        if self.propagate_to_fixpoint().is_err() {
            self.root_inconsistent = true;
            return Err(ConstraintOperationError::RootLevelConflict);
        }
        Ok(())
    }

    fn enqueue(&mut self, id: PropagatorId) {
        if !self.enqueued[id.index()] {
            self.enqueued[id.index()] = true;
            self.queue.push_back(id);
        }
    }

    /// Wakes the propagators interested in the pending domain changes.
    /// `skip` suppresses self-notification for the propagator that produced
    /// them.
    fn drain_events_into_queue(&mut self, skip: Option<PropagatorId>) {
        for event in self.assignments.drain_events() {
            let interested: Vec<PropagatorId> = match event {
                Event::Int(var, kinds) => self.watch_list.interested_in_int(var, kinds).collect(),
                Event::Set(var, kinds) => self.watch_list.interested_in_set(var, kinds).collect(),
            };
            for id in interested {
                if Some(id) != skip {
                    self.enqueue(id);
                }
            }
        }
    }

    /// Repeatedly invokes woken propagators until quiescence (no propagator
    /// can narrow further) or a contradiction.
    pub(crate) fn propagate_to_fixpoint(&mut self) -> PropagationStatus {
        self.drain_events_into_queue(None);
        while let Some(id) = self.queue.pop_front() {
            self.enqueued[id.index()] = false;
            let status = {
                let mut context = PropagationContextMut::new(&mut self.assignments);
                self.propagators[id.index()].propagate(&mut context)
            };
            match status {
                Ok(()) => self.drain_events_into_queue(Some(id)),
                Err(contradiction) => {
                    debug!(
                        "{} ({}) detected {contradiction:?} at level {}",
                        id,
                        self.propagators[id.index()].name(),
                        self.assignments.decision_level(),
                    );
                    self.clear_queue();
                    return Err(contradiction);
                }
            }
        }
        Ok(())
    }

    fn clear_queue(&mut self) {
        for id in self.queue.drain(..) {
            self.enqueued[id.index()] = false;
        }
        let _ = self.assignments.drain_events();
    }

    /// Depth-first enumeration. Every complete assignment reached is handed
    /// to `on_solution`; returning `false` from the callback aborts the
    /// search. The assignment state is restored to the root afterwards.
    pub(crate) fn solve(
        &mut self,
        brancher: &mut dyn Brancher,
        on_solution: &mut dyn FnMut(&Solution) -> bool,
    ) {
        if self.root_inconsistent {
            return;
        }
        let _ = self.search(brancher, on_solution);
    }

    fn search(
        &mut self,
        brancher: &mut dyn Brancher,
        on_solution: &mut dyn FnMut(&Solution) -> bool,
    ) -> bool {
        if self.propagate_to_fixpoint().is_err() {
            return true;
        }
        if self.assignments.is_complete() {
            let solution = self.assignments.snapshot();
            return on_solution(&solution);
        }

        let decision = {
            let context = SelectionContext::new(&self.assignments);
            brancher
                .next_decision(&context)
                .expect("an incomplete assignment must yield a decision")
        };
        debug!(
            "branching on {decision:?} ({}) at level {}",
            self.decision_label(decision),
            self.assignments.decision_level()
        );

        for include in [true, false] {
            self.assignments.increase_decision_level();
            let keep_going = match self.apply_decision(decision, include) {
                Ok(()) => self.search(brancher, on_solution),
                Err(EmptyDomain) => true,
            };
            self.assignments.backtrack_one_level();
            if !keep_going {
                return false;
            }
        }
        true
    }

    fn decision_label(&self, decision: Decision) -> &str {
        let name = match decision {
            Decision::Int { var, .. } => self.variable_names.get_int_name(var),
            Decision::SetElement { var, .. } => self.variable_names.get_set_name(var),
        };
        name.unwrap_or("<unnamed>")
    }

    fn apply_decision(&mut self, decision: Decision, include: bool) -> Result<(), EmptyDomain> {
        match decision {
            Decision::Int { var, value } => {
                if include {
                    self.assignments.instantiate(var, value)
                } else {
                    self.assignments.remove_value(var, value)
                }
            }
            Decision::SetElement { var, value } => {
                if include {
                    self.assignments.ker_add(var, value)
                } else {
                    self.assignments.env_remove(var, value)
                }
            }
        }
    }
}
