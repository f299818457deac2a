pub(crate) mod assignments;
pub(crate) mod domain_events;
pub(crate) mod propagation;
pub(crate) mod watch_list;

pub(crate) use assignments::Assignments;
pub(crate) use assignments::Event;
pub(crate) use watch_list::WatchListCP;
