use fnv::FnvHashMap;

use crate::variables::IntVar;
use crate::variables::SetVar;

/// Optional display names for variables, used in diagnostics only. Most
/// auxiliary variables created during compilation stay unnamed.
#[derive(Debug, Default)]
pub(crate) struct VariableNames {
    int_names: FnvHashMap<u32, String>,
    set_names: FnvHashMap<u32, String>,
}

impl VariableNames {
    pub(crate) fn get_int_name(&self, var: IntVar) -> Option<&str> {
        self.int_names.get(&var.index).map(String::as_str)
    }

    pub(crate) fn get_set_name(&self, var: SetVar) -> Option<&str> {
        self.set_names.get(&var.index).map(String::as_str)
    }

    pub(crate) fn add_int(&mut self, var: IntVar, name: String) {
        let _ = self.int_names.insert(var.index, name);
    }

    pub(crate) fn add_set(&mut self, var: SetVar, name: String) {
        let _ = self.set_names.insert(var.index, name);
    }
}
