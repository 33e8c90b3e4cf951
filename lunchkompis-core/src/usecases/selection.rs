use super::prelude::*;

/// The restaurant that is currently highlighted in the list and on the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState(Option<Id>);

impl SelectionState {
    pub fn selected(&self) -> Option<&Id> {
        self.0.as_ref()
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.0.as_ref() == Some(id)
    }

    /// Select the given restaurant or clear the selection if it
    /// is already selected. `None` always clears the selection.
    ///
    /// Returns `true` if the selection has changed.
    pub fn toggle(&mut self, id: Option<&Id>) -> bool {
        let next = match id {
            Some(id) if !self.is_selected(id) => Some(id.clone()),
            _ => None,
        };
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.0.take().is_some()
    }
}
