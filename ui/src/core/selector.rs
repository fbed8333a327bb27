//! Subject selection state backing the dropdown.

use std::fmt;

use super::{dataset::SubjectId, error::DashboardError};

type ChangeHandler = Box<dyn FnMut(&str)>;

/// Options come from the dataset's `names`, in order. The first option is selected
/// as soon as the list is populated.
#[derive(Default)]
pub struct SubjectSelector {
    options: Vec<SubjectId>,
    selected: Option<SubjectId>,
    handlers: Vec<ChangeHandler>,
}

impl SubjectSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the option list and reset the selection to the first entry.
    /// Handlers are not notified; the initial selection isn't a user change.
    pub fn populate(&mut self, names: &[SubjectId]) {
        self.options = names.to_vec();
        self.selected = self.options.first().cloned();
    }

    pub fn options(&self) -> &[SubjectId] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Register a callback run after every accepted change.
    pub fn on_change(&mut self, handler: impl FnMut(&str) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn select(&mut self, subject: &str) -> Result<(), DashboardError> {
        self.preselect(subject)?;
        for handler in &mut self.handlers {
            handler(subject);
        }
        Ok(())
    }

    /// Move the selection without notifying handlers, e.g. to honour a deep link
    /// right after [`populate`](Self::populate). Unknown subjects leave it unchanged.
    pub fn preselect(&mut self, subject: &str) -> Result<(), DashboardError> {
        if !self.options.iter().any(|option| option == subject) {
            return Err(DashboardError::UnknownSubject(subject.to_string()));
        }
        self.selected = Some(subject.to_string());
        Ok(())
    }
}

impl fmt::Debug for SubjectSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubjectSelector")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn names(ids: &[&str]) -> Vec<SubjectId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn defaults_to_first_option() {
        let mut selector = SubjectSelector::new();
        assert_eq!(selector.selected(), None);

        selector.populate(&names(&["940", "941", "943"]));
        assert_eq!(selector.options(), names(&["940", "941", "943"]).as_slice());
        assert_eq!(selector.selected(), Some("940"));
    }

    #[test]
    fn notifies_every_handler_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut selector = SubjectSelector::new();
        selector.populate(&names(&["940", "941"]));

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            selector.on_change(move |id| seen.borrow_mut().push(format!("{tag}:{id}")));
        }

        selector.select("941").unwrap();
        assert_eq!(selector.selected(), Some("941"));
        assert_eq!(*seen.borrow(), vec!["a:941".to_string(), "b:941".to_string()]);
    }

    #[test]
    fn preselect_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut selector = SubjectSelector::new();
        selector.populate(&names(&["940", "941"]));
        let counter = Rc::clone(&calls);
        selector.on_change(move |_| *counter.borrow_mut() += 1);

        selector.preselect("941").unwrap();
        assert_eq!(selector.selected(), Some("941"));
        assert_eq!(*calls.borrow(), 0);
        assert!(selector.preselect("999").is_err());
        assert_eq!(selector.selected(), Some("941"));
    }

    #[test]
    fn rejects_values_outside_options() {
        let mut selector = SubjectSelector::new();
        selector.populate(&names(&["940"]));

        let err = selector.select("999").unwrap_err();
        assert_eq!(err, DashboardError::UnknownSubject("999".into()));
        assert_eq!(selector.selected(), Some("940"));
    }
}
