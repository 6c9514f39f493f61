use std::fmt;

use crate::presentation::view_models::{CreateView, PickedViewModel, StepViewModel, TextStyle};

impl CreateView for StepViewModel {
    fn create_view<'a>(&'a self, _style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(StepView { data: self })
    }
}

struct StepView<'a> {
    data: &'a StepViewModel,
}

impl<'a> fmt::Display for StepView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.to)
    }
}

impl CreateView for PickedViewModel {
    fn create_view<'a>(&'a self, _style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(PickedView { data: self })
    }
}

struct PickedView<'a> {
    data: &'a PickedViewModel,
}

impl<'a> fmt::Display for PickedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.selected_date)
    }
}
