//! Application services for the task-intake form.

mod card_factory;
mod controller;
mod presenter;

pub use card_factory::{
    CardFormat, CardFormatError, DEFAULT_TIMESTAMP_FORMAT, TaskCardFactory, initials,
};
pub use controller::{FormController, FormError, FormResult, SubmitOutcome};
pub use presenter::ListPresenter;
