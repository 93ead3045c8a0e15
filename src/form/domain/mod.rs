//! Domain model for the task-intake form.

mod card;
mod error;
mod field;
mod state;
mod view;

pub use card::{CardModel, CardParts};
pub use error::{FieldError, FormErrors};
pub use field::{FieldId, FormFields};
pub use state::FormState;
pub use view::FormView;
