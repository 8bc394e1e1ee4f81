//! Prompt sequence, answers and the emitted record

pub mod catalog;
pub mod field;
pub mod record;
pub mod selection;
pub mod state;

pub use record::{emit, Destination};
pub use state::{Control, Outcome, Step, WizardState};
