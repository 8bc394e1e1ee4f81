//! Input-routing contracts for wizard widgets
//!
//! The state machine gets first refusal on every mapped key. Anything it
//! reports as [`Handled::No`] is offered to the focused widget through
//! [`Interactive`].
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! map_key ──► WizardState::handle(Control)
//!    │              │
//!    │              │ Handled::No
//!    ▼              ▼
//! focused TextField (Interactive::handle_key)
//! ```

mod interactive;

pub use interactive::{Handled, Interactive};
