//! Workflow engine for the guided planning flow: the stage state machine,
//! the per-session campaign context it mutates, tracking-code issuance, and
//! the session store.

pub mod context;
pub mod machine;
pub mod session;
pub mod stage;
pub mod tracking;

pub use context::WorkflowContext;
pub use machine::{apply, Action, TransitionOutcome, WorkflowError};
pub use session::{Session, SessionStore};
pub use stage::Stage;
pub use tracking::TrackingCode;
