//! Server-side kernel: shared API state and the system router.

mod health;
pub mod router;
mod state;

pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
