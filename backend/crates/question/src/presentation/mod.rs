//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::QuestionAppState;
pub use router::{admin_router, dashboard_router, public_router};
