//! Service layer orchestrating a hook invocation.

mod hook_service;

pub use hook_service::HookService;
