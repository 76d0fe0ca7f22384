pub mod apply_update;
pub mod resolve_query;

pub use apply_update::ApplyUpdateUseCase;
pub use resolve_query::ResolveQueryUseCase;
