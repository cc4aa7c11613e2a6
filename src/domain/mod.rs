// ============================================================================
// Domain Layer
// ============================================================================
//
// Platform-supplied entities the sync hooks read. Nothing here knows about
// hooks, dispatch, or configuration.
//
// ============================================================================

pub mod customer;
