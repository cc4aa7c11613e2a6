// ============================================================================
// Customer Domain
// ============================================================================
//
// The storefront customer as seen by the sync hooks:
// - Value objects (CustomerNo, Email, PhoneNumber)
// - Profile and Customer, plus the CustomerProvider seam
// - Errors (CustomerError enum)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
#[allow(clippy::module_inception)]
pub mod customer;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use customer::*;
