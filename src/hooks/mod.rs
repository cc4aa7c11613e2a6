// ============================================================================
// Customer Sync Hooks
// ============================================================================
//
// - events/     - CustomerSyncEvent kinds and the HookEnvelope they travel in
// - dispatcher/ - HookDispatcher seam, HookRegistry, RecordingDispatcher
// - handlers/   - Built-in hook handlers
// - gate/       - CustomerSyncGate, the storefront API entry points
//
// ============================================================================

mod dispatcher;
mod events;
mod gate;
mod handlers;

pub use dispatcher::{DispatchError, HookDispatcher, HookHandler, HookRegistry, RecordingDispatcher};
pub use events::{CustomerSyncEvent, HookEnvelope};
pub use gate::{CustomerSyncGate, SyncOutcome};
pub use handlers::JsonLogHandler;
