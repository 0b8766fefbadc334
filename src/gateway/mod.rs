// ============================================================================
// Backend Gateway
// ============================================================================
//
// The outbound half of the gateway:
// - client.rs:   HTTP client for the external offers backend
// - envelope.rs: normalization of upstream responses into the client-facing
//                `{success, message, data?}` envelope
//
// ============================================================================

pub mod client;
pub mod envelope;
