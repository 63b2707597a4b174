// Credential providers.
//
// Each provider reads one kind of credential source. Providers report
// whether they apply to the current document so the chain can skip them
// cheaply, and resolve to `None` rather than erroring when they have
// nothing for a hostname.
//
// credsStore / credHelpers providers are not implemented: they need to
// spawn external helper binaries.

pub mod base64_auth;
pub use base64_auth::Base64Provider;
