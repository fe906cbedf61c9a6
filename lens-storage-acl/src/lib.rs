//! This crate provides ACL template construction for Lens Storage:
//! - record shapes for the four policy kinds, serializable to the service
//!   wire format
//! - one-shot constructors for the wallet, account, and immutable kinds
//! - a validating builder for the generic contract-call kind
//!
//! Pure data construction: permission evaluation, signing, submission, and
//! address/chain validation all live elsewhere.

mod builder;
mod error;
mod templates;
mod types;

// Re-exports for a small, focused public API
pub use builder::GenericAclBuilder;
pub use error::{AclTemplateError, AclTemplateResult};
pub use templates::{generic_acl, immutable, lens_account_only, wallet_only};
pub use types::{
    AclTemplate, ChainId, EvmAddress, GenericAcl, ImmutableAcl, LensAccountAcl, WalletAddressAcl,
};
