//! Entry points for constructing each ACL template kind.

use crate::builder::GenericAclBuilder;
use crate::types::{ChainId, EvmAddress, ImmutableAcl, LensAccountAcl, WalletAddressAcl};

/// Restrict edits and deletes to a single wallet address.
///
/// `chain_id` is the chain the resource is bound to. Total function: the
/// address was validated upstream and no further checks apply here.
pub fn wallet_only(address: EvmAddress, chain_id: ChainId) -> WalletAddressAcl {
    WalletAddressAcl {
        wallet_address: address,
        chain_id,
    }
}

/// Restrict edits and deletes to a single Lens Account.
pub fn lens_account_only(account: EvmAddress, chain_id: ChainId) -> LensAccountAcl {
    LensAccountAcl {
        chain_id,
        lens_account: account,
    }
}

/// Declare the resource immutable on the given chain.
pub fn immutable(chain_id: ChainId) -> ImmutableAcl {
    ImmutableAcl { chain_id }
}

/// Start building a generic contract-call template bound to `chain_id`.
///
/// The returned builder has only the chain id set; supply the contract
/// address, function signature, and parameters before calling
/// [`build`](GenericAclBuilder::build).
pub fn generic_acl(chain_id: ChainId) -> GenericAclBuilder {
    GenericAclBuilder::new(chain_id)
}
