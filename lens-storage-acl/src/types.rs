//! Record shapes for the ACL template family.
//!
//! Every template carries a chain id binding the policy to one network, plus
//! kind-specific fields. Serialization produces the storage service's wire
//! shape: a `template` discriminant with snake_case kind names and camelCase
//! field names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of the blockchain network a resource is bound to.
pub type ChainId = u64;

/// An EVM account address.
///
/// Carried as an opaque string. Checksum and hex-shape validation happen
/// upstream, before a value of this type is constructed; this crate never
/// inspects the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvmAddress(String);

impl EvmAddress {
    /// View the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EvmAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EvmAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for EvmAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Restricts edits and deletes to a single wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddressAcl {
    /// The wallet allowed to edit or delete the resource.
    pub wallet_address: EvmAddress,
    pub chain_id: ChainId,
}

/// Restricts edits and deletes to a single Lens Account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensAccountAcl {
    pub chain_id: ChainId,
    /// The Lens Account allowed to edit or delete the resource.
    pub lens_account: EvmAddress,
}

/// Declares the resource immutable: no principal may ever modify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmutableAcl {
    pub chain_id: ChainId,
}

/// Grants access to any caller whose call against the named contract
/// evaluates successfully.
///
/// `params` are positional arguments for `function_sig`; order is
/// significant. Built exclusively through
/// [`GenericAclBuilder`](crate::GenericAclBuilder), which enforces that all
/// fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericAcl {
    pub chain_id: ChainId,
    pub contract_address: String,
    pub function_sig: String,
    pub params: Vec<String>,
}

/// The ACL template family, tagged by policy kind.
///
/// Consumers match exhaustively; adding a kind is a breaking change by
/// design. Serialization produces the `template`-tagged wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum AclTemplate {
    WalletAddress(WalletAddressAcl),
    LensAccount(LensAccountAcl),
    Immutable(ImmutableAcl),
    GenericAcl(GenericAcl),
}

impl AclTemplate {
    /// The chain this policy is bound to, regardless of kind.
    pub fn chain_id(&self) -> ChainId {
        match self {
            AclTemplate::WalletAddress(acl) => acl.chain_id,
            AclTemplate::LensAccount(acl) => acl.chain_id,
            AclTemplate::Immutable(acl) => acl.chain_id,
            AclTemplate::GenericAcl(acl) => acl.chain_id,
        }
    }
}

impl From<WalletAddressAcl> for AclTemplate {
    fn from(acl: WalletAddressAcl) -> Self {
        AclTemplate::WalletAddress(acl)
    }
}

impl From<LensAccountAcl> for AclTemplate {
    fn from(acl: LensAccountAcl) -> Self {
        AclTemplate::LensAccount(acl)
    }
}

impl From<ImmutableAcl> for AclTemplate {
    fn from(acl: ImmutableAcl) -> Self {
        AclTemplate::Immutable(acl)
    }
}

impl From<GenericAcl> for AclTemplate {
    fn from(acl: GenericAcl) -> Self {
        AclTemplate::GenericAcl(acl)
    }
}
