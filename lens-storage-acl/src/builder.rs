//! Incremental builder for the generic contract-call template.

use log::{debug, trace};

use crate::error::{AclTemplateError, AclTemplateResult};
use crate::types::{ChainId, GenericAcl};

/// Accumulates the fields of a [`GenericAcl`] across any number of calls,
/// then validates and snapshots them on [`build`](Self::build).
///
/// Setters may be called in any order and overwrite previous values; `build`
/// does not consume or freeze the builder, so a builder can be built
/// repeatedly and mutated between builds. Create one via
/// [`generic_acl`](crate::generic_acl).
#[derive(Debug, Clone, Default)]
pub struct GenericAclBuilder {
    chain_id: Option<ChainId>,
    contract_address: Option<String>,
    function_sig: Option<String>,
    params: Option<Vec<String>>,
}

impl GenericAclBuilder {
    pub(crate) fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id: Some(chain_id),
            ..Self::default()
        }
    }

    /// Set the contract evaluated on access checks. Overwrites any previous
    /// value. Address format is not checked at this layer.
    pub fn with_contract_address(&mut self, contract_address: impl Into<String>) -> &mut Self {
        self.contract_address = Some(contract_address.into());
        self
    }

    /// Set the signature of the contract function to call, e.g.
    /// `"transfer(address,uint256)"`. Overwrites any previous value.
    pub fn with_function_sig(&mut self, function_sig: impl Into<String>) -> &mut Self {
        self.function_sig = Some(function_sig.into());
        self
    }

    /// Replace the positional call parameters wholesale. Order is
    /// significant; repeated calls do not append.
    pub fn with_params(&mut self, params: Vec<String>) -> &mut Self {
        self.params = Some(params);
        self
    }

    /// Discard all accumulated state.
    ///
    /// This clears the chain id supplied at construction along with every
    /// optional field. No setter for the chain id exists, so a builder
    /// reused after `reset` fails [`build`](Self::build) permanently; start
    /// over with [`generic_acl`](crate::generic_acl) instead.
    pub fn reset(&mut self) {
        trace!("resetting generic ACL template builder");
        *self = Self::default();
    }

    /// Validate the accumulated fields and return the finished record.
    ///
    /// The builder is left untouched: later setter calls keep mutating the
    /// same accumulator and are visible to later `build` calls.
    ///
    /// # Errors
    ///
    /// Returns [`AclTemplateError::IncompleteTemplate`] when any required
    /// field is absent or empty, or the chain id is zero.
    pub fn build(&self) -> AclTemplateResult<GenericAcl> {
        match (
            &self.chain_id,
            &self.contract_address,
            &self.function_sig,
            &self.params,
        ) {
            (Some(chain_id), Some(contract_address), Some(function_sig), Some(params))
                if *chain_id != 0
                    && !contract_address.is_empty()
                    && !function_sig.is_empty()
                    && !params.is_empty() =>
            {
                trace!(
                    "built generic ACL template for contract {} on chain {}",
                    contract_address,
                    chain_id
                );
                Ok(GenericAcl {
                    chain_id: *chain_id,
                    contract_address: contract_address.clone(),
                    function_sig: function_sig.clone(),
                    params: params.clone(),
                })
            }
            _ => {
                debug!("rejected generic ACL template build: required fields missing");
                Err(AclTemplateError::IncompleteTemplate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::generic_acl;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test_log::test]
    fn test_build_with_all_fields_succeeds() {
        let acl = generic_acl(1)
            .with_contract_address("0xabc")
            .with_function_sig("transfer(address,uint256)")
            .with_params(params(&["0xdef", "100"]))
            .build()
            .unwrap();

        assert_eq!(acl.chain_id, 1);
        assert_eq!(acl.contract_address, "0xabc");
        assert_eq!(acl.function_sig, "transfer(address,uint256)");
        assert_eq!(acl.params, params(&["0xdef", "100"]));
    }

    #[test_log::test]
    fn test_build_with_missing_fields_fails() {
        let result = generic_acl(1).with_contract_address("0xabc").build();
        assert!(matches!(result, Err(AclTemplateError::IncompleteTemplate)));
    }

    #[test]
    fn test_build_rejects_empty_contract_address() {
        let result = generic_acl(1)
            .with_contract_address("")
            .with_function_sig("canEdit(address)")
            .with_params(params(&["0xdef"]))
            .build();
        assert!(matches!(result, Err(AclTemplateError::IncompleteTemplate)));
    }

    #[test]
    fn test_build_rejects_empty_function_sig() {
        let result = generic_acl(1)
            .with_contract_address("0xabc")
            .with_function_sig("")
            .with_params(params(&["0xdef"]))
            .build();
        assert!(matches!(result, Err(AclTemplateError::IncompleteTemplate)));
    }

    #[test]
    fn test_build_rejects_empty_params() {
        // An empty sequence counts as missing, so a no-argument call cannot
        // currently be described. See DESIGN.md before changing this.
        let result = generic_acl(1)
            .with_contract_address("0xabc")
            .with_function_sig("canEdit()")
            .with_params(Vec::new())
            .build();
        assert!(matches!(result, Err(AclTemplateError::IncompleteTemplate)));
    }

    #[test]
    fn test_build_rejects_zero_chain_id() {
        let result = generic_acl(0)
            .with_contract_address("0xabc")
            .with_function_sig("canEdit(address)")
            .with_params(params(&["0xdef"]))
            .build();
        assert!(matches!(result, Err(AclTemplateError::IncompleteTemplate)));
    }

    #[test]
    fn test_setters_overwrite_instead_of_accumulating() {
        let mut builder = generic_acl(1);
        builder
            .with_contract_address("0x111")
            .with_function_sig("first(uint256)")
            .with_params(params(&["a"]));
        builder
            .with_contract_address("0x222")
            .with_function_sig("second(uint256)")
            .with_params(params(&["b", "c"]));

        let acl = builder.build().unwrap();
        assert_eq!(acl.contract_address, "0x222");
        assert_eq!(acl.function_sig, "second(uint256)");
        assert_eq!(acl.params, params(&["b", "c"]));
    }

    #[test]
    fn test_reset_clears_chain_id_supplied_at_construction() {
        let mut builder = generic_acl(1);
        builder
            .with_contract_address("0xabc")
            .with_function_sig("canEdit(address)")
            .with_params(params(&["0xdef"]));
        assert!(builder.build().is_ok());

        builder.reset();

        // Re-supplying the optional fields is not enough: the chain id was
        // cleared too and has no setter, so the builder is unrecoverable.
        builder
            .with_contract_address("0xabc")
            .with_function_sig("canEdit(address)")
            .with_params(params(&["0xdef"]));
        assert!(matches!(
            builder.build(),
            Err(AclTemplateError::IncompleteTemplate)
        ));
    }

    #[test]
    fn test_build_can_be_called_repeatedly() {
        let mut builder = generic_acl(1);
        builder
            .with_contract_address("0xabc")
            .with_function_sig("canEdit(address)")
            .with_params(params(&["0xdef"]));

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_reflects_mutations_after_first_build() {
        let mut builder = generic_acl(1);
        builder
            .with_contract_address("0xabc")
            .with_function_sig("canEdit(address)")
            .with_params(params(&["0xdef"]));

        let first = builder.build().unwrap();
        builder.with_params(params(&["0x999"]));
        let second = builder.build().unwrap();

        assert_eq!(first.params, params(&["0xdef"]));
        assert_eq!(second.params, params(&["0x999"]));
    }
}
