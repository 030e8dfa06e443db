//! Read-only account lookups.
//!
//! Nothing here decodes account data: bytes come back exactly as the
//! transport returned them, and so do transport errors.

use anchor_lang::prelude::*;
use async_trait::async_trait;
use tracing::debug;

use crate::constants::LINK_IDENTITY_OFFSET;

/// Exact byte match at a fixed offset of the account data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcmpFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..)
            .is_some_and(|rest| rest.starts_with(&self.bytes))
    }
}

/// The two read shapes this crate needs from an RPC node
#[async_trait]
pub trait AccountTransport {
    type Error: Send;

    /// Account data, `None` if the account does not exist
    async fn get_account_data(
        &self,
        address: &Pubkey,
    ) -> std::result::Result<Option<Vec<u8>>, Self::Error>;

    /// Accounts owned by `program_id` whose data matches `filter`
    async fn get_program_accounts_filtered(
        &self,
        program_id: &Pubkey,
        filter: &MemcmpFilter,
    ) -> std::result::Result<Vec<(Pubkey, Vec<u8>)>, Self::Error>;
}

/// Filter selecting WalletLink accounts that belong to `identity`
pub fn links_by_identity_filter(identity: &Pubkey) -> MemcmpFilter {
    MemcmpFilter::new(LINK_IDENTITY_OFFSET, identity.to_bytes())
}

pub async fn fetch_space<T>(
    transport: &T,
    space: &Pubkey,
) -> std::result::Result<Option<Vec<u8>>, T::Error>
where
    T: AccountTransport + Sync + ?Sized,
{
    debug!(%space, "fetching space account");
    transport.get_account_data(space).await
}

pub async fn fetch_identity<T>(
    transport: &T,
    identity: &Pubkey,
) -> std::result::Result<Option<Vec<u8>>, T::Error>
where
    T: AccountTransport + Sync + ?Sized,
{
    debug!(%identity, "fetching identity account");
    transport.get_account_data(identity).await
}

/// All wallet links of `identity` under `program_id`
pub async fn fetch_links_for_identity<T>(
    transport: &T,
    program_id: &Pubkey,
    identity: &Pubkey,
) -> std::result::Result<Vec<(Pubkey, Vec<u8>)>, T::Error>
where
    T: AccountTransport + Sync + ?Sized,
{
    let filter = links_by_identity_filter(identity);
    debug!(%program_id, %identity, offset = filter.offset, "scanning wallet links");
    transport
        .get_program_accounts_filtered(program_id, &filter)
        .await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct TransportDown(&'static str);

    #[derive(Default)]
    struct MemoryTransport {
        accounts: HashMap<Pubkey, (Pubkey, Vec<u8>)>,
        down: bool,
    }

    impl MemoryTransport {
        fn insert(&mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
            self.accounts.insert(address, (owner, data));
        }
    }

    #[async_trait]
    impl AccountTransport for MemoryTransport {
        type Error = TransportDown;

        async fn get_account_data(
            &self,
            address: &Pubkey,
        ) -> std::result::Result<Option<Vec<u8>>, TransportDown> {
            if self.down {
                return Err(TransportDown("connection refused"));
            }
            Ok(self.accounts.get(address).map(|(_, data)| data.clone()))
        }

        async fn get_program_accounts_filtered(
            &self,
            program_id: &Pubkey,
            filter: &MemcmpFilter,
        ) -> std::result::Result<Vec<(Pubkey, Vec<u8>)>, TransportDown> {
            if self.down {
                return Err(TransportDown("connection refused"));
            }
            let mut found: Vec<_> = self
                .accounts
                .iter()
                .filter(|(_, (owner, data))| owner == program_id && filter.matches(data))
                .map(|(address, (_, data))| (*address, data.clone()))
                .collect();
            found.sort();
            Ok(found)
        }
    }

    fn link_data(identity: &Pubkey, tail: u8) -> Vec<u8> {
        let mut data = vec![0xD1; 8]; // account discriminator
        data.push(0xFF);
        data.extend_from_slice(identity.as_ref());
        data.extend_from_slice(&[tail; 32]);
        data
    }

    #[test]
    fn test_memcmp_filter_matches() {
        let filter = MemcmpFilter::new(2, vec![0xAA, 0xBB]);
        assert!(filter.matches(&[0, 0, 0xAA, 0xBB]));
        assert!(filter.matches(&[0, 0, 0xAA, 0xBB, 0xCC]));
        assert!(!filter.matches(&[0, 0, 0xAA]));
        assert!(!filter.matches(&[0xAA, 0xBB, 0, 0]));
        assert!(!filter.matches(&[]));
    }

    #[test]
    fn test_links_filter_offset() {
        let identity = Pubkey::new_from_array([0x42; 32]);
        let filter = links_by_identity_filter(&identity);
        assert_eq!(filter.offset, 9);
        assert_eq!(filter.bytes, identity.to_bytes().to_vec());
    }

    #[tokio::test]
    async fn test_fetch_returns_raw_bytes() {
        let space = Pubkey::new_from_array([0x01; 32]);
        let identity = Pubkey::new_from_array([0x02; 32]);
        let mut transport = MemoryTransport::default();
        transport.insert(space, crate::ID, vec![1, 2, 3]);

        assert_eq!(fetch_space(&transport, &space).await, Ok(Some(vec![1, 2, 3])));
        assert_eq!(fetch_identity(&transport, &identity).await, Ok(None));
    }

    #[tokio::test]
    async fn test_fetch_links_for_identity() {
        let identity = Pubkey::new_from_array([0x02; 32]);
        let other_identity = Pubkey::new_from_array([0x03; 32]);
        let foreign_program = Pubkey::new_from_array([0x09; 32]);

        let link_a = Pubkey::new_from_array([0x10; 32]);
        let link_b = Pubkey::new_from_array([0x11; 32]);

        let mut transport = MemoryTransport::default();
        transport.insert(link_a, crate::ID, link_data(&identity, 1));
        transport.insert(link_b, crate::ID, link_data(&identity, 2));
        transport.insert(
            Pubkey::new_from_array([0x12; 32]),
            crate::ID,
            link_data(&other_identity, 1),
        );
        transport.insert(
            Pubkey::new_from_array([0x13; 32]),
            foreign_program,
            link_data(&identity, 1),
        );

        let links = fetch_links_for_identity(&transport, &crate::ID, &identity)
            .await
            .unwrap();
        assert_eq!(
            links,
            vec![(link_a, link_data(&identity, 1)), (link_b, link_data(&identity, 2))]
        );
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let transport = MemoryTransport {
            down: true,
            ..Default::default()
        };
        let address = Pubkey::new_from_array([0x01; 32]);

        assert_eq!(
            fetch_space(&transport, &address).await,
            Err(TransportDown("connection refused"))
        );
        assert_eq!(
            fetch_links_for_identity(&transport, &crate::ID, &address).await,
            Err(TransportDown("connection refused"))
        );
    }
}
