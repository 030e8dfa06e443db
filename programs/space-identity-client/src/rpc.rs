//! `AccountTransport` over the nonblocking Solana RPC client.
//! Uses the client's configured commitment; RPC errors are returned as-is.

use anchor_lang::prelude::*;
use async_trait::async_trait;
use solana_client::client_error::ClientError as RpcError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcProgramAccountsConfig;
use solana_client::rpc_filter::{Memcmp, RpcFilterType};

use crate::reader::{AccountTransport, MemcmpFilter};

#[async_trait]
impl AccountTransport for RpcClient {
    type Error = RpcError;

    async fn get_account_data(
        &self,
        address: &Pubkey,
    ) -> std::result::Result<Option<Vec<u8>>, RpcError> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn get_program_accounts_filtered(
        &self,
        program_id: &Pubkey,
        filter: &MemcmpFilter,
    ) -> std::result::Result<Vec<(Pubkey, Vec<u8>)>, RpcError> {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                filter.offset,
                filter.bytes.clone(),
            ))]),
            ..Default::default()
        };
        let accounts = self
            .get_program_accounts_with_config(program_id, config)
            .await?;
        Ok(accounts
            .into_iter()
            .map(|(address, account)| (address, account.data))
            .collect())
    }
}
