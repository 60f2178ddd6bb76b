// Satschain Node Test Client - Main Entry Point
// Drives a local nosigner devnet through its admin and mining JSON-RPC
// surface with hand-crafted raw transactions.

use satschain_test_client::coerce::IntegerLike;
use satschain_test_client::rpc::{NodeRpc, RawTransaction};

/// Chain id of the local satschain devnet
const CHAIN_ID: u64 = 51415;

/// Fixture accounts the scenario shuffles value between
const ACCOUNT_A: &str = "0x1a45e15830052d4c441f466c4d1d92a878aa2aa5";
const ACCOUNT_B: &str = "0xbc936ceba516e86ace90c087eb702ff064e6c73d";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    println!("\n═══════════════════════════════════════════════");
    println!("     ⛓️  Satschain Node Test Client");
    println!("═══════════════════════════════════════════════\n");

    let node = NodeRpc::from_env();
    println!("🔗 Node RPC: {}\n", node.endpoint());

    let r = node.txpool_clear().await.expect("txpool_clear failed");
    println!("{}", r);

    // B -> A
    let tx = RawTransaction::transfer(
        CHAIN_ID,
        1,
        IntegerLike::from(ACCOUNT_A),
        "0x200000".into(),
        3,
        ACCOUNT_B.into(),
    )
    .expect("transaction encoding failed");
    let raw = tx.to_rpc_hex();
    println!("{}", raw);
    let r = node
        .eth_send_raw_transaction(&raw)
        .await
        .expect("eth_sendRawTransaction failed");
    println!("{}", r);

    // A -> B
    let tx = RawTransaction::transfer(
        CHAIN_ID,
        0,
        IntegerLike::from(ACCOUNT_B),
        "0x300000".into(),
        2,
        ACCOUNT_A.into(),
    )
    .expect("transaction encoding failed");
    let raw = tx.to_rpc_hex();
    println!("{}", raw);
    let r = node
        .eth_send_raw_transaction(&raw)
        .await
        .expect("eth_sendRawTransaction failed");
    println!("{}", r);

    // A -> precompile-range address 0x03
    let tx = RawTransaction::transfer(
        CHAIN_ID,
        1,
        "0x03".into(),
        "0x100000".into(),
        4,
        ACCOUNT_A.into(),
    )
    .expect("transaction encoding failed");
    let raw = tx.to_rpc_hex();
    println!("{}", raw);
    let r = node
        .eth_send_raw_transaction(&raw)
        .await
        .expect("eth_sendRawTransaction failed");
    println!("{}", r);

    // B -> A, fresh nonce
    let tx = RawTransaction::transfer(
        CHAIN_ID,
        0,
        IntegerLike::from(ACCOUNT_A),
        "0x200000".into(),
        1,
        ACCOUNT_B.into(),
    )
    .expect("transaction encoding failed");
    let raw = tx.to_rpc_hex();
    println!("{}", raw);
    let r = node
        .eth_send_raw_transaction(&raw)
        .await
        .expect("eth_sendRawTransaction failed");
    println!("{}", r);

    let r = node.txpool_clear().await.expect("txpool_clear failed");
    println!("{}", r);

    // single-block variant:
    // let r = node
    //     .miner_mine_once_synchronously(0x123)
    //     .await
    //     .expect("miner_mineOnceSynchronously failed");
    // println!("{}", r);

    let r = node
        .miner_mine_bulk_synchronously(0x123, 1)
        .await
        .expect("miner_mineBulkSynchronously failed");
    println!("{}", r);

    println!("\n✅ Scenario complete");
}
