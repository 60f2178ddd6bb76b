// Integration tests against an in-process mock node.
//
// The mock accepts any JSON-RPC request on "/", answers with a canned
// transaction-hash result, and records every request body it sees so the
// tests can assert on the envelope exactly as the node receives it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};

use satschain_test_client::coerce::IntegerLike;
use satschain_test_client::rpc::{NodeRpc, NodeRpcConfig, RawTransaction};

const CHAIN_ID: u64 = 51415;

const CANNED_TX_HASH: &str =
    "0x73a5b33d17d3d1d78a5133a01870717af2f96d93cf8047de7c52ba184d2a29cf";

/// Requests captured by the mock node, in arrival order
type Captured = Arc<Mutex<Vec<Value>>>;

async fn rpc_handler(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    let id = body.get("id").cloned().unwrap_or(Value::Null);
    captured.lock().unwrap().push(body);

    Json(json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": CANNED_TX_HASH,
    }))
}

async fn spawn_mock_node() -> (SocketAddr, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/", post(rpc_handler))
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captured)
}

fn client_for(addr: SocketAddr) -> NodeRpc {
    NodeRpc::new(NodeRpcConfig {
        endpoint: format!("http://{}", addr),
        timeout: Duration::from_secs(5),
    })
}

#[tokio::test]
async fn test_envelope_as_seen_by_node() {
    let (addr, captured) = spawn_mock_node().await;
    let node = client_for(addr);

    node.txpool_clear().await.expect("call failed");

    let seen = captured.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["jsonrpc"], "2.0");
    assert_eq!(seen[0]["method"], "txpool_clear");
    assert_eq!(seen[0]["params"], json!([]));
    assert_eq!(seen[0]["id"], 1);
}

#[tokio::test]
async fn test_raw_body_returned_unparsed() {
    let (addr, _captured) = spawn_mock_node().await;
    let node = client_for(addr);

    let body = node
        .eth_send_raw_transaction("0x00")
        .await
        .expect("call failed");

    // the client hands back text; interpreting it is on the caller
    let parsed: Value = serde_json::from_str(&body).expect("mock answers JSON");
    assert_eq!(parsed["result"], CANNED_TX_HASH);
    assert_eq!(parsed["id"], 1);
}

#[tokio::test]
async fn test_request_ids_increment_per_call() {
    let (addr, captured) = spawn_mock_node().await;
    let node = client_for(addr);

    node.txpool_clear().await.expect("call 1 failed");
    node.miner_mine_once_synchronously(0x123)
        .await
        .expect("call 2 failed");
    node.miner_mine_bulk_synchronously(0x123, 5)
        .await
        .expect("call 3 failed");

    let seen = captured.lock().unwrap();
    let ids: Vec<u64> = seen.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(node.next_request_id(), 4);
}

#[tokio::test]
async fn test_mine_params_positional() {
    let (addr, captured) = spawn_mock_node().await;
    let node = client_for(addr);

    node.miner_mine_once_synchronously(0x123)
        .await
        .expect("mine once failed");
    node.miner_mine_bulk_synchronously(0x123, 1)
        .await
        .expect("mine bulk failed");

    let seen = captured.lock().unwrap();
    assert_eq!(seen[0]["method"], "miner_mineOnceSynchronously");
    assert_eq!(seen[0]["params"], json!([0x123]));
    assert_eq!(seen[1]["method"], "miner_mineBulkSynchronously");
    assert_eq!(seen[1]["params"], json!([0x123, 1]));
}

#[tokio::test]
async fn test_send_raw_transaction_param() {
    let (addr, captured) = spawn_mock_node().await;
    let node = client_for(addr);

    let tx = RawTransaction::transfer(
        CHAIN_ID,
        1,
        "0x03".into(),
        "0x100000".into(),
        4,
        1u64.into(),
    )
    .expect("encoding failed");

    node.eth_send_raw_transaction(&tx.to_rpc_hex())
        .await
        .expect("send failed");

    let seen = captured.lock().unwrap();
    assert_eq!(seen[0]["method"], "eth_sendRawTransaction");
    assert_eq!(seen[0]["params"], json!([tx.to_rpc_hex()]));
}

#[tokio::test]
async fn test_demo_sequence_end_to_end() {
    // clear pool, four transfers, clear pool, bulk mine - the manual
    // scenario the binary runs
    let (addr, captured) = spawn_mock_node().await;
    let node = client_for(addr);

    let account_a: IntegerLike = "0x1a45e15830052d4c441f466c4d1d92a878aa2aa5".into();
    let account_b: IntegerLike = "0xbc936ceba516e86ace90c087eb702ff064e6c73d".into();

    node.txpool_clear().await.expect("clear failed");

    let transfers = [
        (1u64, account_a.clone(), "0x200000", 3u64, account_b.clone()),
        (0, account_b.clone(), "0x300000", 2, account_a.clone()),
        (1, "0x03".into(), "0x100000", 4, account_a.clone()),
        (0, account_a.clone(), "0x200000", 1, account_b.clone()),
    ];
    for (nonce, to, value, record_no, from_addr) in transfers {
        let tx = RawTransaction::transfer(CHAIN_ID, nonce, to, value.into(), record_no, from_addr)
            .expect("encoding failed");
        node.eth_send_raw_transaction(&tx.to_rpc_hex())
            .await
            .expect("send failed");
    }

    node.txpool_clear().await.expect("clear failed");
    node.miner_mine_bulk_synchronously(0x123, 1)
        .await
        .expect("mine failed");

    let seen = captured.lock().unwrap();

    let methods: Vec<&str> = seen.iter().map(|r| r["method"].as_str().unwrap()).collect();
    assert_eq!(
        methods,
        vec![
            "txpool_clear",
            "eth_sendRawTransaction",
            "eth_sendRawTransaction",
            "eth_sendRawTransaction",
            "eth_sendRawTransaction",
            "txpool_clear",
            "miner_mineBulkSynchronously",
        ]
    );

    // every submitted payload is a 0x-prefixed nine-item RLP list
    for request in seen.iter().filter(|r| r["method"] == "eth_sendRawTransaction") {
        let raw = request["params"][0].as_str().unwrap();
        assert!(raw.starts_with("0x"));
        let decoded = hex::decode(&raw[2..]).unwrap();
        assert_eq!(rlp::Rlp::new(decoded.as_slice()).item_count().unwrap(), 9);
    }

    let ids: Vec<u64> = seen.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (1..=7).collect::<Vec<u64>>());
}
