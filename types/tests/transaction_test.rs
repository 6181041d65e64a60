use chainfolio_types::{
    is_approval_tx, is_transfer_tx, Chain, DetailedTx, Direction, EvmAddress, HttpsUrl, SimpleTx,
    TransferTx, TxHash, TxToken, TxType, UnrecognizedTx,
};
use serde_json::json;
use strum::IntoEnumIterator;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn detailed_json(kind: TxType) -> serde_json::Value {
    let mut value = json!({
        "type": kind.to_string(),
        "wallet": "0x742d35Cc6634C0532925a3b8D5c9C5E3C5F5c5c5",
        "chain": "avax",
        "hash": "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
        "time": 1672531200.0,
        "direction": "in",
        "fee": 0.004,
        "token": {
            "address": "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E",
            "symbol": "USDC",
            "logo": "https://assets.example.org/USDC.png"
        },
        "nativeToken": "AVAX"
    });
    if kind == TxType::Transfer {
        value["from"] = json!("0x9f8c163cBA728e99993ABe7495F06c0A3c8Ac8b9");
        value["to"] = json!("0x742d35Cc6634C0532925a3b8D5c9C5E3C5F5c5c5");
        value["value"] = json!(250.0);
        value["contract"] = json!(false);
    }
    value
}

#[test]
fn test_exactly_one_predicate_per_type() {
    for kind in TxType::iter() {
        let tx: DetailedTx = serde_json::from_value(detailed_json(kind)).unwrap();

        // Verify the tag and that exactly one family claims it
        assert_eq!(tx.tx_type(), Some(kind));
        assert_eq!(is_transfer_tx(&tx), kind == TxType::Transfer);
        assert_eq!(is_approval_tx(&tx), matches!(kind, TxType::Approve | TxType::Revoke));
        assert_ne!(is_transfer_tx(&tx), is_approval_tx(&tx));
    }
}

#[test]
fn test_revoke_without_transfer_fields() {
    let tx: DetailedTx = serde_json::from_value(detailed_json(TxType::Revoke)).unwrap();

    assert!(is_approval_tx(&tx));
    assert!(!is_transfer_tx(&tx));
    assert!(tx.as_transfer().is_none());

    // Narrow to the approval shape
    let approval = tx.as_approval().unwrap();
    assert_eq!(approval.token.symbol, "USDC");
    assert_eq!(approval.tx.direction, Direction::In);

    // Transfer-only fields must stay off the wire
    let value = serde_json::to_value(&tx).unwrap();
    for field in ["from", "to", "value", "contract"] {
        assert!(value.get(field).is_none(), "revoke must not carry {}", field);
    }
}

#[test]
fn test_transfer_narrowing_exposes_counterparties() {
    let tx: DetailedTx = serde_json::from_value(detailed_json(TxType::Transfer)).unwrap();
    let transfer = tx.as_transfer().unwrap();

    assert_eq!(transfer.from.as_str(), "0x9f8c163cBA728e99993ABe7495F06c0A3c8Ac8b9");
    assert_eq!(transfer.value, 250.0);
    assert!(!transfer.contract);
    assert_eq!(tx.simple().map(|simple| simple.chain), Some(Chain::Avax));
    assert!(!tx.is_tax_enriched());
}

#[test]
fn test_transfer_missing_value_is_rejected() {
    let mut raw = detailed_json(TxType::Transfer);
    raw.as_object_mut().unwrap().remove("value");

    // A known type with a broken body is still an error
    assert!(serde_json::from_value::<DetailedTx>(raw).is_err());
}

#[test]
fn test_tax_enrichment_adds_prices_only() {
    let transfer = TransferTx {
        tx: SimpleTx {
            wallet: EvmAddress::new("0x742d35Cc6634C0532925a3b8D5c9C5E3C5F5c5c5"),
            chain: Chain::Eth,
            hash: TxHash::new("0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"),
            time: 1672531200.0,
            direction: Direction::Out,
            fee: 0.0021,
        },
        token: TxToken {
            address: EvmAddress::new("0x514910771AF9Ca656af840dff83E8264EcF986CA"),
            symbol: "LINK".to_string(),
            logo: HttpsUrl::new("https://assets.example.org/LINK.png"),
            price: None,
        },
        native_token: "ETH".to_string(),
        from: EvmAddress::new("0x742d35Cc6634C0532925a3b8D5c9C5E3C5F5c5c5"),
        to: EvmAddress::new("0x9f8c163cBA728e99993ABe7495F06c0A3c8Ac8b9"),
        value: 12.0,
        contract: false,
        native_token_price: None,
    };
    // Update prices
    let plain = DetailedTx::Transfer(transfer.clone());
    let enriched = DetailedTx::Transfer(transfer.with_tax_pricing(1200.0, 5.6));

    assert_eq!(enriched.tx_type(), plain.tx_type());
    assert!(is_transfer_tx(&enriched));
    assert!(enriched.is_tax_enriched());
    assert!(!plain.is_tax_enriched());

    // Stripping the prices gives back the plain record
    let plain_value = serde_json::to_value(&plain).unwrap();
    let mut enriched_value = serde_json::to_value(&enriched).unwrap();
    assert_eq!(enriched_value["nativeTokenPrice"], json!(1200.0));
    assert_eq!(enriched_value["token"]["price"], json!(5.6));

    enriched_value.as_object_mut().unwrap().remove("nativeTokenPrice");
    enriched_value["token"].as_object_mut().unwrap().remove("price");
    assert_eq!(enriched_value, plain_value);
}

#[test]
fn test_unknown_type_matches_no_predicate() {
    init_tracing();
    let mut raw = detailed_json(TxType::Approve);
    raw["type"] = json!("swap");
    let tx: DetailedTx = serde_json::from_value(raw.clone()).unwrap();

    assert!(matches!(tx, DetailedTx::Unrecognized(UnrecognizedTx { ref kind, .. }) if kind == "swap"));
    assert_eq!(tx.tx_type(), None);
    assert_eq!(tx.raw_type(), "swap");
    assert!(!is_transfer_tx(&tx));
    assert!(!is_approval_tx(&tx));
    assert!(tx.simple().is_none());
    assert!(!tx.is_tax_enriched());

    // Passed along untouched
    assert_eq!(serde_json::to_value(&tx).unwrap(), raw);
}

#[test]
fn test_batch_with_unknown_type_still_loads() {
    init_tracing();
    let mut swap = detailed_json(TxType::Transfer);
    swap["type"] = json!("swap");
    let batch = json!([detailed_json(TxType::Approve), swap, detailed_json(TxType::Revoke)]);

    let txs: Vec<DetailedTx> = serde_json::from_value(batch).unwrap();
    assert_eq!(txs.len(), 3);

    // Only the known entries are classified
    let approvals = txs.iter().filter(|tx| is_approval_tx(tx)).count();
    let transfers = txs.iter().filter(|tx| is_transfer_tx(tx)).count();
    assert_eq!(approvals, 2);
    assert_eq!(transfers, 0);
    assert_eq!(txs[1].raw_type(), "swap");
}

#[test]
fn test_missing_type_is_rejected() {
    let mut raw = detailed_json(TxType::Approve);
    raw.as_object_mut().unwrap().remove("type");
    assert!(serde_json::from_value::<DetailedTx>(raw).is_err());
}
