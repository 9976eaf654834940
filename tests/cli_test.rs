use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn csv2json(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_csv2json"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_converts_explicit_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("march.csv"),
        "a,quantity,is_promo\nx,3,1\ny,0,0\n",
    )?;

    let output = csv2json(&temp_dir, &["march.csv"])?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!([
            {"a": "x", "quantity": 3, "is_promo": true},
            {"a": "y", "quantity": 0, "is_promo": false}
        ])
    );
    Ok(())
}

#[test]
fn test_defaults_to_orders_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("orders.csv"),
        "sku,quantity,is_promo\n12,4,-1\n",
    )?;

    let output = csv2json(&temp_dir, &[])?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!([{"sku": "12", "quantity": 4, "is_promo": true}])
    );
    Ok(())
}

#[test]
fn test_missing_default_file_fails_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = csv2json(&temp_dir, &[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("orders.csv"));
    Ok(())
}

#[test]
fn test_coercion_failure_exits_non_zero_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("orders.csv"),
        "quantity,is_promo\n1,0\n2,abc\n",
    )?;

    let output = csv2json(&temp_dir, &[])?;

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is_promo"));
    Ok(())
}

#[test]
fn test_header_only_prints_empty_array() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("orders.csv"), "a,quantity,is_promo\n")?;

    let output = csv2json(&temp_dir, &[])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "[]");
    Ok(())
}

#[test]
fn test_large_quantity_is_printed_exactly() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("orders.csv"),
        "quantity,is_promo\n99999999999999999999,99999999999999999999\n",
    )?;

    let output = csv2json(&temp_dir, &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("\"quantity\": 99999999999999999999,"));
    assert!(stdout.contains("\"is_promo\": true"));
    Ok(())
}
