//! Custom assertions for metalctlv2 output.

use anyhow::{Context, Result};
use serde_json::Value;

/// First cell of every table row below the header, trimmed.
pub fn first_column(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(String::from)
        .collect()
}

/// Assert that the table rows start with `expected`, in that order.
pub fn assert_row_order(stdout: &str, expected: &[&str]) -> Result<()> {
    let actual = first_column(stdout);
    if actual != expected {
        anyhow::bail!("Expected rows {:?}, got {:?}\n{}", expected, actual, stdout);
    }
    Ok(())
}

/// Assert that a JSON array lists `key` values in `expected` order.
pub fn assert_json_order(json: &Value, key: &str, expected: &[&str]) -> Result<()> {
    let items = json.as_array().context("Expected a JSON array")?;

    let actual = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item[key]
                .as_str()
                .with_context(|| format!("Item {} missing string field {:?}", i, key))
        })
        .collect::<Result<Vec<_>>>()?;

    if actual != expected {
        anyhow::bail!("Expected {} order {:?}, got {:?}", key, expected, actual);
    }
    Ok(())
}

/// Assert that stderr names every one of `keys`.
pub fn assert_lists_keys(stderr: &str, keys: &[&str]) -> Result<()> {
    for key in keys {
        if !stderr.contains(key) {
            anyhow::bail!("Expected key {:?} in error output:\n{}", key, stderr);
        }
    }
    Ok(())
}
