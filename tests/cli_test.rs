use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_demo_prints_breakdown() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("cart-pricing"));
    cmd.arg("demo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Subtotal: 330000.00 RUB"))
        .stdout(predicate::str::contains("Discounts: 38000.00 RUB"))
        .stdout(predicate::str::contains("Shipping: 900.00 RUB"))
        .stdout(predicate::str::contains("Tax: 58580.00 RUB"))
        .stdout(predicate::str::contains("Total: 351480.00 RUB"));

    Ok(())
}

#[test]
fn test_demo_currency_label() {
    let mut cmd = Command::new(cargo_bin!("cart-pricing"));
    cmd.args(["demo", "--currency", "руб."]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total: 351480.00 руб."));
}

#[test]
fn test_fixture_quote_matches_demo() {
    let mut cmd = Command::new(cargo_bin!("cart-pricing"));
    cmd.args([
        "quote",
        "tests/fixtures/cart.csv",
        "--discounts",
        "tests/fixtures/discounts.csv",
        "--region",
        "tests/fixtures/moscow.json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Discounts: 38000.00 RUB"))
        .stdout(predicate::str::contains("Total: 351480.00 RUB"));
}

#[test]
fn test_fixture_payout() {
    let mut cmd = Command::new(cargo_bin!("cart-pricing"));
    cmd.args([
        "payout",
        "tests/fixtures/transactions.csv",
        "--id",
        "p-1",
        "--currency",
        "RUB",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "id,currency,transactions,total,status,processed_at",
        ))
        .stdout(predicate::str::contains("p-1,RUB,3,151.00,pending,"))
        .stderr(predicate::str::contains("Error processing transaction"));
}

#[test]
fn test_missing_subcommand_fails() {
    let mut cmd = Command::new(cargo_bin!("cart-pricing"));
    cmd.assert().failure();
}
