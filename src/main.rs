use cart_pricing::application::engine::PayoutEngine;
use cart_pricing::domain::cart::Cart;
use cart_pricing::domain::discount::Discount;
use cart_pricing::domain::money::Money;
use cart_pricing::domain::payout::Payout;
use cart_pricing::domain::product::Product;
use cart_pricing::domain::region::Region;
use cart_pricing::interfaces::config::load_region;
use cart_pricing::interfaces::csv::discount_reader::DiscountReader;
use cart_pricing::interfaces::csv::item_reader::ItemReader;
use cart_pricing::interfaces::csv::payout_writer::PayoutWriter;
use cart_pricing::interfaces::csv::transaction_reader::TransactionReader;
use cart_pricing::interfaces::report::QuoteReport;
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a sample cart and print the breakdown
    Demo {
        /// Label printed after every amount
        #[arg(long, default_value = "RUB")]
        currency: String,
    },
    /// Price the cart described by a CSV file
    Quote(QuoteArgs),
    /// Aggregate a CSV file of transactions into a payout
    Payout(PayoutArgs),
}

#[derive(Args)]
struct QuoteArgs {
    /// Cart items CSV file (id, name, price, weight, category, quantity)
    items: PathBuf,

    /// Discount rules CSV file (kind, value, category, min_amount)
    #[arg(long)]
    discounts: Option<PathBuf>,

    /// Region definition JSON file. Overrides the inline region flags.
    #[arg(long)]
    region: Option<PathBuf>,

    #[arg(long, default_value = "DEFAULT")]
    region_code: String,

    /// Tax rate as a fraction, e.g. 0.20
    #[arg(long, default_value = "0")]
    tax_rate: Decimal,

    /// Shipping cost per unit of weight
    #[arg(long, default_value = "0")]
    shipping_rate: Decimal,

    /// Label printed after every amount
    #[arg(long, default_value = "RUB")]
    currency: String,
}

#[derive(Args)]
struct PayoutArgs {
    /// Transactions CSV file (id, amount, currency[, created_at])
    input: PathBuf,

    #[arg(long)]
    id: String,

    /// Currency every transaction must be in
    #[arg(long)]
    currency: String,

    /// Mark the payout processed once all transactions are in
    #[arg(long)]
    process: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { currency } => {
            let quote = demo_cart().quote();
            print!("{}", QuoteReport::new(&quote, &currency));
        }
        Command::Quote(args) => quote(args)?,
        Command::Payout(args) => payout(args)?,
    }

    Ok(())
}

fn demo_cart() -> Cart {
    let moscow = Region::new("MSK", dec!(0.20), Money::new(dec!(300)));
    let mut cart = Cart::new(moscow);

    let laptop = Product::new(
        "laptop-1",
        "MacBook Pro",
        Money::new(dec!(150000)),
        dec!(2.0),
        "electronics",
    );
    let phone = Product::new(
        "phone-1",
        "iPhone 15",
        Money::new(dec!(90000)),
        dec!(0.5),
        "electronics",
    );

    cart.add_item(laptop, 1);
    cart.add_item(phone, 2);

    cart.add_discount(
        Discount::percentage(dec!(10))
            .for_category("electronics")
            .with_min_amount(Money::new(dec!(200000))),
    );
    cart.add_discount(
        Discount::fixed(Money::new(dec!(5000))).with_min_amount(Money::new(dec!(100000))),
    );

    cart
}

fn quote(args: QuoteArgs) -> Result<()> {
    let region = match args.region {
        Some(path) => load_region(path).into_diagnostic()?,
        None => Region::new(args.region_code, args.tax_rate, Money::new(args.shipping_rate)),
    };
    debug!(region = %region.code, "pricing cart");
    let mut cart = Cart::new(region);

    let file = File::open(args.items).into_diagnostic()?;
    for item in ItemReader::new(file).items() {
        match item {
            Ok((product, quantity)) => cart.add_item(product, quantity),
            Err(e) => error!("Error reading item: {e}"),
        }
    }

    if let Some(path) = args.discounts {
        let file = File::open(path).into_diagnostic()?;
        for discount in DiscountReader::new(file).discounts() {
            match discount {
                Ok(discount) => cart.add_discount(discount),
                Err(e) => error!("Error reading discount: {e}"),
            }
        }
    }

    let quote = cart.quote();
    print!("{}", QuoteReport::new(&quote, &args.currency));
    Ok(())
}

fn payout(args: PayoutArgs) -> Result<()> {
    let mut engine = PayoutEngine::new(Payout::new(args.id, args.currency));

    let file = File::open(args.input).into_diagnostic()?;
    for tx_result in TransactionReader::new(file).transactions() {
        match tx_result {
            // Rejects are logged and counted by the engine.
            Ok(tx) => {
                let _ = engine.process_transaction(tx);
            }
            Err(e) => error!("Error reading transaction: {e}"),
        }
    }

    let settlement = engine.finish(args.process).into_diagnostic()?;
    debug!(rejected = settlement.rejected, "payout aggregated");

    let stdout = io::stdout();
    let mut writer = PayoutWriter::new(stdout.lock());
    writer.write_payout(&settlement.payout).into_diagnostic()?;

    Ok(())
}
