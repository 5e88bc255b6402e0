pub mod discount_reader;
pub mod item_reader;
pub mod payout_writer;
pub mod transaction_reader;

/// Reader settings shared by every CSV input: trimmed fields and tolerance for
/// missing trailing columns.
pub(crate) fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).flexible(true);
    builder
}
