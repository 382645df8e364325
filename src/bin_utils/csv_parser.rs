use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::money::Currency;

#[derive(Debug, Deserialize)]
pub struct WithdrawalRequest {
    pub card: String,
    // kept as text so leading zeros survive
    pub pin: String,
    pub amount: Decimal,
    pub currency: Currency,
}

/// Parses the withdrawal request list in CSV format
///
/// # Panics
///
/// If a request row cannot be parsed
pub struct CsvRequestParser<R> {
    iter: DeserializeRecordsIntoIter<R, WithdrawalRequest>,
}

impl<R> CsvRequestParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvRequestParser<R>
where
    R: Read,
{
    type Item = (u64, WithdrawalRequest);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
