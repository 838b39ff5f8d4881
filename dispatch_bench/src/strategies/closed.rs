// クローズドディスパッチ - 列挙型の網羅的match

use crate::core::{BenchResult, PricingStrategy};
use crate::instruments::{Dataset, Record};

/// `Record` を直接matchして価格を計算する戦略
#[derive(Debug, Default, Clone, Copy)]
pub struct ClosedDispatch;

impl ClosedDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl PricingStrategy for ClosedDispatch {
    type Item = Record;

    const NAME: &'static str = "closed";
    const DESCRIPTION: &'static str = "Exhaustive match over the `Record` enum";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.records().to_vec()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        Ok(item.price())
    }
}
