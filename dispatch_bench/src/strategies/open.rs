// オープンディスパッチ - トレイトオブジェクトの仮想呼び出し

use crate::core::{BenchResult, PricingStrategy};
use crate::instruments::{Dataset, Instrument};

/// `dyn Instrument` のvtable経由で価格を計算する戦略
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenDispatch;

impl OpenDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl PricingStrategy for OpenDispatch {
    type Item = Box<dyn Instrument>;

    const NAME: &'static str = "open";
    const DESCRIPTION: &'static str = "Virtual call through a `dyn Instrument` vtable";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.to_instruments()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        Ok(item.price())
    }
}
