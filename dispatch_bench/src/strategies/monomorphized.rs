//! 単相化ディスパッチ
//!
//! バリアントごとにジェネリックな価格計算器を型パラメータで固定し、
//! コンパイル時に呼び出し先を確定させる

use crate::core::{BenchResult, PricingStrategy};
use crate::instruments::{option_price, stock_price, Dataset, OptionContract, Record, Stock};
use std::marker::PhantomData;

/// コンパイル時に解決される価格計算
pub trait StaticPrice {
    fn price_static(&self) -> f64;
}

impl StaticPrice for Stock {
    #[inline]
    fn price_static(&self) -> f64 {
        stock_price(self.price_factor, self.common_factor())
    }
}

impl StaticPrice for OptionContract {
    #[inline]
    fn price_static(&self) -> f64 {
        option_price(self.volatility, self.common_factor())
    }
}

/// 型パラメータで対象を固定したゼロサイズの価格計算器
#[derive(Debug)]
pub struct StaticPricer<T: StaticPrice> {
    _marker: PhantomData<T>,
}

impl<T: StaticPrice> StaticPricer<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn price(&self, data: &T) -> f64 {
        data.price_static()
    }
}

impl<T: StaticPrice> Default for StaticPricer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// バリアントごとの `StaticPricer` に委譲する戦略
#[derive(Debug, Default)]
pub struct MonomorphizedDispatch {
    stocks: StaticPricer<Stock>,
    options: StaticPricer<OptionContract>,
}

impl MonomorphizedDispatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PricingStrategy for MonomorphizedDispatch {
    type Item = Record;

    const NAME: &'static str = "monomorphized";
    const DESCRIPTION: &'static str =
        "Generic per-variant pricer resolved at compile time (CRTP equivalent)";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.records().to_vec()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        Ok(match item {
            Record::Stock(stock) => self.stocks.price(stock),
            Record::Option(option) => self.options.price(option),
        })
    }
}
