//! レコードが自分の価格計算器へ委譲するディスパッチ
//!
//! 各レコードは種別ごとの価格計算器への非所有ハンドル（`&'static`）を持ち、
//! 仮想呼び出しでレコードに入ったあと価格計算器を呼ぶ2段のディスパッチ。

use crate::core::{BenchResult, PricingStrategy};
use crate::instruments::{option_price, stock_price, Dataset, OptionContract, Record, Stock};
use std::fmt;

/// 具象レコード型ごとの価格計算器
pub trait RecordPricer<T>: Sync {
    fn price(&self, record: &T) -> f64;
}

/// 株式用の価格計算器
#[derive(Debug, Default, Clone, Copy)]
pub struct StockRecordPricer;

impl RecordPricer<Stock> for StockRecordPricer {
    #[inline]
    fn price(&self, record: &Stock) -> f64 {
        stock_price(record.price_factor, record.common_factor())
    }
}

/// オプション用の価格計算器
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionRecordPricer;

impl RecordPricer<OptionContract> for OptionRecordPricer {
    #[inline]
    fn price(&self, record: &OptionContract) -> f64 {
        option_price(record.volatility, record.common_factor())
    }
}

pub static STOCK_PRICER: StockRecordPricer = StockRecordPricer;
pub static OPTION_PRICER: OptionRecordPricer = OptionRecordPricer;

/// 価格計算を自分の計算器に委譲するレコード
pub trait DelegatingRecord: fmt::Debug {
    fn price_via_pricer(&self) -> f64;
}

/// レコード本体と価格計算器へのハンドル
#[derive(Debug, Clone, Copy)]
pub struct Delegated<T, P: 'static> {
    record: T,
    pricer: &'static P,
}

impl<T, P: 'static> Delegated<T, P> {
    pub const fn new(record: T, pricer: &'static P) -> Self {
        Self { record, pricer }
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn pricer(&self) -> &'static P {
        self.pricer
    }
}

impl<T, P> DelegatingRecord for Delegated<T, P>
where
    T: fmt::Debug,
    P: RecordPricer<T> + fmt::Debug + 'static,
{
    #[inline]
    fn price_via_pricer(&self) -> f64 {
        self.pricer.price(&self.record)
    }
}

/// レコードを種別に対応する計算器と結び付ける
pub fn delegate(record: &Record) -> Box<dyn DelegatingRecord> {
    match *record {
        Record::Stock(stock) => Box::new(Delegated::new(stock, &STOCK_PRICER)),
        Record::Option(option) => Box::new(Delegated::new(option, &OPTION_PRICER)),
    }
}

/// レコード経由で価格計算器を呼ぶ戦略
#[derive(Debug, Default, Clone, Copy)]
pub struct DelegatedDispatch;

impl DelegatedDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl PricingStrategy for DelegatedDispatch {
    type Item = Box<dyn DelegatingRecord>;

    const NAME: &'static str = "delegated";
    const DESCRIPTION: &'static str =
        "Record forwards to its kind's pricer through a non-owning handle (two hops)";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.iter().map(delegate).collect()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        Ok(item.price_via_pricer())
    }
}
