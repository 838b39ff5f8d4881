// テスト用のモック実装

use dispatch_bench::instruments::{Dataset, Instrument, InstrumentKind};
use dispatch_bench::strategies::InspectionDispatch;
use dispatch_bench::{
    BenchResult, BenchmarkSummary, ConsoleReporter, Measurement, MeasurementReporter,
    PricingStrategy,
};
use std::any::Any;
use std::cell::RefCell;

/// 検査側が知らない商品種別
#[derive(Debug)]
pub struct Bond {
    pub coupon: f64,
}

impl Instrument for Bond {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Stock
    }

    fn price(&self) -> f64 {
        self.coupon
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 生成データの末尾に `Bond` を混ぜて型検査に渡す戦略
#[derive(Debug, Default)]
pub struct ForeignInspection {
    inner: InspectionDispatch,
}

impl PricingStrategy for ForeignInspection {
    type Item = Box<dyn Instrument>;

    const NAME: &'static str = "foreign-inspection";
    const DESCRIPTION: &'static str = "Inspection over a layout containing an unknown type";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        let mut items = dataset.to_instruments();
        items.push(Box::new(Bond { coupon: 3.0 }));
        items
    }

    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        self.inner.inspect(item.as_ref())
    }
}

/// 出力行を記録する出力先
#[derive(Debug, Default)]
pub struct RecordingReporter {
    format: ConsoleReporter,
    pub lines: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeasurementReporter for RecordingReporter {
    fn report_started(&self, strategy_count: usize, _sample_size: usize, _iterations: u64) {
        self.lines
            .borrow_mut()
            .push(format!("started {strategy_count}"));
    }

    fn report_measurement(&self, measurement: &Measurement) {
        self.lines
            .borrow_mut()
            .push(self.format.format_measurement(measurement));
    }

    fn report_error(&self, label: &str, error: &str) {
        self.errors.borrow_mut().push(format!("{label}: {error}"));
    }

    fn report_completed(&self, summary: &BenchmarkSummary) {
        self.lines
            .borrow_mut()
            .push(format!("completed {}", summary.measurements.len()));
    }
}
