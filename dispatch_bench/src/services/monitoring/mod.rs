// 計測結果の監視機能
// 計測値の出力、エラー通知、完了通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
