// ベンチマーク専用のカスタムエラー型定義

use thiserror::Error;

/// ベンチマーク実行時のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("未知のバリアント: {type_name} (戦略: {strategy})")]
    UnknownVariant { strategy: String, type_name: String },

    #[error(
        "価格不一致: {strategy} - レコード#{index} 期待値 {expected} / 実際 {actual}"
    )]
    PriceMismatch {
        strategy: String,
        index: usize,
        expected: f64,
        actual: f64,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("レポート出力エラー: {source}")]
    ReportError {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 未知バリアントエラーの作成
    pub fn unknown_variant(strategy: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            strategy: strategy.into(),
            type_name: type_name.into(),
        }
    }

    /// 価格不一致エラーの作成
    pub fn price_mismatch(
        strategy: impl Into<String>,
        index: usize,
        expected: f64,
        actual: f64,
    ) -> Self {
        Self::PriceMismatch {
            strategy: strategy.into(),
            index,
            expected,
            actual,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::ReportError { source }
    }

    /// ディスパッチ方式そのものに起因するエラーかどうか
    pub fn is_dispatch_failure(&self) -> bool {
        matches!(
            self,
            Self::UnknownVariant { .. } | Self::PriceMismatch { .. }
        )
    }
}

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    /// 新しいバリデーションエラーを作成
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for BenchError {
    fn from(error: ValidationError) -> Self {
        BenchError::ValidationError {
            field: error.field,
            reason: error.reason,
        }
    }
}

/// ベンチマークの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let error = BenchError::unknown_variant("inspection", "Bond");
        let message = error.to_string();

        assert!(message.contains("Bond"));
        assert!(message.contains("inspection"));
        assert!(error.is_dispatch_failure());
    }

    #[test]
    fn test_price_mismatch_fields() {
        let error = BenchError::price_mismatch("open", 3, 2.5, 0.0);

        match error {
            BenchError::PriceMismatch {
                strategy,
                index,
                expected,
                actual,
            } => {
                assert_eq!(strategy, "open");
                assert_eq!(index, 3);
                assert_eq!(expected, 2.5);
                assert_eq!(actual, 0.0);
            }
            _ => panic!("Expected PriceMismatch variant"),
        }
    }

    #[test]
    fn test_validation_error_conversion() {
        let error: BenchError = ValidationError::new("iterations", "must be > 0").into();

        assert!(!error.is_dispatch_failure());
        assert!(error.to_string().contains("iterations"));
    }

    #[test]
    fn test_report_error_source() {
        let error = BenchError::report(anyhow::anyhow!("disk full"));
        let source = std::error::Error::source(&error);

        assert!(source.is_some());
        assert!(error.to_string().contains("disk full"));
    }
}
