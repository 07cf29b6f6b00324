use crate::common::error::DevupError;

/// devup全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use devup::common::result::DevupResult;
/// use devup::common::error::DevupError;
///
/// fn example_function() -> DevupResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> DevupResult<()> {
///     Err(DevupError::config_error("Something went wrong"))
/// }
/// ```
pub type DevupResult<T> = Result<T, DevupError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// Option値をValidationErrorに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use devup::common::result::{DevupResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: DevupResult<String> = none_value.ok_or_validation_error("field", "required");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> DevupResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> DevupResult<T> {
        self.ok_or_else(|| DevupError::validation_error(field, message, None))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてDevupResultに変換
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> DevupResult<T>
    where
        E: Into<std::io::Error>;

    /// 設定エラーとしてDevupResultに変換
    fn with_config_error(self, message: impl Into<String>) -> DevupResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> DevupResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| DevupError::filesystem_error_with_source(message, path, e.into()))
    }

    fn with_config_error(self, message: impl Into<String>) -> DevupResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| DevupError::config_error_with_source(message, e))
    }
}
