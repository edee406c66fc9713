//! Query parameter parsing helpers.

use salvo::oapi::extract::QueryParam;

use crate::{envelope::ApiError, extensions::*};

pub(crate) trait QueryParamExt {
    /// Parse a positive page number or size, falling back to `default` when absent.
    fn into_positive_or(self, name: &str, default: i64) -> Result<i64, ApiError>;

    /// The parameter value, with an empty string treated as absent.
    fn into_filter(self) -> Option<String>;
}

impl QueryParamExt for QueryParam<String, false> {
    fn into_positive_or(self, name: &str, default: i64) -> Result<i64, ApiError> {
        let Some(raw) = self.into_inner() else {
            return Ok(default);
        };

        let value = raw
            .parse::<i64>()
            .or_400(format!("invalid {name} parameter, must be number"))?;

        if value < 1 {
            return Err(ApiError::bad_request(format!(
                "invalid {name} parameter, must be greater than zero"
            )));
        }

        Ok(value)
    }

    fn into_filter(self) -> Option<String> {
        self.into_inner().filter(|value| !value.is_empty())
    }
}
