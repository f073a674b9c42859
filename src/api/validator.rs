// ==========================================
// 工位排班基础数据 - 输入校验
// ==========================================
// 职责: 表单输入校验与解析（名称非空、顺序为整数、设定字符串）
// 说明: 校验失败统一返回 ApiError::InvalidInput，仓储保持不变
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Preference, StationSetting};
use crate::i18n::{t, t_with_args};

/// 校验必填文本（去除首尾空白后不能为空）
///
/// 通过校验时返回原值，不修改用户输入
pub fn require_text(value: &str, message_key: &str) -> ApiResult<String> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(t(message_key)));
    }
    Ok(value.to_string())
}

/// 解析工作站顺序
pub fn parse_station_order(raw: &str) -> ApiResult<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        ApiError::InvalidInput(t_with_args("validation.invalid_order", &[("value", raw)]))
    })
}

/// 解析工作站设定字符串
///
/// 格式: `<station_id>=<yes|no>[:<high|normal|low>]`，偏好缺省为 normal
///
/// # 示例
/// - `s1=yes:high`
/// - `s2=no`
pub fn parse_station_setting(raw: &str) -> ApiResult<(String, StationSetting)> {
    let invalid = || ApiError::InvalidInput(t_with_args("validation.invalid_setting", &[("value", raw)]));

    let (station_id, rest) = raw.split_once('=').ok_or_else(invalid)?;
    let station_id = station_id.trim();
    if station_id.is_empty() {
        return Err(invalid());
    }

    let (ability_raw, preference_raw) = match rest.split_once(':') {
        Some((a, p)) => (a, Some(p)),
        None => (rest, None),
    };

    let ability = match ability_raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => true,
        "no" | "false" | "0" => false,
        _ => return Err(invalid()),
    };

    let preference = match preference_raw {
        Some(p) => p.parse::<Preference>().map_err(|_| invalid())?,
        None => Preference::Normal,
    };

    Ok((station_id.to_string(), StationSetting::new(ability, preference)))
}
