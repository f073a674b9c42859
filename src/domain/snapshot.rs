// ==========================================
// 工位排班基础数据 - 快照模型
// ==========================================
// 职责: 本地存储快照 / 导出设定档 / 排程结果
// 格式:
// - 本地快照: {personnel, productionLines, stations, savedAt}
// - 导出设定档: 本地快照 + version
// - 排程结果: {timestamp, assignments: [{person, station, line}]}
// ==========================================

use crate::domain::line::{ProductionLine, Station};
use crate::domain::personnel::Person;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 导出设定档版本
pub const EXPORT_VERSION: &str = "1.0";

/// 快照必需的集合字段
pub const REQUIRED_COLLECTIONS: [&str; 3] = ["personnel", "productionLines", "stations"];

/// 生成 ISO-8601 时间戳（UTC，毫秒精度，Z 结尾）
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ==========================================
// WorkplaceSnapshot - 实体集合快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkplaceSnapshot {
    pub personnel: Vec<Person>,
    pub production_lines: Vec<ProductionLine>,
    pub stations: Vec<Station>,
    /// 仅导出设定档携带；导入时不校验其类型
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl WorkplaceSnapshot {
    /// 标记为导出设定档
    pub fn into_export(mut self) -> Self {
        self.version = Some(serde_json::Value::from(EXPORT_VERSION));
        self
    }
}

// ==========================================
// Assignment / ScheduleResult - 排程结果
// ==========================================

/// 单条分配（人员 ↔ 工作站 ↔ 产线）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub person: Person,
    pub station: Station,
    pub line: ProductionLine,
}

/// 排程服务返回的结果
///
/// 两个字段都必须存在，否则视为无法解析的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// 排程时间（服务端生成，原样保留）
    pub timestamp: String,
    pub assignments: Vec<Assignment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 8, 5, 0).unwrap();
        assert_eq!(iso_timestamp(now), "2026-03-09T08:05:00.000Z");
    }

    #[test]
    fn test_local_snapshot_omits_version() {
        let snapshot = WorkplaceSnapshot {
            personnel: vec![],
            production_lines: vec![],
            stations: vec![],
            version: None,
            saved_at: Some("2026-03-09T08:05:00.000Z".to_string()),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("version").is_none());
        assert!(value["productionLines"].is_array());

        let exported = serde_json::to_value(snapshot.into_export()).unwrap();
        assert_eq!(exported["version"], EXPORT_VERSION);
    }

    #[test]
    fn test_schedule_result_accepts_naive_timestamp() {
        // 排程服务返回的时间戳不带时区
        let result: ScheduleResult = serde_json::from_str(
            r#"{"timestamp":"2026-03-09T16:05:00.123456","assignments":[]}"#,
        )
        .unwrap();
        assert_eq!(result.timestamp, "2026-03-09T16:05:00.123456");
        assert!(result.assignments.is_empty());
    }

    #[test]
    fn test_schedule_result_requires_both_fields() {
        assert!(serde_json::from_str::<ScheduleResult>(r#"{"error":"solver crashed"}"#).is_err());
        assert!(serde_json::from_str::<ScheduleResult>("{}").is_err());
        assert!(serde_json::from_str::<ScheduleResult>(r#"{"timestamp":"t"}"#).is_err());
        assert!(serde_json::from_str::<ScheduleResult>(r#"{"assignments":[]}"#).is_err());
    }

    #[test]
    fn test_snapshot_accepts_numeric_version() {
        let snapshot: WorkplaceSnapshot = serde_json::from_str(
            r#"{"personnel":[],"productionLines":[],"stations":[],"version":1}"#,
        )
        .unwrap();
        assert_eq!(snapshot.version, Some(serde_json::json!(1)));
    }
}
