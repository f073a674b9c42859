// ==========================================
// 工位排班基础数据 - JSON 命令层
// ==========================================
// 职责: 以 JSON 字符串进出的命令接口，供前端壳或脚本调用
// 约定: 成功返回结果 JSON；失败返回 ErrorResponse JSON
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::{parse_station_order, ApiError, ScheduleApi};
use crate::app::state::AppState;
use crate::domain::StationSettings;

// ==========================================
// 公共工具：错误映射、序列化
// ==========================================

/// 错误响应（返回给调用方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串
pub fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: err.code().to_string(),
        message: err.to_string(),
        details: None,
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}

/// 导出结果（文件名 + 文件内容）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub file_name: String,
    pub content: String,
}

// ==========================================
// 人员相关命令
// ==========================================

pub fn list_personnel(state: &AppState) -> Result<String, String> {
    let api = state.workplace().map_err(map_api_error)?;
    to_json(&api.list_personnel())
}

pub fn add_person(state: &AppState, name: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let person = api.add_person(&name).map_err(map_api_error)?;
    to_json(&person)
}

pub fn delete_person(state: &AppState, person_id: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let deleted = api.delete_person(&person_id).map_err(map_api_error)?;
    to_json(&deleted)
}

/// 切换休假；人员不存在时返回 null
pub fn toggle_leave(state: &AppState, person_id: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let on_leave = api.toggle_leave(&person_id).map_err(map_api_error)?;
    to_json(&on_leave)
}

pub fn get_station_summary(state: &AppState, person_id: String) -> Result<String, String> {
    let api = state.workplace().map_err(map_api_error)?;
    let summary = api.station_summary(&person_id).map_err(map_api_error)?;
    to_json(&summary)
}

pub fn get_settings_form(state: &AppState, person_id: String) -> Result<String, String> {
    let api = state.workplace().map_err(map_api_error)?;
    let form = api.settings_form(&person_id).map_err(map_api_error)?;
    to_json(&form)
}

/// 整体覆写人员的工作站设定
pub fn update_person_settings(
    state: &AppState,
    person_id: String,
    settings: StationSettings,
) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let updated = api
        .set_person_station_settings(&person_id, settings)
        .map_err(map_api_error)?;
    to_json(&updated)
}

// ==========================================
// 产线相关命令
// ==========================================

/// 产线总览（含按序列解析的工作站）
pub fn list_lines(state: &AppState) -> Result<String, String> {
    let api = state.workplace().map_err(map_api_error)?;
    to_json(&api.line_overview())
}

pub fn add_line(state: &AppState, name: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let line = api.add_line(&name).map_err(map_api_error)?;
    to_json(&line)
}

pub fn delete_line(state: &AppState, line_id: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let deleted = api.delete_line(&line_id).map_err(map_api_error)?;
    to_json(&deleted)
}

// ==========================================
// 工作站相关命令
// ==========================================

pub fn list_stations(state: &AppState) -> Result<String, String> {
    let api = state.workplace().map_err(map_api_error)?;
    to_json(&api.list_stations())
}

pub fn add_station(
    state: &AppState,
    line_id: String,
    name: String,
    high_priority: bool,
    priority_assign: bool,
) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let station = api
        .add_station(&line_id, &name, high_priority, priority_assign)
        .map_err(map_api_error)?;
    to_json(&station)
}

/// 编辑工作站；order 以表单原始文本传入
pub fn edit_station(
    state: &AppState,
    station_id: String,
    name: String,
    order: String,
    high_priority: bool,
    priority_assign: bool,
) -> Result<String, String> {
    let order = parse_station_order(&order).map_err(map_api_error)?;
    let mut api = state.workplace().map_err(map_api_error)?;
    let updated = api
        .edit_station(&station_id, &name, order, high_priority, priority_assign)
        .map_err(map_api_error)?;
    to_json(&updated)
}

pub fn delete_station(state: &AppState, station_id: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    let deleted = api.delete_station(&station_id).map_err(map_api_error)?;
    to_json(&deleted)
}

// ==========================================
// 设定档导入导出
// ==========================================

pub fn export_settings(state: &AppState) -> Result<String, String> {
    let api = state.workplace().map_err(map_api_error)?;
    let exported = api.export_snapshot().map_err(map_api_error)?;
    let content = String::from_utf8(exported.bytes)
        .map_err(|e| map_api_error(ApiError::InternalError(e.to_string())))?;
    to_json(&ExportPayload {
        file_name: exported.file_name,
        content,
    })
}

pub fn import_settings(state: &AppState, content: String) -> Result<String, String> {
    let mut api = state.workplace().map_err(map_api_error)?;
    api.import_snapshot(content.as_bytes()).map_err(map_api_error)?;
    to_json(&true)
}

// ==========================================
// 排程相关命令
// ==========================================

/// 执行排程（锁内组装请求，锁外等待服务响应）
pub async fn execute_schedule(state: &AppState) -> Result<String, String> {
    let request = {
        let api = state.workplace().map_err(map_api_error)?;
        ScheduleApi::build_request(api.store())
    };

    let result = state
        .schedule_api
        .execute(request)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 读取（并消费）最近一次排程结果
pub fn get_schedule_result(state: &AppState) -> Result<String, String> {
    let report = state.schedule_api.latest_report().map_err(map_api_error)?;
    to_json(&report)
}
