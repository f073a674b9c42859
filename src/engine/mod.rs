// ==========================================
// 工位排班基础数据 - 引擎层
// ==========================================
// 职责: 只读投影（排程结果分组、能力摘要、设定表单、产线总览）
// 红线: 不修改实体仓储，不访问持久化通道
// ==========================================

pub mod line_overview;
pub mod result_projection;
pub mod settings_form;
pub mod station_summary;

// 重导出
pub use line_overview::{line_name_of, line_overview, LineOverview};
pub use result_projection::{group_by_line, project_result, LineGroups, ScheduleReport};
pub use settings_form::{settings_form, LineSettingGroup, SettingsForm, StationSettingField};
pub use station_summary::{station_summary, StationSummary};
