// ==========================================
// 工位排班基础数据 - API 层
// ==========================================
// 职责: 提供业务 API 接口，供命令层调用
// ==========================================

pub mod error;
pub mod schedule_api;
pub mod validator;
pub mod workplace_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use schedule_api::ScheduleApi;
pub use validator::{parse_station_order, parse_station_setting, require_text};
pub use workplace_api::WorkplaceApi;
