// ==========================================
// 工位排班基础数据 - 应用层
// ==========================================
// 职责: 应用状态组装、JSON 命令层、命令行入口
// ==========================================

pub mod cli;
pub mod commands;
pub mod state;

// 重导出
pub use cli::{Cli, Commands};
pub use commands::{map_api_error, ErrorResponse};
pub use state::AppState;
