// ==========================================
// 工位排班基础数据 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 工作站偏好 (Preference)
// ==========================================
// 序列化格式: 小写 (high / normal / low)，与排程服务约定一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    High, // 高
    #[default]
    Normal, // 一般
    Low, // 低
}

impl Preference {
    /// 是否为一般偏好
    pub fn is_normal(&self) -> bool {
        matches!(self, Preference::Normal)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::High => write!(f, "high"),
            Preference::Normal => write!(f, "normal"),
            Preference::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Preference::High),
            "normal" => Ok(Preference::Normal),
            "low" => Ok(Preference::Low),
            other => Err(format!("未知的偏好等级: {}", other)),
        }
    }
}
