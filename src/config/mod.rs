// ==========================================
// 诊所医生排班系统 - 配置层
// ==========================================
// 职责: 日历相关的系统配置
// 说明: 年份下限是产品约束（排班功能自2025年启用），
//       不属于解析算法本身，因此做成可配置项
// ==========================================

use serde::{Deserialize, Serialize};

use crate::DEFAULT_MIN_YEAR;

/// 环境变量: 覆盖排班年份下限
pub const ENV_MIN_YEAR: &str = "CLINIC_ROSTER_MIN_YEAR";

/// 日历配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// 管理与生成功能允许的最小年份
    pub min_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
        }
    }
}

impl CalendarConfig {
    /// 从环境变量加载配置（未设置或非法时取默认值）
    pub fn from_env() -> Self {
        let min_year = std::env::var(ENV_MIN_YEAR)
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(DEFAULT_MIN_YEAR);
        Self { min_year }
    }

    /// 将请求年份钳制到下限以上（列表/预览页使用）
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.max(self.min_year)
    }
}

/// 默认数据库路径（用户数据目录下，取不到则退回当前目录）
pub fn get_default_db_path() -> String {
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("clinic-roster");
        let _ = std::fs::create_dir_all(&dir);
        return dir.join("clinic_roster.db").to_string_lossy().to_string();
    }
    "clinic_roster.db".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_year_低于下限() {
        let config = CalendarConfig::default();
        assert_eq!(config.clamp_year(2020), DEFAULT_MIN_YEAR);
        assert_eq!(config.clamp_year(2030), 2030);
    }
}
