// ==========================================
// 诊所医生排班系统 - 领域类型定义
// ==========================================
// 序列化格式: 与数据库/前端约定的小写字符串一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 节假日类型 (Holiday Kind)
// ==========================================
// holiday: 放假日（无论星期几都不排班）
// workday: 调休工作日（周末被征用为工作日）
// custom:  自定义标注（仅做标记，不改变工作日判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayKind {
    #[serde(rename = "holiday")]
    Holiday,
    #[serde(rename = "workday")]
    MakeupWorkday,
    #[serde(rename = "custom")]
    Custom,
}

impl HolidayKind {
    /// 数据库存储格式（与前端 type 字段相同）
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayKind::Holiday => "holiday",
            HolidayKind::MakeupWorkday => "workday",
            HolidayKind::Custom => "custom",
        }
    }
}

impl Default for HolidayKind {
    // 前端未指定 type 时按自定义标注处理
    fn default() -> Self {
        HolidayKind::Custom
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HolidayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holiday" => Ok(HolidayKind::Holiday),
            "workday" => Ok(HolidayKind::MakeupWorkday),
            "custom" => Ok(HolidayKind::Custom),
            other => Err(format!("未知的节假日类型: {}", other)),
        }
    }
}

// ==========================================
// 节假日来源 (Holiday Source)
// ==========================================
// predefined: 代码内置的固定公历节假日
// festival:   外部农历节日来源（逐年变动）
// database:   节假日表中的记录（排班判定唯一依据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidaySource {
    Predefined,
    Festival,
    Database,
}

impl fmt::Display for HolidaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidaySource::Predefined => write!(f, "predefined"),
            HolidaySource::Festival => write!(f, "festival"),
            HolidaySource::Database => write!(f, "database"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_kind_字符串往返() {
        for kind in [
            HolidayKind::Holiday,
            HolidayKind::MakeupWorkday,
            HolidayKind::Custom,
        ] {
            let parsed: HolidayKind = kind.as_str().parse().expect("解析失败");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_holiday_kind_serde为小写约定() {
        let json = serde_json::to_string(&HolidayKind::MakeupWorkday).unwrap();
        assert_eq!(json, "\"workday\"");

        let parsed: HolidayKind = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(parsed, HolidayKind::Holiday);
    }

    #[test]
    fn test_holiday_kind_未知类型报错() {
        assert!("vacation".parse::<HolidayKind>().is_err());
    }
}
