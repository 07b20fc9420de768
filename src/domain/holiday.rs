// ==========================================
// 诊所医生排班系统 - 节假日实体
// ==========================================
// 对应数据表: holidays (date 唯一)
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::types::{HolidayKind, HolidaySource};

/// 节假日表记录
///
/// 更新方式为“删除后重建”，不支持原地编辑
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    /// 是否为系统预设（初始化脚本写入）；仅影响提示文案，不影响可删除性
    pub is_system: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// 某一日期的节假日信息（缓存与管理页预览共用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    pub is_system: bool,
    pub source: HolidaySource,
}

impl From<&HolidayRecord> for HolidayInfo {
    fn from(record: &HolidayRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind,
            is_system: record.is_system,
            source: HolidaySource::Database,
        }
    }
}

/// 一次工作日判定的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    pub is_working_day: bool,
    /// 当日的节假日名称（有记录才有，custom 记录同样给出标签）
    pub label: Option<String>,
}

/// 默认周历规则: 周一至周五工作，周六周日休息
pub fn weekday_default_is_working(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
