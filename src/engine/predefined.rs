// ==========================================
// 诊所医生排班系统 - 预定义固定节假日
// ==========================================
// 职责: 内置的公历固定节假日（每年同月同日）
// 说明: 仅作为管理页预览的参考来源，不具判定权威；
//       排班判定只认 holidays 表
// ==========================================

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::holiday::HolidayInfo;
use crate::domain::types::{HolidayKind, HolidaySource};

/// 固定节假日表: (月, 日, 名称)
const FIXED_HOLIDAYS: &[(u32, u32, &str)] = &[
    // 元旦 (1月1日)
    (1, 1, "元旦"),
    // 劳动节 (5月1-3日)
    (5, 1, "劳动节"),
    (5, 2, "劳动节"),
    (5, 3, "劳动节"),
    // 国庆节 (10月1-7日)
    (10, 1, "国庆节"),
    (10, 2, "国庆节"),
    (10, 3, "国庆节"),
    (10, 4, "国庆节"),
    (10, 5, "国庆节"),
    (10, 6, "国庆节"),
    (10, 7, "国庆节"),
];

/// 指定年份的预定义固定节假日
pub fn fixed_holidays(year: i32) -> BTreeMap<NaiveDate, HolidayInfo> {
    let mut holidays = BTreeMap::new();
    for &(month, day, name) in FIXED_HOLIDAYS {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            holidays.insert(
                date,
                HolidayInfo {
                    name: name.to_string(),
                    kind: HolidayKind::Holiday,
                    is_system: true,
                    source: HolidaySource::Predefined,
                },
            );
        }
    }
    holidays
}
