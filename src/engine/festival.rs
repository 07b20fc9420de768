// ==========================================
// 诊所医生排班系统 - 农历节日来源
// ==========================================
// 职责: 提供逐年变动的农历节日（春节、清明等）候选日期
// 说明: best-effort 来源，只供管理页预览；
//       取数失败与“该年无数据”都折算为空贡献，绝不上抛到排班判定
// ==========================================

use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::holiday::HolidayInfo;
use crate::domain::types::{HolidayKind, HolidaySource};

/// 农历节日来源错误
///
/// “该年无数据”不是错误（Ok + 空表），错误只表示来源本身异常
#[derive(Error, Debug)]
pub enum FestivalSourceError {
    #[error("节日来源不可达: {0}")]
    Unreachable(String),

    #[error("节日数据格式错误: {0}")]
    Malformed(String),
}

/// 农历节日来源
///
/// 可由远程查询或内置表实现；实现方自行处理超时并以错误返回
pub trait FestivalSource {
    fn festivals(&self, year: i32) -> Result<BTreeMap<NaiveDate, HolidayInfo>, FestivalSourceError>;
}

/// 内置的已知年份农历节日表
///
/// 春节/清明/端午/中秋的公历日期逐年不同，这里维护查证过的年份；
/// 未收录的年份返回空表
#[derive(Debug, Default)]
pub struct StaticFestivalTable;

/// 已知年份的农历节日: (年, 月, 日, 名称)
const KNOWN_FESTIVALS: &[(i32, u32, u32, &str)] = &[
    // 2025年春节 (1月29日，假期1月28日-2月3日)
    (2025, 1, 28, "春节"),
    (2025, 1, 29, "春节"),
    (2025, 1, 30, "春节"),
    (2025, 1, 31, "春节"),
    (2025, 2, 1, "春节"),
    (2025, 2, 2, "春节"),
    (2025, 2, 3, "春节"),
    // 2025年清明节 (4月5日)
    (2025, 4, 5, "清明节"),
    (2025, 4, 6, "清明节"),
    (2025, 4, 7, "清明节"),
    // 2025年端午节 (5月31日)
    (2025, 5, 31, "端午节"),
    (2025, 6, 1, "端午节"),
    (2025, 6, 2, "端午节"),
    // 2025年中秋节 (10月6日，与国庆重合)
    (2025, 10, 6, "中秋节"),
];

impl FestivalSource for StaticFestivalTable {
    fn festivals(&self, year: i32) -> Result<BTreeMap<NaiveDate, HolidayInfo>, FestivalSourceError> {
        let mut result = BTreeMap::new();
        for &(y, month, day, name) in KNOWN_FESTIVALS {
            if y != year {
                continue;
            }
            let date = NaiveDate::from_ymd_opt(y, month, day).ok_or_else(|| {
                FestivalSourceError::Malformed(format!("非法日期: {}-{}-{}", y, month, day))
            })?;
            result.insert(
                date,
                HolidayInfo {
                    name: name.to_string(),
                    kind: HolidayKind::Holiday,
                    is_system: true,
                    source: HolidaySource::Festival,
                },
            );
        }
        Ok(result)
    }
}
