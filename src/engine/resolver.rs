// ==========================================
// 诊所医生排班系统 - 工作日解析引擎
// ==========================================
// 职责: 回答“某日是否工作日”以及当日节假日标签
// 判定优先级（高→低）:
//   1. 数据库记录 type=workday → 工作日（调休，无论星期几）
//   2. 数据库记录 type=holiday → 放假日（无论星期几）
//   3. 无记录（或 type=custom）→ 周历默认: 周一至周五工作
// 缓存: 按年份记忆化，整体替换（读者看到旧表或新表，不会看到混合），
//       任何记录变更后由变更方按年失效
// ==========================================

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::domain::holiday::{weekday_default_is_working, HolidayInfo, ResolvedDay};
use crate::domain::types::HolidayKind;
use crate::engine::festival::FestivalSource;
use crate::engine::predefined;
use crate::repository::holiday_repo::HolidayRepository;

/// 某一年份的已解析节假日视图
type YearView = Arc<BTreeMap<NaiveDate, HolidayInfo>>;

pub struct HolidayResolver {
    repo: Arc<HolidayRepository>,
    festival_source: Box<dyn FestivalSource + Send + Sync>,
    /// 进程级按年缓存；值为不可变整表，重建时整体换引用
    cache: RwLock<HashMap<i32, YearView>>,
}

impl HolidayResolver {
    pub fn new(
        repo: Arc<HolidayRepository>,
        festival_source: Box<dyn FestivalSource + Send + Sync>,
    ) -> Self {
        Self {
            repo,
            festival_source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// 取某年的节假日视图，缺失时从数据库构建
    ///
    /// 数据库读取失败时返回 None（只告警，不上抛），
    /// 失败结果不入缓存，下次调用重试
    fn year_view(&self, year: i32) -> Option<YearView> {
        {
            let cache = self
                .cache
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(view) = cache.get(&year) {
                return Some(view.clone());
            }
        }

        let records = match self.repo.list_by_year(year) {
            Ok(records) => records,
            Err(e) => {
                warn!("读取{}年节假日失败，退回周历默认判定: {}", year, e);
                return None;
            }
        };

        let mut view = BTreeMap::new();
        for record in &records {
            view.insert(record.date, HolidayInfo::from(record));
        }
        let view: YearView = Arc::new(view);

        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // 并发构建时后写入者覆盖，内容来自同一张表，结果等价
        cache.insert(year, view.clone());
        Some(view)
    }

    /// 判定某日是否工作日
    ///
    /// 永不失败：数据库不可用时按周历默认规则判定
    pub fn resolve(&self, date: NaiveDate) -> ResolvedDay {
        let view = self.year_view(date.year());

        let info = view.as_ref().and_then(|v| v.get(&date));
        match info {
            Some(info) => {
                let is_working_day = match info.kind {
                    // 调休工作日：周末被征用，照常上班
                    HolidayKind::MakeupWorkday => true,
                    HolidayKind::Holiday => false,
                    // 自定义标注只给标签，不改变判定
                    HolidayKind::Custom => weekday_default_is_working(date),
                };
                ResolvedDay {
                    is_working_day,
                    label: Some(info.name.clone()),
                }
            }
            None => ResolvedDay {
                is_working_day: weekday_default_is_working(date),
                label: None,
            },
        }
    }

    /// 管理页预览：合并预定义、农历来源与数据库记录
    ///
    /// 合并顺序即权威顺序（后者覆盖前者）：预定义 < 农历来源 < 数据库。
    /// 仅供管理员参考以决定添加哪些记录；resolve 永远不走这条路径
    pub fn preview_all(&self, year: i32) -> BTreeMap<NaiveDate, HolidayInfo> {
        let mut merged = predefined::fixed_holidays(year);

        match self.festival_source.festivals(year) {
            Ok(festivals) => merged.extend(festivals),
            Err(e) => {
                warn!("获取{}年农历节日失败，预览不含该来源: {}", year, e);
            }
        }

        match self.repo.list_by_year(year) {
            Ok(records) => {
                for record in &records {
                    merged.insert(record.date, HolidayInfo::from(record));
                }
            }
            Err(e) => {
                warn!("读取{}年节假日记录失败，预览不含数据库来源: {}", year, e);
            }
        }

        merged
    }

    /// 失效某年的缓存（记录变更后由变更方调用）
    pub fn invalidate_year(&self, year: i32) {
        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if cache.remove(&year).is_some() {
            debug!("已清理{}年的节假日缓存", year);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::festival::StaticFestivalTable;
    use rusqlite::Connection;
    use std::sync::Mutex;

    fn mem_resolver() -> (Arc<HolidayRepository>, HolidayResolver) {
        let conn = Connection::open_in_memory().expect("打开内存数据库失败");
        let repo = Arc::new(
            HolidayRepository::from_connection(Arc::new(Mutex::new(conn))).expect("初始化仓储失败"),
        );
        let resolver = HolidayResolver::new(repo.clone(), Box::new(StaticFestivalTable));
        (repo, resolver)
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_resolve_三级优先级() {
        let (repo, resolver) = mem_resolver();

        // 2025-06-07 是周六，调休上班
        repo.insert_range(
            d("2025-06-07"),
            d("2025-06-07"),
            "端午节调休",
            HolidayKind::MakeupWorkday,
            false,
        )
        .unwrap();
        // 2025-06-02 是周一，放假
        repo.insert_range(
            d("2025-06-02"),
            d("2025-06-02"),
            "端午节",
            HolidayKind::Holiday,
            false,
        )
        .unwrap();

        let makeup = resolver.resolve(d("2025-06-07"));
        assert!(makeup.is_working_day);
        assert_eq!(makeup.label.as_deref(), Some("端午节调休"));

        let holiday = resolver.resolve(d("2025-06-02"));
        assert!(!holiday.is_working_day);

        // 无记录的周三按周历默认
        let plain = resolver.resolve(d("2025-06-04"));
        assert!(plain.is_working_day);
        assert!(plain.label.is_none());
    }

    #[test]
    fn test_custom记录_有标签但不改变判定() {
        let (repo, resolver) = mem_resolver();

        // 2025-06-06 周五，2025-06-08 周日
        repo.insert_range(
            d("2025-06-06"),
            d("2025-06-06"),
            "院庆日",
            HolidayKind::Custom,
            false,
        )
        .unwrap();
        repo.insert_range(
            d("2025-06-08"),
            d("2025-06-08"),
            "义诊日",
            HolidayKind::Custom,
            false,
        )
        .unwrap();

        let friday = resolver.resolve(d("2025-06-06"));
        assert!(friday.is_working_day);
        assert_eq!(friday.label.as_deref(), Some("院庆日"));

        let sunday = resolver.resolve(d("2025-06-08"));
        assert!(!sunday.is_working_day);
        assert_eq!(sunday.label.as_deref(), Some("义诊日"));
    }

    #[test]
    fn test_preview_all_数据库覆盖其他来源() {
        let (repo, resolver) = mem_resolver();

        // 数据库中把 10-06 标成调休工作日，应覆盖节日来源的“中秋节”
        repo.insert_range(
            d("2025-10-06"),
            d("2025-10-06"),
            "补班",
            HolidayKind::MakeupWorkday,
            false,
        )
        .unwrap();

        let preview = resolver.preview_all(2025);

        let overridden = &preview[&d("2025-10-06")];
        assert_eq!(overridden.name, "补班");
        assert_eq!(overridden.source, crate::domain::types::HolidaySource::Database);

        // 其余来源正常并存
        assert_eq!(preview[&d("2025-01-01")].name, "元旦");
        assert_eq!(preview[&d("2025-01-29")].name, "春节");

        // 预览来源不影响 resolve：1月29日（周三）无数据库记录，为工作日
        assert!(resolver.resolve(d("2025-01-29")).is_working_day);
    }
}
