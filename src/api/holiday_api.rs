// ==========================================
// 诊所医生排班系统 - 节假日管理 API
// ==========================================
// 职责:
// - 管理员对节假日表的增删（调用方已通过权限校验）
// - 排班/报表页面的工作日判定与管理页预览
// 约定:
// - 增删成功后必须先失效受影响年份的缓存再返回
// - 前端负载: {date, end_date?, name, type} / {date}，响应 {success, message}
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::config::CalendarConfig;
use crate::domain::holiday::{HolidayInfo, HolidayRecord, ResolvedDay};
use crate::domain::types::HolidayKind;
use crate::engine::resolver::HolidayResolver;
use crate::i18n::{t, t_with_args};
use crate::repository::holiday_repo::HolidayRepository;

/// 添加节假日请求
#[derive(Debug, Clone, Deserialize)]
pub struct AddHolidayRequest {
    pub date: String,
    /// 缺省时按单日处理（end_date = date）
    #[serde(default)]
    pub end_date: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: HolidayKind,
}

/// 删除节假日请求
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveHolidayRequest {
    pub date: String,
}

/// 操作响应
#[derive(Debug, Clone, Serialize)]
pub struct OpResponse {
    pub success: bool,
    pub message: String,
}

impl OpResponse {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    fn fail(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// 管理页列表行
#[derive(Debug, Clone, Serialize)]
pub struct HolidayView {
    pub date: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    pub is_system: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&HolidayRecord> for HolidayView {
    fn from(record: &HolidayRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            name: record.name.clone(),
            kind: record.kind,
            is_system: record.is_system,
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        }
    }
}

pub struct HolidayApi {
    repo: Arc<HolidayRepository>,
    resolver: Arc<HolidayResolver>,
    config: CalendarConfig,
}

impl HolidayApi {
    pub fn new(
        repo: Arc<HolidayRepository>,
        resolver: Arc<HolidayResolver>,
        config: CalendarConfig,
    ) -> Self {
        Self {
            repo,
            resolver,
            config,
        }
    }

    fn parse_date(value: &str) -> ApiResult<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::InvalidInput(t("holiday.bad_date_format")))
    }

    /// 业务预期内的失败直接回显原因，技术性失败套上统一前缀
    fn failure_message(err: &ApiError, wrap_key: &str) -> String {
        match err {
            ApiError::InvalidInput(msg)
            | ApiError::ValidationError(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg) => msg.clone(),
            other => t_with_args(wrap_key, &[("reason", &other.to_string())]),
        }
    }

    // ==========================================
    // 添加节假日（支持日期区间）
    // ==========================================
    pub fn add_holiday(&self, request: &AddHolidayRequest) -> OpResponse {
        match self.try_add_holiday(request) {
            Ok(message) => OpResponse::ok(message),
            Err(err) => OpResponse::fail(Self::failure_message(&err, "holiday.add_failed")),
        }
    }

    fn try_add_holiday(&self, request: &AddHolidayRequest) -> ApiResult<String> {
        if request.date.trim().is_empty() || request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("holiday.name_required")));
        }

        let start = Self::parse_date(&request.date)?;
        let end = match request.end_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::parse_date(raw)?,
            _ => start,
        };

        if end < start {
            return Err(ApiError::ValidationError(t("holiday.end_before_start")));
        }
        if start.year() < self.config.min_year {
            return Err(ApiError::ValidationError(t_with_args(
                "holiday.year_below_floor",
                &[("min_year", &self.config.min_year.to_string())],
            )));
        }

        // 冲突检查 + 逐日插入在仓储内同一事务完成；冲突时无部分插入
        let inserted =
            self.repo
                .insert_range(start, end, request.name.trim(), request.kind, false)?;

        // 先失效缓存再返回，后续 resolve 必然看到新记录
        for year in start.year()..=end.year() {
            self.resolver.invalidate_year(year);
        }

        info!(
            "添加节假日: {} {} ~ {} ({}天, type={})",
            request.name, start, end, inserted, request.kind
        );

        let start_str = start.format("%Y-%m-%d").to_string();
        let end_str = end.format("%Y-%m-%d").to_string();
        let message = if inserted == 1 {
            t_with_args(
                "holiday.add_success_single",
                &[("name", request.name.trim()), ("date", &start_str)],
            )
        } else {
            t_with_args(
                "holiday.add_success_range",
                &[
                    ("name", request.name.trim()),
                    ("start", &start_str),
                    ("end", &end_str),
                    ("count", &inserted.to_string()),
                ],
            )
        };
        Ok(message)
    }

    // ==========================================
    // 删除节假日（系统预设与用户记录同等可删）
    // ==========================================
    pub fn remove_holiday(&self, request: &RemoveHolidayRequest) -> OpResponse {
        match self.try_remove_holiday(request) {
            Ok(message) => OpResponse::ok(message),
            Err(err) => OpResponse::fail(Self::failure_message(&err, "holiday.remove_failed")),
        }
    }

    fn try_remove_holiday(&self, request: &RemoveHolidayRequest) -> ApiResult<String> {
        if request.date.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("holiday.date_required")));
        }
        let date = Self::parse_date(&request.date)?;

        let removed = self.repo.delete_by_date(date)?;
        self.resolver.invalidate_year(date.year());

        info!("删除节假日: {} {}", removed.date, removed.name);

        let date_str = date.format("%Y-%m-%d").to_string();
        // 系统预设与用户记录的提示文案不同，删除权限相同
        let key = if removed.is_system {
            "holiday.remove_success_system"
        } else {
            "holiday.remove_success_user"
        };
        Ok(t_with_args(
            key,
            &[("name", &removed.name), ("date", &date_str)],
        ))
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 管理页列表：仅数据库记录，按日期升序
    ///
    /// 低于年份下限的请求钳制到下限年（与管理页年份选项一致）
    pub fn list_holidays(&self, year: i32) -> ApiResult<Vec<HolidayView>> {
        let year = self.config.clamp_year(year);
        let records = self.repo.list_by_year(year)?;
        Ok(records.iter().map(HolidayView::from).collect())
    }

    /// 管理页预览：预定义 + 农历来源 + 数据库的合并视图
    pub fn preview_all(&self, year: i32) -> BTreeMap<String, HolidayInfo> {
        let year = self.config.clamp_year(year);
        self.resolver
            .preview_all(year)
            .into_iter()
            .map(|(date, info)| (date.format("%Y-%m-%d").to_string(), info))
            .collect()
    }

    /// 排班判定（永不失败，见引擎层）
    pub fn resolve(&self, date: NaiveDate) -> ResolvedDay {
        self.resolver.resolve(date)
    }

    /// 排班判定（字符串日期入口，排班路由使用）
    pub fn is_working_day(&self, date_str: &str) -> ApiResult<bool> {
        let date = Self::parse_date(date_str)?;
        Ok(self.resolver.resolve(date).is_working_day)
    }
}
