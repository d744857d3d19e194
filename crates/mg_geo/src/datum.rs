//! WGS84 / GCJ02 / BD09 坐标系转换
//!
//! GCJ02（俗称"火星坐标"）是在 WGS84 基础上叠加非线性偏移的坐标系，
//! 官方未公开算法，这里复现的是公认的逆向工程经验公式；BD09 在 GCJ02
//! 之上再做一次极坐标偏移。所有系数必须与参考实现逐位一致，不存在更
//! 简洁的闭式表达。
//!
//! # 精度说明
//!
//! - GCJ02 -> WGS84 为一阶近似逆（`2*输入 - 正算(输入)`），中国范围内
//!   往返误差约 1e-5 度量级，这是参考算法的固有行为，不应"修正"。
//! - BD09 <-> GCJ02 互为代数逆，往返误差约 1e-6 度量级（扰动项的
//!   自变量在两个方向上略有差异，并非严格为零）。
//!
//! # 示例
//!
//! ```
//! use mg_geo::datum::ChinaDatum;
//!
//! let datum = ChinaDatum::STANDARD;
//! let (lng, lat) = datum.wgs84_to_gcj02(116.404, 39.915);
//! assert!((lng - 116.41024).abs() < 1e-4);
//! assert!((lat - 39.91640).abs() < 1e-4);
//! ```

use mg_foundation::error::{MgError, MgResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// 转换参数
// ============================================================================

/// GCJ02/BD09 转换参数
///
/// 不可变的常量集合，替代参考实现中的全局单例。所有转换方法都是
/// 纯函数，可重入，无任何内部状态。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChinaDatum {
    /// BD09 极坐标扰动因子: π·3000/180
    pub x_pi: f64,
    /// 圆周率
    pub pi: f64,
    /// 克拉索夫斯基椭球长半轴 (m)
    pub a: f64,
    /// 第一偏心率平方
    pub es: f64,
}

impl ChinaDatum {
    /// 公开的标准参数（与参考实现逐位一致）
    pub const STANDARD: Self = Self {
        x_pi: 3.141_592_653_589_793_24 * 3000.0 / 180.0,
        pi: PI,
        a: 6_378_245.0,
        es: 0.006_693_421_622_965_943_23,
    };

    // ========================================================================
    // WGS84 <-> GCJ02
    // ========================================================================

    /// WGS84 -> GCJ02
    ///
    /// 在 `(lng-105, lat-35)` 处求经验修正量，按当地子午圈/卯酉圈曲率
    /// 半径缩放后叠加到输入上。对任意 IEEE-754 double 总是返回值，
    /// 不做范围校验。
    #[must_use]
    pub fn wgs84_to_gcj02(&self, lng: f64, lat: f64) -> (f64, f64) {
        let dlat = self.transform_lat(lng - 105.0, lat - 35.0);
        let dlng = self.transform_lng(lng - 105.0, lat - 35.0);
        let rad_lat = lat / 180.0 * self.pi;
        let magic = 1.0 - self.es * rad_lat.sin() * rad_lat.sin();
        let sqrt_magic = magic.sqrt();
        let dlat = (dlat * 180.0) / ((self.a * (1.0 - self.es)) / (magic * sqrt_magic) * self.pi);
        let dlng = (dlng * 180.0) / (self.a / sqrt_magic * rad_lat.cos() * self.pi);
        (lng + dlng, lat + dlat)
    }

    /// GCJ02 -> WGS84（一阶近似逆）
    ///
    /// 在 GCJ02 点上做一次正算估计往返点，再反射：
    /// `result = 2*输入 - 正算(输入)`。并非精确逆。
    #[must_use]
    pub fn gcj02_to_wgs84(&self, gcj_lng: f64, gcj_lat: f64) -> (f64, f64) {
        let (mg_lng, mg_lat) = self.wgs84_to_gcj02(gcj_lng, gcj_lat);
        (gcj_lng * 2.0 - mg_lng, gcj_lat * 2.0 - mg_lat)
    }

    // ========================================================================
    // GCJ02 <-> BD09
    // ========================================================================

    /// GCJ02 -> BD09
    ///
    /// 转极坐标 `(z, theta)`，对 z、theta 叠加以 `x_pi` 缩放的微小正弦
    /// 扰动，转回直角坐标后加固定偏移 `(+0.0065, +0.006)`。
    /// 保留 `sqrt(x²+y²)` 写法（而非 `hypot`）以与参考实现逐位一致。
    #[must_use]
    pub fn gcj02_to_bd09(&self, gcj_lng: f64, gcj_lat: f64) -> (f64, f64) {
        let z = (gcj_lng * gcj_lng + gcj_lat * gcj_lat).sqrt()
            + 0.000_02 * (gcj_lat * self.x_pi).sin();
        let theta = gcj_lat.atan2(gcj_lng) + 0.000_003 * (gcj_lng * self.x_pi).cos();
        (z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
    }

    /// BD09 -> GCJ02（代数逆）
    ///
    /// 先减去固定偏移，再以相反符号还原极坐标扰动，不再加回偏移。
    #[must_use]
    pub fn bd09_to_gcj02(&self, bd_lng: f64, bd_lat: f64) -> (f64, f64) {
        let x = bd_lng - 0.0065;
        let y = bd_lat - 0.006;
        let z = (x * x + y * y).sqrt() - 0.000_02 * (y * self.x_pi).sin();
        let theta = y.atan2(x) - 0.000_003 * (x * self.x_pi).cos();
        (z * theta.cos(), z * theta.sin())
    }

    // ========================================================================
    // WGS84 <-> BD09（两步复合）
    // ========================================================================

    /// WGS84 -> BD09
    #[must_use]
    pub fn wgs84_to_bd09(&self, lng: f64, lat: f64) -> (f64, f64) {
        let (gcj_lng, gcj_lat) = self.wgs84_to_gcj02(lng, lat);
        self.gcj02_to_bd09(gcj_lng, gcj_lat)
    }

    /// BD09 -> WGS84
    #[must_use]
    pub fn bd09_to_wgs84(&self, bd_lng: f64, bd_lat: f64) -> (f64, f64) {
        let (gcj_lng, gcj_lat) = self.bd09_to_gcj02(bd_lng, bd_lat);
        self.gcj02_to_wgs84(gcj_lng, gcj_lat)
    }

    // ========================================================================
    // 经验修正级数（内部）
    // ========================================================================

    /// 纬度修正级数
    ///
    /// 固定多项式加三组不同波长的正弦修正带，系数来自逆向工程，
    /// 逐位复现，不得改写。
    fn transform_lat(&self, lng: f64, lat: f64) -> f64 {
        let mut ret = -100.0
            + 2.0 * lng
            + 3.0 * lat
            + 0.2 * lat * lat
            + 0.1 * lng * lat
            + 0.2 * lng.abs().sqrt();
        ret += (20.0 * (6.0 * lng * self.pi).sin() + 20.0 * (2.0 * lng * self.pi).sin())
            * 2.0
            / 3.0;
        ret += (20.0 * (lat * self.pi).sin() + 40.0 * (lat / 3.0 * self.pi).sin()) * 2.0 / 3.0;
        ret += (160.0 * (lat / 12.0 * self.pi).sin() + 320.0 * (lat * self.pi / 30.0).sin())
            * 2.0
            / 3.0;
        ret
    }

    /// 经度修正级数
    ///
    /// 与纬度级数的区别在于多项式系数以及正弦项自变量用 lng 还是 lat。
    fn transform_lng(&self, lng: f64, lat: f64) -> f64 {
        let mut ret = 300.0
            + lng
            + 2.0 * lat
            + 0.1 * lng * lng
            + 0.1 * lng * lat
            + 0.1 * lng.abs().sqrt();
        ret += (20.0 * (6.0 * lng * self.pi).sin() + 20.0 * (2.0 * lng * self.pi).sin())
            * 2.0
            / 3.0;
        ret += (20.0 * (lng * self.pi).sin() + 40.0 * (lng / 3.0 * self.pi).sin()) * 2.0 / 3.0;
        ret += (150.0 * (lng / 12.0 * self.pi).sin() + 300.0 * (lng / 30.0 * self.pi).sin())
            * 2.0
            / 3.0;
        ret
    }
}

impl Default for ChinaDatum {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ============================================================================
// 快捷转换函数（标准参数）
// ============================================================================

/// WGS84 -> GCJ02（标准参数）
#[must_use]
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    ChinaDatum::STANDARD.wgs84_to_gcj02(lng, lat)
}

/// GCJ02 -> WGS84（标准参数，一阶近似逆）
#[must_use]
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    ChinaDatum::STANDARD.gcj02_to_wgs84(lng, lat)
}

/// GCJ02 -> BD09（标准参数）
#[must_use]
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    ChinaDatum::STANDARD.gcj02_to_bd09(lng, lat)
}

/// BD09 -> GCJ02（标准参数）
#[must_use]
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    ChinaDatum::STANDARD.bd09_to_gcj02(lng, lat)
}

/// WGS84 -> BD09（标准参数）
#[must_use]
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    ChinaDatum::STANDARD.wgs84_to_bd09(lng, lat)
}

/// BD09 -> WGS84（标准参数）
#[must_use]
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    ChinaDatum::STANDARD.bd09_to_wgs84(lng, lat)
}

/// 恒等转换（源坐标系与目标坐标系相同时使用）
#[must_use]
pub fn identity(lng: f64, lat: f64) -> (f64, f64) {
    (lng, lat)
}

// ============================================================================
// 坐标系枚举与分发
// ============================================================================

/// 逐点转换函数类型
///
/// 输入输出均为 `(经度/x, 纬度/y)`，坐标对本身不携带坐标系标签，
/// 由调用方负责跟踪。
pub type PointTransform = fn(f64, f64) -> (f64, f64);

/// 支持的坐标参考系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordSys {
    /// WGS84 全球大地坐标系 (GPS)
    Wgs84,
    /// GCJ02 火星坐标系（国测局加偏）
    Gcj02,
    /// BD09 百度坐标系
    Bd09,
    /// Web Mercator 投影坐标系 (EPSG:3857)
    WebMercator,
}

impl CoordSys {
    /// 获取两个坐标系之间的逐点转换函数
    ///
    /// 支持 {WGS84, GCJ02, BD09} 之间的全部有序组合，以及
    /// WGS84 <-> Web Mercator；源与目标相同时返回恒等转换。
    ///
    /// # Errors
    /// GCJ02/BD09 与 Web Mercator 之间无直接转换，返回错误。
    pub fn transform_to(self, target: CoordSys) -> MgResult<PointTransform> {
        use CoordSys::{Bd09, Gcj02, WebMercator, Wgs84};
        match (self, target) {
            (a, b) if a == b => Ok(identity),
            (Wgs84, Gcj02) => Ok(wgs84_to_gcj02),
            (Gcj02, Wgs84) => Ok(gcj02_to_wgs84),
            (Gcj02, Bd09) => Ok(gcj02_to_bd09),
            (Bd09, Gcj02) => Ok(bd09_to_gcj02),
            (Wgs84, Bd09) => Ok(wgs84_to_bd09),
            (Bd09, Wgs84) => Ok(bd09_to_wgs84),
            (Wgs84, WebMercator) => Ok(crate::web_mercator::wgs84_to_web_mercator),
            (WebMercator, Wgs84) => Ok(crate::web_mercator::web_mercator_to_wgs84),
            (a, b) => Err(MgError::datum(format!("不支持的转换: {a} -> {b}"))),
        }
    }
}

impl fmt::Display for CoordSys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wgs84 => "wgs84",
            Self::Gcj02 => "gcj02",
            Self::Bd09 => "bd09",
            Self::WebMercator => "webmercator",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CoordSys {
    type Err = MgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wgs84" | "epsg:4326" => Ok(Self::Wgs84),
            "gcj02" | "mars" => Ok(Self::Gcj02),
            "bd09" | "baidu" => Ok(Self::Bd09),
            "webmercator" | "mercator" | "epsg:3857" => Ok(Self::WebMercator),
            other => Err(MgError::config(format!(
                "未知坐标系: {other} (支持 wgs84, gcj02, bd09, webmercator)"
            ))),
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
