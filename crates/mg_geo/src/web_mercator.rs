//! Web Mercator 投影正反算 (EPSG:3857)
//!
//! 采用与 WGS84/GCJ02 偏移算法同源的闭式公式。参考实现在正反两个
//! 方向使用了三个略有差异的比例常数（20037508.342789 / 20037508.34789
//! / 20037508.34），属于笔误而非设计；这里统一取 `π·6378137`，
//! 正反算自洽（见 DESIGN.md）。
//!
//! # 注意
//!
//! 本模块不裁剪纬度：`lat = -90` 时 `tan` 为 0，`ln` 产生 `-inf`，
//! 属于文档化的退化行为，不是错误。

use std::f64::consts::PI;

/// Web Mercator 世界半幅 (m)：π·6378137
///
/// 正反算共用同一常数。
pub const WEB_MERCATOR_SCALE: f64 = PI * 6_378_137.0;

/// WGS84 -> Web Mercator
///
/// # Arguments
/// - `lng`: 经度 (度)
/// - `lat`: 纬度 (度)
///
/// # Returns
/// (x, y) 投影坐标 (米)；纬度 ±90 附近 y 为非有限值或极大值
#[must_use]
pub fn wgs84_to_web_mercator(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng * WEB_MERCATOR_SCALE / 180.0;
    let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    (x, y * WEB_MERCATOR_SCALE / 180.0)
}

/// Web Mercator -> WGS84
///
/// 经度为线性反缩放，纬度为逆 Gudermannian 函数。
///
/// # Arguments
/// - `x`: 投影 x 坐标 (米)
/// - `y`: 投影 y 坐标 (米)
///
/// # Returns
/// (lng, lat) 经纬度 (度)
#[must_use]
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lng = x / WEB_MERCATOR_SCALE * 180.0;
    let lat = y / WEB_MERCATOR_SCALE * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
    (lng, lat)
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let (x, y) = wgs84_to_web_mercator(0.0, 0.0);
        assert!(x.abs() < 1e-6, "x: {x}");
        assert!(y.abs() < 1e-6, "y: {y}");
    }

    #[test]
    fn test_inverse_at_equator() {
        // y=0 时纬度必须恰好为 0（atan(exp(0)) = π/4）
        let (lng, lat) = web_mercator_to_wgs84(1_000_000.0, 0.0);
        assert!(lat == 0.0, "lat: {lat}");
        assert!(lng > 8.9 && lng < 9.0, "lng: {lng}");
    }

    #[test]
    fn test_roundtrip() {
        let cases = [(116.404, 39.915), (-74.006, 40.713), (0.0, -33.865)];
        for (lng, lat) in cases {
            let (x, y) = wgs84_to_web_mercator(lng, lat);
            let (lng2, lat2) = web_mercator_to_wgs84(x, y);
            assert!((lng - lng2).abs() < 1e-9, "lng: {lng2}");
            assert!((lat - lat2).abs() < 1e-9, "lat: {lat2}");
        }
    }

    #[test]
    fn test_beijing_known_values() {
        let (x, y) = wgs84_to_web_mercator(116.404, 39.915);
        assert!((x - 12_958_034.0).abs() < 10.0, "x: {x}");
        assert!((y - 4_853_598.0).abs() < 10.0, "y: {y}");
    }

    #[test]
    fn test_degenerate_south_pole() {
        // 不裁剪纬度：lat = -90 时 y 为 -inf
        let (_, y) = wgs84_to_web_mercator(0.0, -90.0);
        assert!(!y.is_finite(), "y: {y}");
    }

    #[test]
    fn test_world_extent() {
        let (x, _) = wgs84_to_web_mercator(180.0, 0.0);
        assert!((x - WEB_MERCATOR_SCALE).abs() < 1e-6);
        let (x, _) = wgs84_to_web_mercator(-180.0, 0.0);
        assert!((x + WEB_MERCATOR_SCALE).abs() < 1e-6);
    }
}
