//! 信息命令
//!
//! 打印数据集概要：名称、空间参考、各几何类型计数与整体质心。

use anyhow::{Context, Result};
use clap::Args;
use mg_dataset::drivers::JsonFeatureClass;
use mg_dataset::store::FeatureClass;
use mg_geo::Geometry;
use tracing::info;

/// 信息命令参数
#[derive(Args)]
pub struct InfoArgs {
    /// 数据集文件路径（分号分隔多个）
    #[arg(short, long)]
    pub datasets: String,
}

/// 执行信息命令
#[allow(clippy::cast_precision_loss)]
pub fn execute(args: InfoArgs) -> Result<()> {
    for path in args.datasets.split(';').filter(|s| !s.trim().is_empty()) {
        let path = path.trim();
        let fc = JsonFeatureClass::open(path)
            .with_context(|| format!("打开数据集失败: {path}"))?;

        let mut points = 0usize;
        let mut multipoints = 0usize;
        let mut polylines = 0usize;
        let mut polygons = 0usize;
        let mut sx = 0.0;
        let mut sy = 0.0;
        let mut centroids = 0usize;

        for record in fc.records() {
            match &record.geometry {
                Geometry::Point(_) => points += 1,
                Geometry::Multipoint(_) => multipoints += 1,
                Geometry::Polyline(_) => polylines += 1,
                Geometry::Polygon(_) => polygons += 1,
            }
            if let Some(c) = record.geometry.centroid() {
                sx += c.x;
                sy += c.y;
                centroids += 1;
            }
        }

        info!("数据集: {} ({})", fc.name(), fc.spatial_ref());
        info!(
            "要素: {} (点 {points}, 多点 {multipoints}, 线 {polylines}, 面 {polygons})",
            fc.feature_count()
        );
        if centroids > 0 {
            info!(
                "整体质心: ({:.6}, {:.6})",
                sx / centroids as f64,
                sy / centroids as f64
            );
        }
    }

    Ok(())
}
