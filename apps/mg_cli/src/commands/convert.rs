//! 转换命令
//!
//! 对一个或多个 JSON 数据集执行批量坐标转换并写回。
//! 数据集列表以分号分隔，与参考工具的参数约定一致。

use anyhow::{Context, Result};
use clap::Args;
use mg_dataset::convert::convert_feature_class;
use mg_dataset::drivers::JsonFeatureClass;
use mg_dataset::progress::LogProgress;
use mg_dataset::store::FeatureClass;
use mg_geo::CoordSys;
use std::path::PathBuf;
use tracing::info;

/// 转换命令参数
#[derive(Args)]
pub struct ConvertArgs {
    /// 数据集文件路径（分号分隔多个）
    #[arg(short, long)]
    pub datasets: String,

    /// 源坐标系 (wgs84, gcj02, bd09, webmercator)
    #[arg(long, default_value = "wgs84")]
    pub from: String,

    /// 目标坐标系
    #[arg(long, default_value = "gcj02")]
    pub to: String,

    /// 输出目录（缺省为就地写回）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 执行转换命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let source: CoordSys = args.from.parse().context("解析源坐标系失败")?;
    let target: CoordSys = args.to.parse().context("解析目标坐标系失败")?;
    let transform = source.transform_to(target).context("不支持的转换组合")?;

    info!("转换方向: {source} -> {target}");

    for path in args.datasets.split(';').filter(|s| !s.trim().is_empty()) {
        let path = path.trim();
        let mut fc = JsonFeatureClass::open(path)
            .with_context(|| format!("打开数据集失败: {path}"))?;

        info!("{}: {} 条要素", fc.name(), fc.feature_count());

        let mut progress = LogProgress;
        let stats = convert_feature_class(&mut fc, transform, &mut progress)
            .with_context(|| format!("转换失败: {path}"))?;

        match &args.output {
            Some(dir) => {
                let file_name = fc
                    .path()
                    .file_name()
                    .map(std::ffi::OsStr::to_os_string)
                    .unwrap_or_else(|| "dataset.json".into());
                let out = dir.join(file_name);
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("创建输出目录失败: {}", dir.display()))?;
                fc.save_to(&out)
                    .with_context(|| format!("保存失败: {}", out.display()))?;
            }
            None => fc.save().with_context(|| format!("保存失败: {path}"))?,
        }

        info!(
            "{}: 共 {} 条, 成功 {}, 失败 {}",
            fc.name(),
            stats.total,
            stats.converted,
            stats.failed
        );
    }

    Ok(())
}
