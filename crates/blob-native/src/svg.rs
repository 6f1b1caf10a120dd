use crate::scene::SceneFrame;
use anyhow::Context;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub fn render(frame: &SceneFrame, size: u32) -> String {
    let mut svg = String::with_capacity(2048);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(svg, r##"<rect width="100%" height="100%" fill="#1d2b3a"/>"##);
    let _ = writeln!(
        svg,
        r#"<path d="{}" fill="white" fill-opacity="0.15"/>"#,
        frame.large.to_svg_path_data()
    );
    let _ = writeln!(
        svg,
        r#"<path d="{}" fill="white" fill-opacity="0.30"/>"#,
        frame.small.to_svg_path_data()
    );
    let _ = writeln!(
        svg,
        r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="white" fill-opacity="0.45"/>"#,
        frame.center.x, frame.center.y, frame.core_radius
    );
    svg.push_str("</svg>\n");
    svg
}

pub fn write_frame(dir: &Path, index: u32, svg: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("frame_{index:05}.svg"));
    fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
