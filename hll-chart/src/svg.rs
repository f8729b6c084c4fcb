//! SVG emission helpers: paths, markers, and d3-style axes.
//!
//! Everything here produces plain strings. Colors use `currentColor` so
//! the charts inherit the page's text color; marker fill references the
//! page's `--background-color` custom property.

/// Format a coordinate, trimming a trailing ".0" for the common case.
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Build an SVG path `d` attribute for a polyline through `points`.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push(cmd);
        d.push_str(&fmt_coord(*x));
        d.push(',');
        d.push_str(&fmt_coord(*y));
    }
    d
}

/// The connecting line element.
pub fn line_element(points: &[(f64, f64)]) -> String {
    format!(
        r#"<path fill="none" stroke="currentColor" d="{}"/>"#,
        polyline_path(points)
    )
}

/// Per-point circle markers, radius 2.5, background-filled.
pub fn markers(points: &[(f64, f64)]) -> String {
    let mut out = String::from(r#"<g fill="var(--background-color)" stroke="currentColor">"#);
    for (x, y) in points {
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="2.5"/>"#,
            fmt_coord(*x),
            fmt_coord(*y)
        ));
    }
    out.push_str("</g>");
    out
}

/// One axis tick: a pixel position along the axis and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// A bottom axis at vertical position `y`, spanning `x0..x1`.
pub fn bottom_axis(y: f64, x0: f64, x1: f64, ticks: &[AxisTick]) -> String {
    let mut out = format!(
        r#"<g transform="translate(0,{})" fill="none" font-size="10" font-family="inherit" text-anchor="middle">"#,
        fmt_coord(y)
    );
    out.push_str(&format!(
        r#"<path class="domain" stroke="currentColor" d="M{},6V0.5H{}V6"/>"#,
        fmt_coord(x0),
        fmt_coord(x1)
    ));
    for tick in ticks {
        out.push_str(&format!(
            concat!(
                r#"<g opacity="1" transform="translate({},0)">"#,
                r#"<line stroke="currentColor" y2="6"/>"#,
                r#"<text fill="currentColor" y="9" dy="0.71em">{}</text></g>"#
            ),
            fmt_coord(tick.position),
            tick.label
        ));
    }
    out.push_str("</g>");
    out
}

/// A left axis at horizontal position `x`, spanning `y0..y1` (top to bottom).
pub fn left_axis(x: f64, y0: f64, y1: f64, ticks: &[AxisTick]) -> String {
    let mut out = format!(
        r#"<g transform="translate({},0)" fill="none" font-size="10" font-family="inherit" text-anchor="end">"#,
        fmt_coord(x)
    );
    out.push_str(&format!(
        r#"<path class="domain" stroke="currentColor" d="M-6,{}H0.5V{}H-6"/>"#,
        fmt_coord(y0),
        fmt_coord(y1)
    ));
    for tick in ticks {
        out.push_str(&format!(
            concat!(
                r#"<g opacity="1" transform="translate(0,{})">"#,
                r#"<line stroke="currentColor" x2="-6"/>"#,
                r#"<text fill="currentColor" x="-9" dy="0.32em">{}</text></g>"#
            ),
            fmt_coord(tick.position),
            tick.label
        ));
    }
    out.push_str("</g>");
    out
}

/// Wrap chart content in an `<svg>` document with a viewBox.
pub fn document(width: f64, height: f64, content: &str) -> String {
    format!(
        r#"<svg viewBox="0 0 {} {}" role="img">{}</svg>"#,
        fmt_coord(width),
        fmt_coord(height),
        content
    )
}
