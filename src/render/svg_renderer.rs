use std::fmt::Write as _;

use crate::core::CurveStep;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renders frames into a standalone SVG document for browser embedding.
///
/// Each render replaces the previous document entirely.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_frame(&self, out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
        let (width, height) = (frame.viewport.width, frame.viewport.height);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
        )?;
        writeln!(
            out,
            r#"<rect x="0" y="0" width="{width}" height="{height}" {}/>"#,
            fill(frame.background)
        )?;

        for path in &frame.paths {
            let mut d = format!("M{:.2},{:.2}", path.start.0, path.start.1);
            for step in &path.steps {
                match *step {
                    CurveStep::Line { to } => write!(d, "L{:.2},{:.2}", to.0, to.1)?,
                    CurveStep::Cubic {
                        control1,
                        control2,
                        to,
                    } => write!(
                        d,
                        "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                        control1.0, control1.1, control2.0, control2.1, to.0, to.1
                    )?,
                }
            }
            writeln!(
                out,
                r#"<path d="{d}" fill="none" {} stroke-width="{}"/>"#,
                stroke(path.color),
                path.stroke_width
            )?;
        }

        for circle in &frame.circles {
            writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" {}/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                fill(circle.fill_color)
            )?;
        }

        for rect in &frame.rects {
            writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                fill(rect.fill_color)
            )?;
        }

        for line in &frame.lines {
            writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {} stroke-width="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                stroke(line.color),
                line.stroke_width
            )?;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let weight = if text.bold { r#" font-weight="bold""# } else { "" };
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{anchor}"{weight} {}>{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                fill(text.color),
                escape(&text.text)
            )?;
        }

        out.push_str("</svg>\n");
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut document = String::with_capacity(4096);
        self.write_frame(&mut document, frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = document;
        Ok(())
    }
}

fn fill(color: Color) -> String {
    paint("fill", color)
}

fn stroke(color: Color) -> String {
    paint("stroke", color)
}

fn paint(attribute: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        format!(r#"{attribute}="{}""#, color.to_hex())
    } else {
        format!(
            r#"{attribute}="{}" {attribute}-opacity="{:.3}""#,
            color.to_hex(),
            color.alpha
        )
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape(r#"A&B <"x">"#), "A&amp;B &lt;&quot;x&quot;&gt;");
    }
}
