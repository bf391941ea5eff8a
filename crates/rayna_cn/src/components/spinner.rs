//! Spinner and circular progress
//!
//! A negative progress renders the indeterminate spinning arc. Anything else
//! is clamped to 0..=100 and drawn as a ring whose dash offset encodes the
//! percentage. [`RingMetrics`] is shared with the upload widgets.

use std::f32::consts::PI;

use rayna_core::{circle, cx, div, el, path, svg, ElementBuilder, Node};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    pub const ALL: [SpinnerSize; 3] = [SpinnerSize::Sm, SpinnerSize::Md, SpinnerSize::Lg];

    pub fn classes(&self) -> &'static str {
        match self {
            SpinnerSize::Sm => "w-5 h-5",
            SpinnerSize::Md => "w-8 h-8",
            SpinnerSize::Lg => "w-12 h-12",
        }
    }

    pub fn view_box(&self) -> f32 {
        match self {
            SpinnerSize::Sm => 20.0,
            SpinnerSize::Md => 32.0,
            SpinnerSize::Lg => 48.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerVariant {
    #[default]
    Primary,
    Secondary,
    Grey,
    Destructive,
}

impl SpinnerVariant {
    pub const ALL: [SpinnerVariant; 4] = [
        SpinnerVariant::Primary,
        SpinnerVariant::Secondary,
        SpinnerVariant::Grey,
        SpinnerVariant::Destructive,
    ];

    pub fn color(&self) -> &'static str {
        match self {
            SpinnerVariant::Primary => "text-[#F56630]",
            SpinnerVariant::Secondary => "text-gray-400",
            SpinnerVariant::Grey => "text-gray-600",
            SpinnerVariant::Destructive => "text-[#CB1A14]",
        }
    }
}

/// Geometry of a progress ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingMetrics {
    pub radius: f32,
    pub circumference: f32,
    pub dash_offset: f32,
}

impl RingMetrics {
    /// `progress` is clamped to 0..=100
    pub fn new(radius: f32, progress: f32) -> Self {
        let progress = progress.clamp(0.0, 100.0);
        let circumference = 2.0 * PI * radius;
        Self {
            radius,
            circumference,
            dash_offset: circumference - progress / 100.0 * circumference,
        }
    }

    /// Ring inset by the stroke inside a square view box
    pub fn for_view_box(view: f32, progress: f32) -> Self {
        Self::new(view / 2.0 - 2.0, progress)
    }
}

/// Two decimals is plenty for SVG coordinates
pub(crate) fn fmt_num(value: f32) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Clone, Debug)]
pub struct Spinner {
    size: SpinnerSize,
    variant: SpinnerVariant,
    progress: f32,
    thickness: f32,
    class: String,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            size: SpinnerSize::default(),
            variant: SpinnerVariant::default(),
            progress: 75.0,
            thickness: 2.0,
            class: String::new(),
        }
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: SpinnerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Percentage complete; negative for indeterminate
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = progress;
        self
    }

    pub fn indeterminate(self) -> Self {
        self.progress(-1.0)
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn is_indeterminate(&self) -> bool {
        self.progress < 0.0
    }

    pub fn metrics(&self) -> RingMetrics {
        RingMetrics::for_view_box(self.size.view_box(), self.progress)
    }
}

impl ElementBuilder for Spinner {
    fn build(&self) -> Node {
        let wrapper = div().class(&cx(["inline-block", self.size.classes(), self.class.as_str()]));
        let stroke = fmt_num(self.thickness);

        if self.is_indeterminate() {
            return wrapper
                .child(
                    svg(24.0, 24.0)
                        .class(&format!("animate-spin {}", self.variant.color()))
                        .child(
                            circle(12.0, 10.0)
                                .class("opacity-25")
                                .attr("stroke", "currentColor")
                                .attr("stroke-width", stroke),
                        )
                        .child(
                            path("M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z")
                                .class("opacity-75")
                                .attr("fill", "currentColor"),
                        ),
                )
                .into_node();
        }

        let view = self.size.view_box();
        let center = view / 2.0;
        let ring = self.metrics();
        let percent = self.progress.clamp(0.0, 100.0).round() as u32;

        wrapper
            .child(
                svg(view, view)
                    .class(self.variant.color())
                    .child(
                        circle(center, ring.radius)
                            .class("opacity-25")
                            .attr("stroke", "#F0F2F5")
                            .attr("stroke-width", stroke.clone()),
                    )
                    .child(
                        circle(center, ring.radius)
                            .class("transition-all duration-300 ease-in-out")
                            .attr("stroke", "#F56630")
                            .attr("stroke-width", stroke)
                            .attr("stroke-dasharray", fmt_num(ring.circumference))
                            .attr("stroke-dashoffset", fmt_num(ring.dash_offset))
                            .attr("stroke-linecap", "round")
                            .attr("transform", format!("rotate(-90 {center} {center})")),
                    )
                    .child(
                        el("text")
                            .attr("x", "50%")
                            .attr("y", "50%")
                            .attr("text-anchor", "middle")
                            .attr("dy", ".3em")
                            .attr("font-family", "Inter")
                            .attr("font-weight", "600")
                            .attr("font-size", fmt_num(view / 5.0))
                            .attr("fill", "#000000")
                            .text(format!("{percent}%")),
                    ),
            )
            .into_node()
    }
}

pub fn spinner() -> Spinner {
    Spinner::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_metrics() {
        let ring = RingMetrics::for_view_box(32.0, 50.0);
        assert_eq!(ring.radius, 14.0);
        assert!((ring.circumference - 2.0 * PI * 14.0).abs() < 1e-4);
        assert!((ring.dash_offset - ring.circumference / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_progress_clamped() {
        let full = RingMetrics::new(18.0, 250.0);
        assert_eq!(full.dash_offset, 0.0);
        let html = spinner().progress(140.0).build().to_html();
        assert!(html.contains("100%"));
    }

    #[test]
    fn test_indeterminate() {
        let s = spinner().indeterminate();
        assert!(s.is_indeterminate());
        assert!(s.build().to_html().contains("animate-spin"));
    }

    #[test]
    fn test_default_label() {
        let html = spinner().build().to_html();
        assert!(html.contains("75%"));
        assert!(html.contains("font-size=\"6.4\""));
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(16.0), "16");
        assert_eq!(fmt_num(87.964594), "87.96");
        assert_eq!(fmt_num(0.5), "0.5");
    }
}
