//! 24-hour speed history drawn as an inline SVG polyline.

#[cfg(test)]
#[path = "speed_chart_test.rs"]
mod speed_chart_test;

use fleet::asset::SpeedSample;
use leptos::prelude::*;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 160.0;

/// Y-axis ceiling: the peak speed rounded up to the next 20 km/h, at least 20.
#[must_use]
pub fn axis_max(samples: &[SpeedSample]) -> f64 {
    let peak = samples.iter().map(|s| s.speed).fold(0.0_f64, f64::max);
    ((peak / 20.0).ceil() * 20.0).max(20.0)
}

/// `points` attribute for the polyline, scaled into the chart box.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn polyline_points(samples: &[SpeedSample], width: f64, height: f64) -> String {
    if samples.is_empty() {
        return String::new();
    }
    let max = axis_max(samples);
    let step = if samples.len() > 1 { width / (samples.len() - 1) as f64 } else { 0.0 };
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let x = i as f64 * step;
            let y = height - (s.speed.clamp(0.0, max) / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn SpeedChart(samples: Vec<SpeedSample>) -> impl IntoView {
    let max = axis_max(&samples);
    let points = polyline_points(&samples, CHART_WIDTH, CHART_HEIGHT);
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    view! {
        <div class="w-full">
            <div class="flex justify-between text-xs opacity-60">
                <span>{format!("{max:.0} km/h")}</span>
                <span>"Last 24 hours"</span>
            </div>
            <svg class="w-full h-40 text-primary" viewBox=view_box preserveAspectRatio="none">
                <polyline
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    vector-effect="non-scaling-stroke"
                    points=points
                ></polyline>
            </svg>
        </div>
    }
}
