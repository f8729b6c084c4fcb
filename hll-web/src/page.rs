//! HTML assembly for the availability pages.
//!
//! Markup is built as plain strings; there is no user-controlled input
//! anywhere on these pages, every value interpolated below is numeric
//! or produced locally.

use chrono::DateTime;
use chrono_tz::Tz;

use hll_chart::minute::SpacesChart;
use hll_chart::morning::MorningChart;
use hll_fintraffic::facility::Facility;
use hll_fintraffic::utilization::UtilizationSnapshot;

use crate::text;

const SITE_TITLE: &str = "Hullulahti";
const ATTRIBUTION_URL: &str = "https://parking.fintraffic.fi/facilities/619";
const FETCHED_AT_FORMAT: &str = "%a %d %b %Y %H:%M:%S %Z";

/// Everything the main page render needs, fetched up front.
pub struct MainPage {
    pub facility: Facility,
    pub utilization: UtilizationSnapshot,
    /// Six predictions at 10-minute steps
    pub predictions: Vec<u32>,
    /// Seven predictions at 30-minute steps, absent during the morning
    /// window itself
    pub morning: Option<Vec<u32>>,
    /// Today's 06:00-09:00 bounds, the morning chart's x domain
    pub morning_window: (DateTime<Tz>, DateTime<Tz>),
    pub fetched_at: DateTime<Tz>,
}

/// Everything the compact page render needs.
pub struct CompactPage {
    pub utilization: UtilizationSnapshot,
    /// Six predictions at 5-minute steps
    pub predictions: Vec<u32>,
    pub fetched_at: DateTime<Tz>,
}

/// Render the main page: heading, status sentence, hour chart, and the
/// morning chart when a series is present.
pub fn render_main(page: &MainPage) -> String {
    let current_spaces = text::current_spaces_text(page.utilization.spaces_available);
    let full_at = text::full_at_text(&page.predictions, 10);

    let mut chart_data = vec![page.utilization.spaces_available];
    chart_data.extend_from_slice(&page.predictions);
    let hour_chart = SpacesChart::new(chart_data).to_svg().unwrap_or_default();

    let mut body = String::new();
    body.push_str(
        "<hgroup><h1>Hullulahti</h1><p>Ruoholahti Park &amp; Ride Situation</p></hgroup>",
    );
    body.push_str(&format!(
        "<p>There are currently <strong>{}</strong> available. {}</p>",
        current_spaces, full_at
    ));
    body.push_str(&figure(
        &hour_chart,
        "Predicted availability for the next hour (spaces/minutes)",
    ));
    if let Some(morning) = &page.morning {
        if let Some(svg) = MorningChart::new(morning.clone(), page.morning_window).to_svg() {
            body.push_str(&figure(
                &svg,
                "Predicted availability during peak morning hours (spaces/time)",
            ));
        }
    }
    body.push_str("<h2>What is this website?</h2>");
    body.push_str(&format!(
        "<p>It's crazy that HSL put a Park &amp; Ride as close to the center as \
         {}. With only {} parking spaces, the competitiveness of finding \
         a spot there is also crazy.</p>",
        page.facility.name, page.facility.capacity
    ));
    body.push_str(
        "<p>This website was made to make it easier to know whether you should \
         even bother trying to park there.</p>",
    );
    body.push_str(&attribution(&page.fetched_at));

    layout(SITE_TITLE, &body)
}

/// Render the compact page: graded status line, short sentence, and a
/// half-hour chart at 5-minute steps.
pub fn render_compact(page: &CompactPage) -> String {
    let status = text::graded_status(page.utilization.spaces_available, &page.predictions);
    let current_spaces = text::current_spaces_text(page.utilization.spaces_available);

    let mut chart_data = vec![page.utilization.spaces_available];
    chart_data.extend_from_slice(&page.predictions);
    let chart = SpacesChart::new(chart_data)
        .with_interval(5)
        .to_svg()
        .unwrap_or_default();

    let mut body = String::new();
    body.push_str("<hgroup><h1>Hullulahti</h1><p>Ruoholahti Park &amp; Ride</p></hgroup>");
    body.push_str(&format!("<p class=\"status\">{}</p>", status));
    body.push_str(&format!(
        "<p><strong>{}</strong> available right now.</p>",
        current_spaces
    ));
    body.push_str(&figure(
        &chart,
        "Estimated upcoming availability (spaces/minutes)",
    ));
    body.push_str(&attribution(&page.fetched_at));

    layout(SITE_TITLE, &body)
}

fn figure(svg: &str, caption: &str) -> String {
    format!(
        "<figure>{}<figcaption>{}</figcaption></figure>",
        svg, caption
    )
}

fn attribution(fetched_at: &DateTime<Tz>) -> String {
    format!(
        "<p>Prediction data is from <a href=\"{}\">Fintraffic</a>. \
         Data last fetched: {}.</p>",
        ATTRIBUTION_URL,
        fetched_at.format(FETCHED_AT_FORMAT)
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <meta name=\"description\" content=\"See the crazy situation of Park &amp; Ride in Ruoholahti\">\
         <title>{}</title>\
         <style>{}</style>\
         </head>\
         <body><main>{}</main></body>\
         </html>",
        title, STYLESHEET, body
    )
}

const STYLESHEET: &str = "\
:root{--background-color:#fff;color-scheme:light dark}\
@media (prefers-color-scheme:dark){:root{--background-color:#111}}\
body{margin:0;font-family:Georgia,'Times New Roman',serif;background:var(--background-color)}\
main{max-width:32rem;margin:0 auto;padding:1rem}\
h1{font-size:3.75rem;margin:0}\
hgroup p{font-size:1.5rem;margin:0}\
h2,p{margin:1rem 0}\
.status{font-size:2rem;font-weight:bold}\
figure{margin:1rem 0}\
figcaption{text-align:center;font-size:.875rem}\
svg{width:100%;height:auto}\
a{color:inherit}";
