use askama::Template;
use askama_web::WebTemplate;

use crate::iss::GuideReport;
use crate::system::SystemStats;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub stats: Option<SystemStats>,
}

#[derive(Template, WebTemplate)]
#[template(path = "apps.html")]
pub struct AppsTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "iss_guide.html")]
pub struct IssGuideTemplate {
    pub report: GuideReport,
    pub submitted: bool,
    pub lookahead_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iss::IssPositionView;

    #[test]
    fn home_without_stats_says_so() {
        let html = HomeTemplate { stats: None }.render().unwrap();
        assert!(html.contains("System statistics are unavailable."));
        assert!(html.contains("/static/js/system-monitor.js"));
    }

    #[test]
    fn home_lists_stats_for_the_poller() {
        let stats = SystemStats {
            hostname: "pi".into(),
            platform: "Linux 6.1 Debian".into(),
            architecture: "aarch64".into(),
            cpu_temp: "48.3°C".into(),
            cpu_usage: "12.5%".into(),
            memory_total: "3.8GB".into(),
            memory_used: "1.2GB".into(),
            memory_percent: "31.6%".into(),
        };
        let html = HomeTemplate { stats: Some(stats) }.render().unwrap();
        assert!(html.contains("<strong>CPU Temperature:</strong>"));
        assert!(html.contains("48.3°C"));
        assert!(html.contains("style=\"width: 31.6%\""));
        assert!(html.contains("1.2GB / 3.8GB"));
    }

    #[test]
    fn guide_page_escapes_and_lists_passes() {
        let report = GuideReport {
            current_location: Some("<Springfield>".into()),
            latitude: Some(1.5),
            longitude: Some(-2.25),
            timezone: Some("UTC".into()),
            iss_position: Some(IssPositionView {
                latitude: "10.0000".into(),
                longitude: "20.0000".into(),
                altitude: "420.50".into(),
                location_info: "Currently above water".into(),
            }),
            passes: Some(vec!["first".into(), "second".into()]),
            error: None,
        };
        let html = IssGuideTemplate {
            report,
            submitted: true,
            lookahead_days: 10,
        }
        .render()
        .unwrap();

        assert!(html.contains("&lt;Springfield&gt;"));
        assert!(html.contains("Coordinates: 1.5, -2.25"));
        assert!(html.contains("Visible passes (next 10 days)"));
        assert!(html.contains("<h3>Pass 2</h3>"));
        assert!(html.contains("<pre>second</pre>"));
    }

    #[test]
    fn guide_page_shows_top_level_error() {
        let html = IssGuideTemplate {
            report: GuideReport::failed("boom"),
            submitted: true,
            lookahead_days: 10,
        }
        .render()
        .unwrap();
        assert!(html.contains("An error occurred: boom"));
    }
}
