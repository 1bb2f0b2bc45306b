//! Alert message rendering for each channel.

use lifeline_core::models::{Coordinate, EmergencyAlert, Facility};

/// The alert rendered once per dispatch: a compact SMS body and an HTML body
/// for email. Both embed caller, coordinates, a map link, facility, and time.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub sms_body: String,
    pub html_body: String,
}

impl AlertMessage {
    pub fn render(alert: &EmergencyAlert, facility: &Facility) -> Self {
        let map = map_link(alert.location);
        let time = alert.created_at.to_rfc3339();

        let mut sms_body = format!(
            "EMERGENCY SOS from {caller}\n\
             Location: {lat:.4}, {lon:.4}\n\
             Map: {map}\n\
             Facility: {facility}\n\
             Time: {time}",
            caller = alert.caller_name,
            lat = alert.location.latitude,
            lon = alert.location.longitude,
            facility = facility.name,
        );
        if !alert.message.is_empty() {
            sms_body.push_str("\nNote: ");
            sms_body.push_str(&alert.message);
        }

        let mut html_body = format!(
            "<h2>EMERGENCY SOS</h2>\
             <p><strong>Caller:</strong> {caller}</p>\
             <p><strong>Location:</strong> {lat:.4}, {lon:.4}</p>\
             <p><strong>Map:</strong> <a href=\"{map}\">{map}</a></p>\
             <p><strong>Facility:</strong> {facility}</p>\
             <p><strong>Time:</strong> {time}</p>",
            caller = alert.caller_name,
            lat = alert.location.latitude,
            lon = alert.location.longitude,
            facility = facility.name,
        );
        if !alert.message.is_empty() {
            html_body.push_str(&format!("<p><strong>Note:</strong> {}</p>", alert.message));
        }

        Self { sms_body, html_body }
    }
}

/// Map link for the caller's position.
fn map_link(location: Coordinate) -> String {
    format!(
        "https://maps.google.com/?q={},{}",
        location.latitude, location.longitude
    )
}
