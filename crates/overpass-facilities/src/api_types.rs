//! Overpass API response types and validated parsing.

use locator_core::{Coordinate, Facility, QueryFailure};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Top-level Overpass JSON response.
///
/// Elements are kept as raw values so a single bad record can be dropped
/// without failing the rest of the batch.
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<Value>,
    #[serde(default)]
    remark: Option<String>,
}

/// One element as returned by `out;` or `out center;`.
///
/// Only the position is typed. Metadata is kept loose so an odd `tags` or
/// `id` costs the record its name, not its place in the result.
#[derive(Debug, Deserialize)]
struct RawElement {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    center: Option<RawCenter>,
    #[serde(default)]
    tags: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawCenter {
    lat: f64,
    lon: f64,
}

impl RawElement {
    fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.as_ref().map(|c| (c.lat, c.lon)),
        }
    }

    fn name(&self) -> Option<&str> {
        self.tags.as_ref()?.get("name")?.as_str()
    }
}

/// Parse an Overpass response body into facilities, in source order.
///
/// Fails only when the payload as a whole is unusable: not JSON, no
/// `elements` array, or a server-side runtime error remark. Individual
/// elements without a valid position are skipped.
pub fn parse_facilities(body: &[u8]) -> Result<Vec<Facility>, QueryFailure> {
    let response: OverpassResponse = serde_json::from_slice(body)
        .map_err(|e| QueryFailure::MalformedPayload(e.to_string()))?;

    // Overpass reports query timeouts and memory exhaustion with a 200 and
    // a remark; the element list is then truncated, not authoritative.
    if let Some(remark) = response.remark.as_deref() {
        if remark.contains("runtime error") {
            return Err(QueryFailure::MalformedPayload(format!(
                "server remark: {}",
                remark
            )));
        }
    }

    let total = response.elements.len();
    let facilities: Vec<Facility> = response
        .elements
        .into_iter()
        .filter_map(parse_element)
        .collect();

    debug!(
        total_elements = total,
        accepted = facilities.len(),
        dropped = total - facilities.len(),
        "Overpass response parsed"
    );

    Ok(facilities)
}

fn parse_element(value: Value) -> Option<Facility> {
    let element: RawElement = match serde_json::from_value(value) {
        Ok(element) => element,
        Err(e) => {
            debug!("Dropping unreadable element: {}", e);
            return None;
        }
    };

    let Some((lat, lon)) = element.position() else {
        debug!(
            kind = ?element.kind,
            id = ?element.id,
            "Dropping element without position"
        );
        return None;
    };

    match Coordinate::new(lat, lon) {
        Ok(position) => Some(Facility::from_source(element.name(), position)),
        Err(e) => {
            debug!(id = ?element.id, "Dropping element with invalid position: {}", e);
            None
        }
    }
}
