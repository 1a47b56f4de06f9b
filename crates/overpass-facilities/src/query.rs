//! Overpass QL construction.

use locator_core::Coordinate;

/// Build the Overpass QL query for hospitals around `center`.
///
/// Node-only queries return `lat`/`lon` on each element. With
/// `include_areas` the query matches nodes, ways and relations and asks for
/// `out center;` so non-node elements carry a `center` position instead.
pub fn build_query(
    center: Coordinate,
    radius_meters: f64,
    server_timeout_secs: u64,
    include_areas: bool,
) -> String {
    let (selector, out) = if include_areas {
        ("nwr", "out center;")
    } else {
        ("node", "out;")
    };

    format!(
        "[out:json][timeout:{}];\n{}[\"amenity\"=\"hospital\"](around:{},{},{});\n{}",
        server_timeout_secs,
        selector,
        radius_meters,
        center.latitude(),
        center.longitude(),
        out
    )
}
